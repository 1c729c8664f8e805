use once_cell::sync::Lazy;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::{json, Value};
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

const FALLBACK_TEXT: &str = "A Gentle Thought: You are doing a wonderful job. \nRECIPE: Simple Avocado Toast with hemp seeds for healthy fats.\nDaily Tasks:\nTASK: Drink a warm glass of water.\nTASK: Take three deep breaths.\nTASK: Rest for five minutes.";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CheckInResponse {
    streak: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DashboardResponse {
    name: String,
    streak: u32,
    last_check_in: Option<Value>,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_data_dir() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("fourth_trimester_http_{}_{}", std::process::id(), nanos));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/events")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let child = Command::new(env!("CARGO_BIN_EXE_fourth_trimester"))
        .env("PORT", port.to_string())
        .env("APP_DATA_DIR", unique_data_dir())
        .env_remove("GEMINI_API_KEY")
        .env_remove("API_KEY")
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn sign_in(client: &Client, base_url: &str) -> Value {
    client
        .post(format!("{base_url}/api/auth/login"))
        .json(&json!({ "email": "ana@example.com", "password": "secret", "kidsAges": "2 mo" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

fn check_in_body() -> Value {
    json!({
        "happiness": 4,
        "pain": 2,
        "nausea": 1,
        "swelling": 1,
        "fatigue": 3,
        "milkSupply": 3,
        "notes": "Baby slept well"
    })
}

#[tokio::test]
async fn http_sign_in_defaults_name_and_birth_type() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let profile = sign_in(&client, &server.base_url).await;
    assert_eq!(profile["name"], "New Mama");
    assert_eq!(profile["birthType"], "Vaginal");
    assert_eq!(profile["kids"], 1);

    let missing_password = client
        .post(format!("{}/api/auth/login", server.base_url))
        .json(&json!({ "email": "ana@example.com", "password": "" }))
        .send()
        .await
        .unwrap();
    assert_eq!(missing_password.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn http_check_in_updates_dashboard_streak() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    sign_in(&client, &server.base_url).await;

    let first: CheckInResponse = client
        .post(format!("{}/api/check-ins", server.base_url))
        .json(&check_in_body())
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(first.streak >= 1);

    let dashboard: DashboardResponse = client
        .get(format!("{}/api/dashboard", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(dashboard.name, "New Mama");
    assert_eq!(dashboard.streak, first.streak);
    assert!(dashboard.last_check_in.is_some());

    for (field, value) in [("pain", 9), ("happiness", -1), ("fatigue", 300)] {
        let mut bad = check_in_body();
        bad[field] = json!(value);
        let rejected = client
            .post(format!("{}/api/check-ins", server.base_url))
            .json(&bad)
            .send()
            .await
            .unwrap();
        assert_eq!(rejected.status(), StatusCode::BAD_REQUEST, "{field} = {value}");
    }
}

#[tokio::test]
async fn http_insight_without_key_uses_fallback() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    sign_in(&client, &server.base_url).await;
    client
        .post(format!("{}/api/check-ins", server.base_url))
        .json(&check_in_body())
        .send()
        .await
        .unwrap();

    let deadline = Instant::now() + Duration::from_secs(3);
    let panel: Value = loop {
        let panel: Value = client
            .get(format!("{}/api/insight", server.base_url))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        if !panel["insight"].is_null() && panel["loading"] == false {
            break panel;
        }
        if Instant::now() > deadline {
            panic!("insight never arrived: {panel}");
        }
        sleep(Duration::from_millis(50)).await;
    };

    let insight = &panel["insight"];
    assert_eq!(insight["recipe"], "Simple Avocado Toast with hemp seeds for healthy fats.");
    assert_eq!(insight["tasks"].as_array().unwrap().len(), 3);
    assert_eq!(insight["sources"], json!([]));
    assert!(FALLBACK_TEXT.contains(insight["tasks"][0].as_str().unwrap()));

    let toggled: Value = client
        .post(format!("{}/api/insight/tasks/toggle", server.base_url))
        .json(&json!({ "task": "Rest for five minutes." }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(toggled["completed"]["completed"], json!(["Rest for five minutes."]));

    let refreshed = client
        .post(format!("{}/api/insight/refresh", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(refreshed.status(), StatusCode::OK);
    let refreshed: Value = refreshed.json().await.unwrap();
    assert!(refreshed["generation"].as_u64().unwrap() > panel["generation"].as_u64().unwrap());
    assert_eq!(refreshed["completed"]["completed"], json!([]));
}

#[tokio::test]
async fn http_forum_post_and_reply() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    sign_in(&client, &server.base_url).await;

    let post: Value = client
        .post(format!("{}/api/forum/posts", server.base_url))
        .json(&json!({ "content": "Any baby groups in Dundas?" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(post["location"], "Hamilton, Ontario");
    assert_eq!(post["authorEmail"], "ana@example.com");

    let posts: Vec<Value> = client
        .get(format!("{}/api/forum/posts", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(posts[0]["id"], post["id"]);

    let id = post["id"].as_str().unwrap();
    let replied: Value = client
        .post(format!("{}/api/forum/posts/{id}/replies", server.base_url))
        .json(&json!({ "content": "Try the library on Thursdays." }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(replied["replies"].as_array().unwrap().len(), 1);

    let missing = client
        .post(format!("{}/api/forum/posts/nope/replies", server.base_url))
        .json(&json!({ "content": "hello" }))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn http_joining_event_twice_keeps_one_entry() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    sign_in(&client, &server.base_url).await;

    let mut last = Value::Null;
    for _ in 0..2 {
        last = client
            .post(format!("{}/api/events/e1/join", server.base_url))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
    }

    let attendees = last["attendees"].as_array().unwrap();
    let mine = attendees.iter().filter(|a| *a == "ana@example.com").count();
    assert_eq!(mine, 1);
    assert!(attendees.iter().any(|a| a == "sarah@example.com"));
}

#[tokio::test]
async fn http_logout_requires_sign_in_again() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    sign_in(&client, &server.base_url).await;

    let session: Value = client
        .post(format!("{}/api/session", server.base_url))
        .json(&json!({ "command": "select_tab", "value": "community" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(session["tab"], "community");

    let session: Value = client
        .post(format!("{}/api/auth/logout", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(session["tab"], "dashboard");

    let profile = client
        .get(format!("{}/api/profile", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(profile.status(), StatusCode::UNAUTHORIZED);
}
