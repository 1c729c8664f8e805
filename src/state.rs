use crate::insight::InsightProvider;
use crate::models::AppData;
use crate::session::{reduce, Action, Session};
use crate::storage::Store;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub data: Arc<Mutex<AppData>>,
    pub session: Arc<Mutex<Session>>,
    pub insights: InsightProvider,
    pub community_location: String,
}

impl AppState {
    pub fn new(
        store: Store,
        data: AppData,
        insights: InsightProvider,
        community_location: impl Into<String>,
    ) -> Self {
        Self {
            store,
            data: Arc::new(Mutex::new(data)),
            session: Arc::new(Mutex::new(Session::default())),
            insights,
            community_location: community_location.into(),
        }
    }

    /// Applies `action` to the session and returns the resulting state.
    pub async fn dispatch(&self, action: Action) -> Session {
        let mut session = self.session.lock().await;
        *session = reduce(std::mem::take(&mut *session), action);
        session.clone()
    }
}
