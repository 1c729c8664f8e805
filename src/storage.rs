use crate::errors::StoreError;
use crate::models::{AppData, CommunityEvent, DailyCheckIn, ForumPost, UserProfile};
use crate::seed::{seed_events, seed_posts};
use serde::{de::DeserializeOwned, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{error, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Profile,
    CheckIns,
    Posts,
    Events,
}

impl Slot {
    pub fn key(self) -> &'static str {
        match self {
            Slot::Profile => "ft_user",
            Slot::CheckIns => "ft_checkins",
            Slot::Posts => "ft_posts",
            Slot::Events => "ft_events",
        }
    }
}

/// String-keyed store with one JSON document per key. Writes replace the
/// whole value; the last writer wins.
#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, slot: Slot) -> PathBuf {
        self.dir.join(format!("{}.json", slot.key()))
    }

    pub async fn get(&self, slot: Slot) -> Option<String> {
        match fs::read_to_string(self.path(slot)).await {
            Ok(raw) => Some(raw),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => {
                error!(key = slot.key(), "failed to read store entry: {err}");
                None
            }
        }
    }

    pub async fn set<T: Serialize + ?Sized>(&self, slot: Slot, value: &T) -> Result<(), StoreError> {
        let payload = serde_json::to_vec_pretty(value).map_err(|source| StoreError::Serialize {
            key: slot.key().to_string(),
            source,
        })?;
        let io_err = |source: std::io::Error| StoreError::Io {
            key: slot.key().to_string(),
            source,
        };
        fs::create_dir_all(&self.dir).await.map_err(io_err)?;
        fs::write(self.path(slot), payload).await.map_err(io_err)?;
        Ok(())
    }

    pub async fn remove(&self, slot: Slot) -> Result<(), StoreError> {
        match fs::remove_file(self.path(slot)).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Io {
                key: slot.key().to_string(),
                source,
            }),
        }
    }
}

fn decode<T: DeserializeOwned>(slot: Slot, raw: Option<&str>) -> Option<T> {
    let raw = raw?;
    match serde_json::from_str(raw) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(key = slot.key(), "ignoring malformed store entry: {err}");
            None
        }
    }
}

/// Missing or malformed means signed out.
pub fn profile_or_default(raw: Option<&str>) -> Option<UserProfile> {
    decode(Slot::Profile, raw)
}

pub fn check_ins_or_default(raw: Option<&str>) -> Vec<DailyCheckIn> {
    decode(Slot::CheckIns, raw).unwrap_or_default()
}

/// Returns the stored posts, or the seed posts and `true` when the seed was used.
pub fn posts_or_seed(raw: Option<&str>, now_ms: i64) -> (Vec<ForumPost>, bool) {
    match decode(Slot::Posts, raw) {
        Some(posts) => (posts, false),
        None => (seed_posts(now_ms), true),
    }
}

pub fn events_or_seed(raw: Option<&str>) -> (Vec<CommunityEvent>, bool) {
    match decode(Slot::Events, raw) {
        Some(events) => (events, false),
        None => (seed_events(), true),
    }
}

/// Reads every slot, writing seed records back for slots that had none.
pub async fn load_data(store: &Store, now_ms: i64) -> AppData {
    let profile = profile_or_default(store.get(Slot::Profile).await.as_deref());
    let check_ins = check_ins_or_default(store.get(Slot::CheckIns).await.as_deref());

    let (posts, seeded_posts) = posts_or_seed(store.get(Slot::Posts).await.as_deref(), now_ms);
    if seeded_posts {
        if let Err(err) = store.set(Slot::Posts, &posts).await {
            error!("failed to persist seed posts: {err}");
        }
    }

    let (events, seeded_events) = events_or_seed(store.get(Slot::Events).await.as_deref());
    if seeded_events {
        if let Err(err) = store.set(Slot::Events, &events).await {
            error!("failed to persist seed events: {err}");
        }
    }

    AppData {
        profile,
        check_ins,
        posts,
        events,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_or_malformed_profile_means_signed_out() {
        assert_eq!(profile_or_default(None), None);
        assert_eq!(profile_or_default(Some("{not json")), None);
    }

    #[test]
    fn malformed_check_ins_default_to_empty() {
        assert!(check_ins_or_default(Some("[1, 2")).is_empty());
        assert!(check_ins_or_default(None).is_empty());
    }

    #[test]
    fn stored_posts_win_over_seed() {
        let (posts, seeded) = posts_or_seed(Some("[]"), 0);
        assert!(posts.is_empty());
        assert!(!seeded);

        let (posts, seeded) = posts_or_seed(None, 0);
        assert_eq!(posts.len(), 2);
        assert!(seeded);
    }

    #[test]
    fn malformed_events_fall_back_to_seed() {
        let (events, seeded) = events_or_seed(Some("{\"oops\":true}"));
        assert_eq!(events.len(), 2);
        assert!(seeded);
    }

    #[tokio::test]
    async fn set_get_remove_round_through_files() {
        let dir = tempdir().unwrap();
        let store = Store::new(dir.path().join("nested"));

        assert_eq!(store.get(Slot::CheckIns).await, None);
        store.set(Slot::CheckIns, &Vec::<DailyCheckIn>::new()).await.unwrap();
        assert_eq!(store.get(Slot::CheckIns).await.as_deref(), Some("[]"));

        store.remove(Slot::CheckIns).await.unwrap();
        store.remove(Slot::CheckIns).await.unwrap();
        assert_eq!(store.get(Slot::CheckIns).await, None);
    }

    #[tokio::test]
    async fn first_load_writes_seeds_back() {
        let dir = tempdir().unwrap();
        let store = Store::new(dir.path());

        let data = load_data(&store, 1_000_000).await;
        assert!(data.profile.is_none());
        assert!(data.check_ins.is_empty());
        assert_eq!(data.posts.len(), 2);
        assert!(store.get(Slot::Posts).await.is_some());
        assert!(store.get(Slot::Events).await.is_some());
        assert!(store.get(Slot::Profile).await.is_none());
    }

    #[tokio::test]
    async fn stored_posts_survive_reload() {
        let dir = tempdir().unwrap();
        let store = Store::new(dir.path());
        let mut data = load_data(&store, 0).await;
        data.posts.truncate(1);
        store.set(Slot::Posts, &data.posts).await.unwrap();

        let reloaded = load_data(&store, 0).await;
        assert_eq!(reloaded.posts.len(), 1);
    }
}
