pub mod app;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod insight;
pub mod models;
pub mod seed;
pub mod session;
pub mod state;
pub mod storage;
pub mod streak;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use storage::{load_data, Store};
