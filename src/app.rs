use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/auth/login", post(handlers::login))
        .route("/api/auth/logout", post(handlers::logout))
        .route("/api/profile", get(handlers::get_profile).put(handlers::update_profile))
        .route("/api/check-ins", get(handlers::list_check_ins).post(handlers::create_check_in))
        .route("/api/dashboard", get(handlers::get_dashboard))
        .route("/api/insight", get(handlers::get_insight))
        .route("/api/insight/refresh", post(handlers::refresh_insight_now))
        .route("/api/insight/tasks/toggle", post(handlers::toggle_task))
        .route("/api/forum/posts", get(handlers::list_posts).post(handlers::create_post))
        .route("/api/forum/posts/:id/replies", post(handlers::create_reply))
        .route("/api/events", get(handlers::list_events))
        .route("/api/events/:id/join", post(handlers::join_event))
        .route("/api/session", get(handlers::get_session).post(handlers::update_session))
        .with_state(state)
}
