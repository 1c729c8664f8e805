use crate::errors::AppError;
use crate::models::{
    CheckInRequest, CheckInResponse, CommunityEvent, ContentRequest, DailyCheckIn,
    DashboardResponse, ForumPost, ForumReply, LoginRequest, MilestoneResponse, ToggleTaskRequest,
    UserProfile,
};
use crate::session::{Action, CommunityTab, InsightPanel, Session, Tab};
use crate::state::AppState;
use crate::storage::Slot;
use crate::streak::{current_streak, milestone};
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

const DEFAULT_NAME: &str = "New Mama";

pub async fn index() -> Html<String> {
    Html(render_index())
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<UserProfile>, AppError> {
    let email = payload.email.trim();
    if email.is_empty() || payload.password.is_empty() {
        return Err(AppError::bad_request("email and password are required"));
    }

    let name = payload.name.trim();
    let profile = UserProfile {
        id: Uuid::new_v4().to_string(),
        name: if name.is_empty() { DEFAULT_NAME.to_string() } else { name.to_string() },
        email: email.to_string(),
        kids: payload.kids.unwrap_or(1),
        kids_ages: payload.kids_ages,
        birth_type: Default::default(),
        medical_notes: payload.health_issues.clone(),
        diagnoses: payload.health_issues,
        location: None,
    };

    let mut data = state.data.lock().await;
    state.store.set(Slot::Profile, &profile).await?;
    data.profile = Some(profile.clone());
    info!(email = %profile.email, "signed in");

    Ok(Json(profile))
}

pub async fn logout(State(state): State<AppState>) -> Result<Json<Session>, AppError> {
    let mut data = state.data.lock().await;
    state.store.remove(Slot::Profile).await?;
    data.profile = None;
    drop(data);

    Ok(Json(state.dispatch(Action::LoggedOut).await))
}

pub async fn get_profile(State(state): State<AppState>) -> Result<Json<UserProfile>, AppError> {
    let data = state.data.lock().await;
    data.profile.clone().map(Json).ok_or_else(AppError::unauthorized)
}

pub async fn update_profile(
    State(state): State<AppState>,
    Json(profile): Json<UserProfile>,
) -> Result<Json<UserProfile>, AppError> {
    let mut data = state.data.lock().await;
    if data.profile.is_none() {
        return Err(AppError::unauthorized());
    }
    state.store.set(Slot::Profile, &profile).await?;
    data.profile = Some(profile.clone());
    let has_check_in = !data.check_ins.is_empty();
    drop(data);

    if has_check_in {
        spawn_insight_refresh(state);
    }
    Ok(Json(profile))
}

pub async fn list_check_ins(State(state): State<AppState>) -> Json<Vec<DailyCheckIn>> {
    let data = state.data.lock().await;
    Json(data.check_ins.clone())
}

pub async fn create_check_in(
    State(state): State<AppState>,
    Json(payload): Json<CheckInRequest>,
) -> Result<Json<CheckInResponse>, AppError> {
    let check_in = payload
        .into_check_in(Utc::now())
        .map_err(|field| AppError::bad_request(format!("{field} must be between 1 and 5")))?;

    let mut data = state.data.lock().await;
    if data.profile.is_none() {
        return Err(AppError::unauthorized());
    }
    data.check_ins.insert(0, check_in.clone());
    state.store.set(Slot::CheckIns, &data.check_ins).await?;
    let streak = current_streak(&data.check_ins);
    drop(data);

    info!(streak, "check-in saved");
    state.dispatch(Action::CheckInSaved).await;
    spawn_insight_refresh(state);

    Ok(Json(CheckInResponse { check_in, streak }))
}

pub async fn get_dashboard(State(state): State<AppState>) -> Result<Json<DashboardResponse>, AppError> {
    let data = state.data.lock().await;
    let profile = data.profile.as_ref().ok_or_else(AppError::unauthorized)?;
    let streak = current_streak(&data.check_ins);
    let milestone = milestone(streak);

    Ok(Json(DashboardResponse {
        name: profile.name.clone(),
        streak,
        milestone: MilestoneResponse {
            days_to_next: milestone.days_to_next,
            progress_percent: milestone.progress_percent,
        },
        last_check_in: data.check_ins.first().cloned(),
    }))
}

/// Returns the insight panel, fetching the first insight if none exists yet.
pub async fn get_insight(State(state): State<AppState>) -> Result<Json<InsightPanel>, AppError> {
    let panel = state.session.lock().await.insight.clone();
    if panel.insight.is_some() || panel.loading {
        return Ok(Json(panel));
    }
    Ok(Json(refresh_insight(&state).await?))
}

pub async fn refresh_insight_now(State(state): State<AppState>) -> Result<Json<InsightPanel>, AppError> {
    Ok(Json(refresh_insight(&state).await?))
}

pub async fn toggle_task(
    State(state): State<AppState>,
    Json(payload): Json<ToggleTaskRequest>,
) -> Json<InsightPanel> {
    Json(state.dispatch(Action::ToggleTask(payload.task)).await.insight)
}

async fn refresh_insight(state: &AppState) -> Result<InsightPanel, AppError> {
    let (profile, check_in) = {
        let data = state.data.lock().await;
        let profile = data.profile.clone().ok_or_else(AppError::unauthorized)?;
        let check_in = data
            .check_ins
            .first()
            .cloned()
            .ok_or_else(|| AppError::not_found("no check-in yet"))?;
        (profile, check_in)
    };

    let generation = state.dispatch(Action::InsightRequested).await.insight.generation;
    let insight = state.insights.insight(&profile, &check_in).await;
    let session = state
        .dispatch(Action::InsightLoaded {
            generation,
            insight: insight.into(),
        })
        .await;

    Ok(session.insight)
}

fn spawn_insight_refresh(state: AppState) {
    tokio::spawn(async move {
        if let Err(err) = refresh_insight(&state).await {
            warn!("insight refresh skipped: {}", err.message);
        }
    });
}

pub async fn list_posts(State(state): State<AppState>) -> Json<Vec<ForumPost>> {
    let data = state.data.lock().await;
    Json(data.posts.clone())
}

pub async fn create_post(
    State(state): State<AppState>,
    Json(payload): Json<ContentRequest>,
) -> Result<Json<ForumPost>, AppError> {
    if payload.content.trim().is_empty() {
        return Err(AppError::bad_request("content must not be empty"));
    }

    let mut data = state.data.lock().await;
    let author = data.profile.as_ref().ok_or_else(AppError::unauthorized)?;
    let post = ForumPost {
        id: Uuid::new_v4().to_string(),
        author_name: author.name.clone(),
        author_email: author.email.clone(),
        content: payload.content,
        timestamp: Utc::now().timestamp_millis(),
        location: state.community_location.clone(),
        replies: Vec::new(),
    };
    data.posts.insert(0, post.clone());
    state.store.set(Slot::Posts, &data.posts).await?;
    drop(data);

    state.dispatch(Action::PostSubmitted).await;
    Ok(Json(post))
}

pub async fn create_reply(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
    Json(payload): Json<ContentRequest>,
) -> Result<Json<ForumPost>, AppError> {
    if payload.content.trim().is_empty() {
        return Err(AppError::bad_request("content must not be empty"));
    }

    let mut data = state.data.lock().await;
    let author_name = data
        .profile
        .as_ref()
        .map(|profile| profile.name.clone())
        .ok_or_else(AppError::unauthorized)?;
    let post = data
        .posts
        .iter_mut()
        .find(|post| post.id == post_id)
        .ok_or_else(|| AppError::not_found("no such post"))?;
    post.replies.push(ForumReply {
        id: Uuid::new_v4().to_string(),
        author_name,
        content: payload.content,
        timestamp: Utc::now().timestamp_millis(),
    });
    let updated = post.clone();
    state.store.set(Slot::Posts, &data.posts).await?;
    drop(data);

    state.dispatch(Action::ReplySubmitted).await;
    Ok(Json(updated))
}

pub async fn list_events(State(state): State<AppState>) -> Json<Vec<CommunityEvent>> {
    let data = state.data.lock().await;
    Json(data.events.clone())
}

pub async fn join_event(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Result<Json<CommunityEvent>, AppError> {
    let mut data = state.data.lock().await;
    let email = data
        .profile
        .as_ref()
        .map(|profile| profile.email.clone())
        .ok_or_else(AppError::unauthorized)?;
    let event = data
        .events
        .iter_mut()
        .find(|event| event.id == event_id)
        .ok_or_else(|| AppError::not_found("no such event"))?;
    let joined = event.join(&email);
    let updated = event.clone();
    if joined {
        state.store.set(Slot::Events, &data.events).await?;
    }

    Ok(Json(updated))
}

#[derive(Debug, Deserialize)]
#[serde(tag = "command", content = "value", rename_all = "snake_case")]
pub enum SessionCommand {
    SelectTab(Tab),
    SelectCommunityTab(CommunityTab),
    EditPostDraft(String),
    StartReply(String),
    EditReplyDraft(String),
    CancelReply,
}

impl From<SessionCommand> for Action {
    fn from(command: SessionCommand) -> Self {
        match command {
            SessionCommand::SelectTab(tab) => Action::SelectTab(tab),
            SessionCommand::SelectCommunityTab(tab) => Action::SelectCommunityTab(tab),
            SessionCommand::EditPostDraft(draft) => Action::EditPostDraft(draft),
            SessionCommand::StartReply(post_id) => Action::StartReply(post_id),
            SessionCommand::EditReplyDraft(draft) => Action::EditReplyDraft(draft),
            SessionCommand::CancelReply => Action::CancelReply,
        }
    }
}

pub async fn get_session(State(state): State<AppState>) -> Json<Session> {
    Json(state.session.lock().await.clone())
}

pub async fn update_session(
    State(state): State<AppState>,
    Json(command): Json<SessionCommand>,
) -> Json<Session> {
    Json(state.dispatch(command.into()).await)
}
