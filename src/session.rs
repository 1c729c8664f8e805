//! Transient view state. Every transition goes through [`reduce`].

use crate::insight::{RenderedInsight, TaskChecklist};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Dashboard,
    Checkin,
    Community,
    Profile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CommunityTab {
    #[default]
    Forum,
    Events,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InsightPanel {
    pub loading: bool,
    /// Bumped on every request; responses carrying an older value are dropped.
    pub generation: u64,
    pub insight: Option<RenderedInsight>,
    pub completed: TaskChecklist,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Session {
    pub tab: Tab,
    pub community_tab: CommunityTab,
    pub post_draft: String,
    pub reply_target: Option<String>,
    pub reply_draft: String,
    pub insight: InsightPanel,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SelectTab(Tab),
    SelectCommunityTab(CommunityTab),
    EditPostDraft(String),
    PostSubmitted,
    StartReply(String),
    EditReplyDraft(String),
    CancelReply,
    ReplySubmitted,
    CheckInSaved,
    LoggedOut,
    InsightRequested,
    InsightLoaded {
        generation: u64,
        insight: RenderedInsight,
    },
    ToggleTask(String),
}

pub fn reduce(mut state: Session, action: Action) -> Session {
    match action {
        Action::SelectTab(tab) => state.tab = tab,
        Action::SelectCommunityTab(tab) => state.community_tab = tab,
        Action::EditPostDraft(draft) => state.post_draft = draft,
        Action::PostSubmitted => state.post_draft.clear(),
        Action::StartReply(post_id) => {
            state.reply_target = Some(post_id);
            state.reply_draft.clear();
        }
        Action::EditReplyDraft(draft) => state.reply_draft = draft,
        Action::CancelReply | Action::ReplySubmitted => {
            state.reply_target = None;
            state.reply_draft.clear();
        }
        Action::CheckInSaved => state.tab = Tab::Dashboard,
        Action::LoggedOut => {
            // The counter survives so responses started before logout stay stale.
            let mut fresh = Session::default();
            fresh.insight.generation = state.insight.generation;
            return fresh;
        }
        Action::InsightRequested => {
            let panel = &mut state.insight;
            panel.generation = panel.generation.wrapping_add(1);
            panel.loading = true;
            panel.completed.clear();
        }
        Action::InsightLoaded {
            generation,
            insight,
        } => {
            let panel = &mut state.insight;
            if generation == panel.generation {
                panel.loading = false;
                panel.insight = Some(insight);
            }
        }
        Action::ToggleTask(task) => {
            state.insight.completed.toggle(&task);
        }
    }
    state
}
