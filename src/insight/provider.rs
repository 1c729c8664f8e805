use crate::insight::prompt::{build_prompt, system_instruction};
use crate::models::{DailyCheckIn, UserProfile};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

pub const SECONDARY_EMPTY_TEXT: &str = "I'm thinking of some gentle tips for you...";

pub const FALLBACK_TEXT: &str = "A Gentle Thought: You are doing a wonderful job. \nRECIPE: Simple Avocado Toast with hemp seeds for healthy fats.\nDaily Tasks:\nTASK: Drink a warm glass of water.\nTASK: Take three deep breaths.\nTASK: Rest for five minutes.";

const TEMPERATURE: f32 = 0.3;

#[derive(Debug, Error)]
pub enum InsightError {
    #[error("no API key configured")]
    MissingApiKey,
    #[error("transport error: {0}")]
    Transport(String),
    #[error("upstream returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("response contained no text")]
    EmptyResponse,
}

/// A grounding citation. The upstream may omit either field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub title: Option<String>,
    pub uri: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insight {
    pub text: String,
    pub sources: Vec<Source>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    pub model: String,
    pub system_instruction: String,
    pub prompt: String,
    pub grounded: bool,
    pub temperature: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerateResponse {
    pub text: Option<String>,
    pub sources: Vec<Source>,
}

#[async_trait]
pub trait GenerativeModel: Send + Sync {
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, InsightError>;
}

/// Produces an insight for the latest check-in. Never fails: a grounded
/// answer, an ungrounded answer, or the canned fallback.
#[derive(Clone)]
pub struct InsightProvider {
    model: Arc<dyn GenerativeModel>,
    primary_model: String,
    secondary_model: String,
}

impl InsightProvider {
    pub fn new(
        model: Arc<dyn GenerativeModel>,
        primary_model: impl Into<String>,
        secondary_model: impl Into<String>,
    ) -> Self {
        Self {
            model,
            primary_model: primary_model.into(),
            secondary_model: secondary_model.into(),
        }
    }

    pub async fn insight(&self, profile: &UserProfile, check_in: &DailyCheckIn) -> Insight {
        let instruction = system_instruction();
        let prompt = build_prompt(profile, check_in);

        let primary = self.request(&self.primary_model, &instruction, &prompt, true);
        let failure = match self.model.generate(&primary).await {
            Ok(GenerateResponse {
                text: Some(text),
                sources,
            }) if !text.is_empty() => {
                info!(model = %self.primary_model, sources = sources.len(), "grounded insight ready");
                return Insight { text, sources };
            }
            Ok(_) => InsightError::EmptyResponse,
            Err(err) => err,
        };
        warn!(model = %self.primary_model, error = %failure, "primary insight failed");

        let secondary = self.request(&self.secondary_model, &instruction, &prompt, false);
        match self.model.generate(&secondary).await {
            Ok(response) => {
                info!(model = %self.secondary_model, "ungrounded insight ready");
                let text = response
                    .text
                    .filter(|text| !text.is_empty())
                    .unwrap_or_else(|| SECONDARY_EMPTY_TEXT.to_string());
                Insight {
                    text,
                    sources: Vec::new(),
                }
            }
            Err(err) => {
                warn!(model = %self.secondary_model, error = %err, "secondary insight failed, using fallback");
                fallback_insight()
            }
        }
    }

    fn request(&self, model: &str, instruction: &str, prompt: &str, grounded: bool) -> GenerateRequest {
        GenerateRequest {
            model: model.to_string(),
            system_instruction: instruction.to_string(),
            prompt: prompt.to_string(),
            grounded,
            temperature: TEMPERATURE,
        }
    }
}

pub fn fallback_insight() -> Insight {
    Insight {
        text: FALLBACK_TEXT.to_string(),
        sources: Vec::new(),
    }
}
