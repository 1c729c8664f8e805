//! REST client for the generative-language `generateContent` endpoint.

use crate::insight::provider::{GenerateRequest, GenerateResponse, GenerativeModel, InsightError, Source};
use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

pub struct GeminiClient {
    client: HttpClient,
    api_base: String,
    api_key: Option<String>,
}

impl GeminiClient {
    pub fn new(api_base: impl Into<String>, api_key: Option<String>) -> Result<Self, InsightError> {
        let client = HttpClient::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|err| InsightError::Transport(err.to_string()))?;

        Ok(Self {
            client,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            api_key: api_key.filter(|key| !key.is_empty()),
        })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireRequest<'a> {
    contents: Vec<WireContent<'a>>,
    system_instruction: WireContent<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<WireTool>>,
    generation_config: WireGenerationConfig,
}

#[derive(Serialize)]
struct WireContent<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<WirePart<'a>>,
}

#[derive(Serialize)]
struct WirePart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireTool {
    google_search: serde_json::Map<String, serde_json::Value>,
}

#[derive(Serialize)]
struct WireGenerationConfig {
    temperature: f32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireResponse {
    candidates: Vec<WireCandidate>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct WireCandidate {
    content: Option<WireResponseContent>,
    grounding_metadata: Option<WireGroundingMetadata>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireResponseContent {
    parts: Vec<WireResponsePart>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireResponsePart {
    text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct WireGroundingMetadata {
    grounding_chunks: Vec<WireGroundingChunk>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireGroundingChunk {
    web: Option<Source>,
}

fn to_wire(request: &GenerateRequest) -> WireRequest<'_> {
    WireRequest {
        contents: vec![WireContent {
            role: Some("user"),
            parts: vec![WirePart {
                text: &request.prompt,
            }],
        }],
        system_instruction: WireContent {
            role: None,
            parts: vec![WirePart {
                text: &request.system_instruction,
            }],
        },
        tools: request.grounded.then(|| {
            vec![WireTool {
                google_search: serde_json::Map::new(),
            }]
        }),
        generation_config: WireGenerationConfig {
            temperature: request.temperature,
        },
    }
}

fn from_wire(response: WireResponse) -> GenerateResponse {
    let Some(candidate) = response.candidates.into_iter().next() else {
        return GenerateResponse::default();
    };

    let text = candidate
        .content
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect::<String>()
        })
        .filter(|text| !text.is_empty());

    let sources = candidate
        .grounding_metadata
        .map(|metadata| {
            metadata
                .grounding_chunks
                .into_iter()
                .map(|chunk| chunk.web.unwrap_or_default())
                .collect()
        })
        .unwrap_or_default();

    GenerateResponse { text, sources }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, InsightError> {
        let api_key = self.api_key.as_deref().ok_or(InsightError::MissingApiKey)?;
        let url = format!("{}/models/{}:generateContent", self.api_base, request.model);
        debug!(model = %request.model, grounded = request.grounded, "requesting insight");

        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", api_key)
            .json(&to_wire(request))
            .send()
            .await
            .map_err(|err| InsightError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(InsightError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let payload: WireResponse = response
            .json()
            .await
            .map_err(|err| InsightError::Decode(err.to_string()))?;

        Ok(from_wire(payload))
    }
}
