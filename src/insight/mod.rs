pub mod gemini;
pub mod parser;
pub mod prompt;
pub mod provider;

pub use gemini::GeminiClient;
pub use parser::{parse, Block, ParsedInsight, TaskChecklist};
pub use provider::{fallback_insight, GenerativeModel, Insight, InsightError, InsightProvider, Source};

use serde::Serialize;

/// An insight as shown on the dashboard: parsed text plus its citations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedInsight {
    #[serde(flatten)]
    pub parsed: ParsedInsight,
    pub sources: Vec<Source>,
}

impl From<Insight> for RenderedInsight {
    fn from(insight: Insight) -> Self {
        Self {
            parsed: parse(&insight.text),
            sources: insight.sources,
        }
    }
}
