use crate::insight::gemini::DEFAULT_API_BASE;
use std::{env, path::PathBuf};

pub const DEFAULT_PRIMARY_MODEL: &str = "gemini-3-pro-preview";
pub const DEFAULT_SECONDARY_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_COMMUNITY_LOCATION: &str = "Hamilton, Ontario";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
    pub data_dir: PathBuf,
    pub api_key: Option<String>,
    pub api_base: String,
    pub primary_model: String,
    pub secondary_model: String,
    pub community_location: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        Self {
            port: get("PORT")
                .and_then(|value| value.parse::<u16>().ok())
                .unwrap_or(8080),
            data_dir: get("APP_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("data")),
            api_key: get("GEMINI_API_KEY").or_else(|| get("API_KEY")),
            api_base: get("GEMINI_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            primary_model: get("INSIGHT_PRIMARY_MODEL")
                .unwrap_or_else(|| DEFAULT_PRIMARY_MODEL.to_string()),
            secondary_model: get("INSIGHT_SECONDARY_MODEL")
                .unwrap_or_else(|| DEFAULT_SECONDARY_MODEL.to_string()),
            community_location: get("COMMUNITY_LOCATION")
                .unwrap_or_else(|| DEFAULT_COMMUNITY_LOCATION.to_string()),
        }
    }
}
