use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

/// Search prompt sent to the agent when none is configured.
pub const DEFAULT_SEARCH_QUERY: &str = "Find current backend developer job openings in the \
     United States. Include job title, company name, location, salary range if available, \
     and application links.";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub agent_id: String,
    pub agent_api_url: Option<String>,
    pub favorites_dir: PathBuf,
    pub search_query: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            agent_id: env::var("AGENT_ID").context("AGENT_ID must be set")?,
            agent_api_url: env::var("AGENT_API_URL").ok(),
            favorites_dir: env::var("FAVORITES_DIR")
                .unwrap_or_else(|_| ".scout".to_string())
                .into(),
            search_query: env::var("SEARCH_QUERY")
                .unwrap_or_else(|_| DEFAULT_SEARCH_QUERY.to_string()),
        })
    }
}
