//! Pure HTTP client for the AI search-agent REST API
//!
//! A minimal client for invoking a hosted search agent with no
//! domain-specific logic. The agent is addressed by its identifier; the
//! reply envelope is returned as-is for the caller to interpret.
//!
//! # Example
//!
//! ```rust,ignore
//! use agent_client::AgentClient;
//!
//! let client = AgentClient::from_env()?;
//! let reply = client.invoke("Find current backend developer job openings").await?;
//! if reply.success {
//!     println!("{}", reply.response);
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{AgentError, Result};
pub use types::{AgentReply, InvokeRequest};

use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

const DEFAULT_BASE_URL: &str = "https://api.aiagentplatform.com/v1";

/// HTTP client for a single hosted agent.
#[derive(Clone)]
pub struct AgentClient {
    http_client: Client,
    agent_id: String,
    base_url: String,
}

impl AgentClient {
    /// Create a new client for the given agent identifier.
    pub fn new(agent_id: impl Into<String>) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| AgentError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            agent_id: agent_id.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Create from environment variable `AGENT_ID`, honoring `AGENT_API_URL`
    /// when set.
    pub fn from_env() -> Result<Self> {
        let agent_id =
            std::env::var("AGENT_ID").map_err(|_| AgentError::Config("AGENT_ID not set".into()))?;
        let mut client = Self::new(agent_id)?;
        if let Ok(url) = std::env::var("AGENT_API_URL") {
            client = client.with_base_url(url);
        }
        Ok(client)
    }

    /// Set a custom base URL (for proxies or self-hosted deployments).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Get the agent identifier.
    pub fn agent_id(&self) -> &str {
        &self.agent_id
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Invoke the agent with a message and return the reply envelope.
    ///
    /// Transport-level failures (connection refused, timeout, non-2xx
    /// status, malformed JSON) surface as `Err`; a reply with
    /// `success: false` is a valid envelope and is returned as `Ok`.
    pub async fn invoke(&self, message: &str) -> Result<AgentReply> {
        let start = std::time::Instant::now();

        let request = InvokeRequest {
            message: message.to_string(),
            agent_id: self.agent_id.clone(),
        };

        let response = self
            .http_client
            .post(format!("{}/agents/{}/invoke", self.base_url, self.agent_id))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Agent request failed");
                AgentError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Agent API error");
            return Err(AgentError::Api(format!("Agent API error: {}", error_text)));
        }

        let reply: AgentReply = response
            .json()
            .await
            .map_err(|e| AgentError::Parse(e.to_string()))?;

        debug!(
            agent_id = %self.agent_id,
            success = reply.success,
            duration_ms = start.elapsed().as_millis(),
            "Agent invocation complete"
        );

        Ok(reply)
    }
}
