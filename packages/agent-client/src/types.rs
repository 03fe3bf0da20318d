//! Wire types for agent invocations.

use serde::{Deserialize, Serialize};

/// Request body for an agent invocation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvokeRequest {
    pub message: String,
    pub agent_id: String,
}

/// Envelope returned by the agent endpoint.
///
/// `response` is kept as raw JSON: what it contains depends entirely on the
/// agent being invoked, and interpreting it is the caller's job.
#[derive(Debug, Clone, Deserialize)]
pub struct AgentReply {
    pub success: bool,
    #[serde(default)]
    pub response: serde_json::Value,
    #[serde(default)]
    pub error: Option<String>,
}

impl AgentReply {
    /// A successful reply carrying the given payload. Handy for tests and
    /// no-op transports.
    pub fn ok(response: serde_json::Value) -> Self {
        Self {
            success: true,
            response,
            error: None,
        }
    }

    /// A failed reply with an error message and no payload.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            response: serde_json::Value::Null,
            error: Some(error.into()),
        }
    }
}
