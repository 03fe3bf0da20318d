//! Fetch orchestration
//!
//! Owns the canonical job collection and the loading/error/last-updated
//! state around it. Each `refresh` makes exactly one transport call; a
//! failure leaves the previous collection visible.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{info, warn};

use agent_client::{AgentClient, AgentReply};

use crate::types::{Job, JobResponsePayload};

/// Message shown when neither the payload nor the transport says why the
/// fetch failed.
pub const GENERIC_FETCH_ERROR: &str = "Failed to fetch jobs";

// =============================================================================
// Search Transport Trait (Infrastructure)
// =============================================================================

/// The external search collaborator. Implementations own the agent
/// identifier they address; the orchestrator only supplies the query.
#[async_trait]
pub trait BaseSearchTransport: Send + Sync {
    /// Run one search and return the raw reply envelope. `Err` means a
    /// transport-level failure; a `success: false` envelope is `Ok`.
    async fn search(&self, query: &str) -> Result<AgentReply>;
}

/// Production transport backed by the hosted search agent.
pub struct AgentTransport {
    client: AgentClient,
}

impl AgentTransport {
    pub fn new(client: AgentClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BaseSearchTransport for AgentTransport {
    async fn search(&self, query: &str) -> Result<AgentReply> {
        Ok(self.client.invoke(query).await?)
    }
}

/// No-op transport for tests or when no agent is configured. Always
/// resolves to an empty successful result set.
pub struct NoopSearchTransport;

#[async_trait]
impl BaseSearchTransport for NoopSearchTransport {
    async fn search(&self, _query: &str) -> Result<AgentReply> {
        warn!("NoopSearchTransport: search called but no agent configured");
        Ok(AgentReply::ok(serde_json::json!({
            "status": "success",
            "result": { "jobs": [] }
        })))
    }
}

// =============================================================================
// Fetch Controller
// =============================================================================

/// State machine around the job collection: Idle/Success -> Loading ->
/// Success | Error. Entering Loading clears any prior error; both exits
/// clear the loading flag.
pub struct FetchController {
    transport: Arc<dyn BaseSearchTransport>,
    query: String,
    jobs: Vec<Job>,
    loading: bool,
    error: Option<String>,
    last_updated: Option<DateTime<Utc>>,
}

impl FetchController {
    pub fn new(transport: Arc<dyn BaseSearchTransport>, query: impl Into<String>) -> Self {
        Self {
            transport,
            query: query.into(),
            jobs: Vec::new(),
            loading: false,
            error: None,
            last_updated: None,
        }
    }

    /// The canonical collection from the latest successful fetch.
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.last_updated
    }

    /// Run one fetch cycle. Safe to call repeatedly; each call resets the
    /// loading/error state and makes a single transport call. Results are
    /// applied in completion order, so overlapping calls resolve
    /// last-writer-wins.
    pub async fn refresh(&mut self) {
        self.loading = true;
        self.error = None;

        let outcome = self.transport.search(&self.query).await;
        self.apply(outcome, Utc::now());
    }

    fn apply(&mut self, outcome: Result<AgentReply>, now: DateTime<Utc>) {
        match outcome {
            Ok(reply) => self.apply_reply(reply, now),
            Err(e) => {
                warn!(error = %e, "Job fetch transport failure");
                self.error = Some(e.to_string());
            }
        }
        self.loading = false;
    }

    fn apply_reply(&mut self, reply: AgentReply, now: DateTime<Utc>) {
        let payload: Option<JobResponsePayload> =
            serde_json::from_value(reply.response).ok();

        match payload {
            Some(payload) if reply.success && payload.is_success() => {
                // Wholesale replacement; the collection is never merged.
                info!(count = payload.result.jobs.len(), "Job collection replaced");
                self.jobs = payload.result.jobs;
                self.last_updated = Some(now);
            }
            payload => {
                let message = payload
                    .and_then(|p| p.message)
                    .or(reply.error)
                    .unwrap_or_else(|| GENERIC_FETCH_ERROR.to_string());
                warn!(error = %message, "Job fetch failed");
                self.error = Some(message);
            }
        }
    }
}
