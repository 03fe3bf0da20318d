//! Type definitions for the job search agent's response payloads
//!
//! Everything here arrives from the agent as JSON and is immutable once
//! received. Field names follow the agent's camelCase wire format.

use serde::{Deserialize, Serialize};

/// Sentinel the agent emits when a posting carries no salary information.
pub const SALARY_NOT_SPECIFIED: &str = "Not specified";

// ============================================================================
// Job Posting
// ============================================================================

/// A single job posting as returned by the search agent.
///
/// `link` is the identity key for the whole system: favorites, list-item
/// identity and dedup all key off it. Every field is defaulted so a partial
/// record degrades to empty strings instead of failing the whole payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub posted_date: String,
    #[serde(default)]
    pub salary_range: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub description: String,
}

impl Job {
    /// Salary for display purposes. The agent's "Not specified" sentinel and
    /// the empty string are suppressed; filter and search still operate on
    /// the raw `salary_range`.
    pub fn display_salary(&self) -> Option<&str> {
        if self.salary_range.is_empty() || self.salary_range == SALARY_NOT_SPECIFIED {
            None
        } else {
            Some(&self.salary_range)
        }
    }
}

/// Identity-keyed lookup into a job collection.
///
/// Duplicate links are allowed within one fetch result; when they occur the
/// last occurrence wins, so the scan runs back-to-front.
pub fn find_by_link<'a>(jobs: &'a [Job], link: &str) -> Option<&'a Job> {
    jobs.iter().rev().find(|job| job.link == link)
}

// ============================================================================
// Agent Response Payload
// ============================================================================

/// Job list wrapper inside a successful payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobList {
    #[serde(default)]
    pub jobs: Vec<Job>,
}

/// The domain payload carried in the agent's reply envelope.
///
/// `metadata` is display-only information (agent name, timestamp, totals);
/// it is never inspected for control flow.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobResponsePayload {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub result: JobList,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

impl JobResponsePayload {
    /// Whether the payload reports a semantically successful search.
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}
