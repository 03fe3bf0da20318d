//! Job posting pipeline
//!
//! Aggregates job postings from a single search-agent call and derives an
//! interactive, filterable view over them:
//!
//! - [`fetch`] — invokes the search transport, normalizes the reply into
//!   the [`types::Job`] model and tracks loading/error/last-updated state.
//! - [`recency`] — classifies posting timestamps into relative-age labels
//!   and the "new" flag.
//! - [`filters`] — conjunctive keyword / location / date filtering over
//!   the collection.
//! - [`favorites`] — starred links, persisted to local key/value storage
//!   on every mutation.
//!
//! The pipeline is pure at the seams: "now" and all collaborators are
//! injected, so every piece runs under test without a UI harness.

pub mod config;
pub mod favorites;
pub mod fetch;
pub mod filters;
pub mod recency;
pub mod types;

pub use config::Config;
pub use favorites::{BaseKeyValueStore, FavoritesStore, FileStore, MemoryStore};
pub use fetch::{AgentTransport, BaseSearchTransport, FetchController, NoopSearchTransport};
pub use filters::{apply as apply_filters, available_locations, DateFilter, FilterState};
pub use recency::{classify, Recency};
pub use types::{Job, JobResponsePayload};
