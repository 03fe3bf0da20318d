//! Conjunctive filtering over the job collection
//!
//! The engine is a pure function over (jobs, filter state, now): it never
//! mutates the collection and is cheap enough to re-run on every keystroke.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::recency;
use crate::types::Job;

/// Date bucket filter for postings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DateFilter {
    #[default]
    All,
    Today,
    Week,
}

impl DateFilter {
    pub fn label(&self) -> &'static str {
        match self {
            DateFilter::All => "All Dates",
            DateFilter::Today => "Posted Today",
            DateFilter::Week => "Past Week",
        }
    }

    pub fn variants() -> &'static [DateFilter] {
        &[DateFilter::All, DateFilter::Today, DateFilter::Week]
    }
}

/// User-selected filter criteria. A derived view over the collection; never
/// mutates it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search_keyword: String,
    pub location_filter: HashSet<String>,
    pub date_filter: DateFilter,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset every criterion so the filtered view equals the collection.
    pub fn clear(&mut self) {
        self.search_keyword.clear();
        self.location_filter.clear();
        self.date_filter = DateFilter::All;
    }
}

/// Apply all active criteria conjunctively, preserving collection order.
pub fn apply(jobs: &[Job], state: &FilterState, now: DateTime<Utc>) -> Vec<Job> {
    let keyword = state.search_keyword.to_lowercase();

    jobs.iter()
        .filter(|job| matches(job, &keyword, state, now))
        .cloned()
        .collect()
}

fn matches(job: &Job, keyword: &str, state: &FilterState, now: DateTime<Utc>) -> bool {
    // Keyword: case-insensitive substring over any of the text fields.
    if !keyword.is_empty() {
        let hit = job.title.to_lowercase().contains(keyword)
            || job.company.to_lowercase().contains(keyword)
            || job.description.to_lowercase().contains(keyword)
            || job.location.to_lowercase().contains(keyword);
        if !hit {
            return false;
        }
    }

    // Location: exact set membership, case-sensitive.
    if !state.location_filter.is_empty() && !state.location_filter.contains(&job.location) {
        return false;
    }

    match state.date_filter {
        DateFilter::All => true,
        DateFilter::Today => recency::is_new(&job.posted_date, now),
        // Unlike Today, an unparseable date is excluded here outright rather
        // than falling through the is-new check.
        DateFilter::Week => match recency::parse_timestamp(&job.posted_date) {
            Some(posted) => (now - posted).num_seconds() as f64 / 86_400.0 <= 7.0,
            None => false,
        },
    }
}

/// Choice set for the location filter: sorted, duplicate-free, non-empty
/// locations present in the current collection.
pub fn available_locations(jobs: &[Job]) -> Vec<String> {
    let mut locations: Vec<String> = jobs
        .iter()
        .filter(|job| !job.location.is_empty())
        .map(|job| job.location.clone())
        .collect();
    locations.sort_unstable();
    locations.dedup();
    locations
}
