//! Date normalization and the per-date / per-week bucketing used to group
//! tasks and diary entries.
//!
//! All calendar math is done on `YYYY-MM-DD` strings (UTC convention); weeks
//! start on Monday, which is the natural key for vlogs and week-scoped task
//! queries.

use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate};
use serde::Serialize;

use crate::error::CoreError;
use crate::types::TaskState;

/// Normalize a date input to `YYYY-MM-DD`.
///
/// Already-formatted date strings pass through unchanged; RFC 3339 date-time
/// strings are truncated to their UTC date component. Idempotent.
pub fn normalize_date(input: &str) -> Result<String, CoreError> {
    if NaiveDate::parse_from_str(input, "%Y-%m-%d").is_ok() {
        return Ok(input.to_string());
    }
    match DateTime::parse_from_rfc3339(input) {
        Ok(dt) => Ok(dt.to_utc().date_naive().format("%Y-%m-%d").to_string()),
        Err(_) => Err(CoreError::Validation(format!(
            "Not a date or RFC 3339 date-time: {input:?}"
        ))),
    }
}

/// Monday of the ISO week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - chrono::Days::new(u64::from(date.weekday().num_days_from_monday()))
}

/// Parse a `YYYY-MM-DD` string into a [`NaiveDate`].
pub fn parse_date(input: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| CoreError::Validation(format!("Invalid date: {input:?}")))
}

/// Group a flat list into per-date buckets.
///
/// Each date's items keep their original relative order; the map itself is
/// keyed by date string, which for `YYYY-MM-DD` sorts chronologically.
pub fn group_by_date<T>(items: Vec<T>, date_of: impl Fn(&T) -> String) -> BTreeMap<String, Vec<T>> {
    let mut grouped: BTreeMap<String, Vec<T>> = BTreeMap::new();
    for item in items {
        grouped.entry(date_of(&item)).or_default().push(item);
    }
    grouped
}

/// Per-date partition of tasks by state.
#[derive(Debug, Clone, Serialize)]
pub struct StateBuckets<T> {
    pub active: Vec<T>,
    pub completed: Vec<T>,
    pub failed: Vec<T>,
}

// Manual impl: the derive would require `T: Default`, and bucketed item
// types have no reason to provide one.
impl<T> Default for StateBuckets<T> {
    fn default() -> Self {
        Self {
            active: Vec::new(),
            completed: Vec::new(),
            failed: Vec::new(),
        }
    }
}

/// Per-date counts of tasks by state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StateCounts {
    pub active: i64,
    pub completed: i64,
    pub failed: i64,
}

/// Group tasks by date and partition each date by task state.
///
/// A state string outside the known enum is an error, never a silent drop:
/// a task disappearing from grouped results would look like data loss to the
/// caller.
pub fn group_by_date_and_state<T>(
    items: Vec<T>,
    date_of: impl Fn(&T) -> String,
    state_of: impl Fn(&T) -> &str,
) -> Result<BTreeMap<String, StateBuckets<T>>, CoreError> {
    let mut grouped: BTreeMap<String, StateBuckets<T>> = BTreeMap::new();
    for item in items {
        let state = TaskState::from_str(state_of(&item))?;
        let buckets = grouped.entry(date_of(&item)).or_default();
        match state {
            TaskState::Active => buckets.active.push(item),
            TaskState::Completed => buckets.completed.push(item),
            TaskState::Failed => buckets.failed.push(item),
        }
    }
    Ok(grouped)
}

/// Like [`group_by_date_and_state`] but reports only counts per bucket.
///
/// Exists for lightweight polling; the full entity lists are never
/// materialized.
pub fn counts_by_date<T>(
    items: &[T],
    date_of: impl Fn(&T) -> String,
    state_of: impl Fn(&T) -> &str,
) -> Result<BTreeMap<String, StateCounts>, CoreError> {
    let mut counts: BTreeMap<String, StateCounts> = BTreeMap::new();
    for item in items {
        let state = TaskState::from_str(state_of(item))?;
        let entry = counts.entry(date_of(item)).or_default();
        match state {
            TaskState::Active => entry.active += 1,
            TaskState::Completed => entry.completed += 1,
            TaskState::Failed => entry.failed += 1,
        }
    }
    Ok(counts)
}
