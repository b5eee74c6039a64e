//! Retained-entry ordering.

use chrono::{DateTime, Utc};

use crate::types::RawEntry;

/// Order entries by publication time, newest first.
///
/// Undated entries are treated as having the minimum possible timestamp, so
/// they sort after every dated entry. The sort is stable: entries with
/// equal (or absent) timestamps keep their relative input order.
#[must_use]
pub fn rank_entries(mut entries: Vec<RawEntry>) -> Vec<RawEntry> {
    entries.sort_by_key(|e| std::cmp::Reverse(e.published.unwrap_or(DateTime::<Utc>::MIN_UTC)));
    entries
}
