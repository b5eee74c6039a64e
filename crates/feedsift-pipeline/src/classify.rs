//! Entry classification.
//!
//! Pure decision logic: no IO and no logging here. The orchestrator
//! aggregates decisions and logs rejections separately.

use feedsift_core::FilterRule;

use crate::types::RawEntry;

/// Decide whether an entry belongs in the job's output feed.
///
/// Category mode: the entry must match at least one inclusion signal
/// (category term, title keyword, or link substring) and none of the
/// exclusion keywords over title + summary. Entries that fail inclusion are
/// rejected without running the exclusion check.
///
/// Topic mode: the keyword must appear verbatim in the title or summary.
/// Topic keywords are typically non-Latin text, so matching is
/// case-sensitive exactly like the aggregation this mode serves.
///
/// Never fails; missing entry fields were defaulted to empty text at the
/// source adapter.
#[must_use]
pub fn classify(entry: &RawEntry, rule: &FilterRule) -> bool {
    match rule {
        FilterRule::Category {
            include,
            link_substrings,
            exclude,
        } => matches_inclusion(entry, include, link_substrings) && !matches_exclusion(entry, exclude),
        FilterRule::Topic { keyword } => {
            entry.title.contains(keyword.as_str()) || entry.summary.contains(keyword.as_str())
        }
    }
}

/// Inclusion signals in priority order: category terms, then title, then
/// link. First match wins; all are logically OR'd.
fn matches_inclusion(entry: &RawEntry, include: &[String], link_substrings: &[String]) -> bool {
    let include_lower: Vec<String> = include.iter().map(|kw| kw.to_lowercase()).collect();

    for term in &entry.categories {
        let term = term.to_lowercase();
        if include_lower.iter().any(|kw| term.contains(kw.as_str())) {
            return true;
        }
    }

    let title = entry.title.to_lowercase();
    if include_lower.iter().any(|kw| title.contains(kw.as_str())) {
        return true;
    }

    let link = entry.link.to_lowercase();
    link_substrings
        .iter()
        .any(|sub| link.contains(&sub.to_lowercase()))
}

/// Blocklist check over the concatenated title and summary, case-insensitive.
fn matches_exclusion(entry: &RawEntry, exclude: &[String]) -> bool {
    let haystack = format!("{} {}", entry.title, entry.summary).to_lowercase();
    exclude.iter().any(|kw| haystack.contains(&kw.to_lowercase()))
}
