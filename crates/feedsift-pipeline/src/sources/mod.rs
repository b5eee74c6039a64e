//! Source feed fetching and aggregation.

mod fetch;

pub use fetch::fetch_feed;

use reqwest::Client;

use crate::types::RawEntry;

/// Fetch every source in order and aggregate entries in encounter order.
///
/// Sources are fetched one at a time, in the configured sequence.
/// Continues past individual source failures, logging warnings; a failed
/// source contributes zero entries. Returns the aggregated entries and the
/// number of sources that failed.
pub async fn collect_entries(client: &Client, urls: &[String]) -> (Vec<RawEntry>, usize) {
    let mut entries = Vec::new();
    let mut failed = 0_usize;

    for url in urls {
        match fetch_feed(client, url).await {
            Ok(fetched) => {
                tracing::debug!(source = %url, count = fetched.len(), "collected feed entries");
                entries.extend(fetched);
            }
            Err(e) => {
                tracing::warn!(
                    source = %url,
                    error = %e,
                    "source fetch failed; continuing without it"
                );
                failed += 1;
            }
        }
    }

    (entries, failed)
}
