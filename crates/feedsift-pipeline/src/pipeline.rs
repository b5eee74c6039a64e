//! Job orchestration.

use std::time::Duration;

use chrono::Utc;
use feedsift_core::{AppConfig, JobConfig};

use crate::classify::classify;
use crate::dedup::{dedup_entries, DEFAULT_SIMILARITY_THRESHOLD};
use crate::error::PipelineError;
use crate::output;
use crate::rank::rank_entries;
use crate::sources::collect_entries;
use crate::types::{FeedMeta, JobSummary, RawEntry};

/// Run one configured job end to end.
///
/// 1. Fetch all sources in order, skipping failed ones with a warning.
/// 2. Classify each entry against the job's filter rule.
/// 3. Drop near-duplicate titles across sources, first occurrence wins.
/// 4. Rank by publication time, newest first, undated last.
/// 5. Write the RSS 2.0 output file.
///
/// Zero surviving entries still writes a valid, empty feed.
///
/// # Errors
///
/// Returns [`PipelineError`] only for terminal failures: HTTP client
/// construction or writing the output document. Source failures are
/// recovered per source and reported in the summary instead.
pub async fn run_job(config: &AppConfig, job: &JobConfig) -> Result<JobSummary, PipelineError> {
    let slug = job.slug();

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.fetch_timeout_secs))
        .user_agent(&config.user_agent)
        .build()?;

    let (raw, failed_sources) = collect_entries(&client, &job.sources).await;
    let fetched = raw.len();

    let mut accepted: Vec<RawEntry> = Vec::new();
    for entry in raw {
        if classify(&entry, &job.filter) {
            accepted.push(entry);
        } else {
            tracing::debug!(job = %slug, title = %entry.title, "entry rejected by filter");
        }
    }
    let accepted_count = accepted.len();

    let threshold = job
        .similarity_threshold
        .unwrap_or(DEFAULT_SIMILARITY_THRESHOLD);
    let unique = dedup_entries(accepted, threshold);
    let ranked = rank_entries(unique);

    output::write_feed(&job.output, &FeedMeta::from(&job.feed), &ranked, Utc::now())?;

    let summary = JobSummary {
        slug,
        fetched,
        accepted: accepted_count,
        retained: ranked.len(),
        failed_sources,
    };
    tracing::info!(
        job = %summary.slug,
        fetched = summary.fetched,
        accepted = summary.accepted,
        retained = summary.retained,
        failed_sources = summary.failed_sources,
        output = %job.output.display(),
        "job complete"
    );

    Ok(summary)
}
