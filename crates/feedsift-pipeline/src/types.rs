use chrono::{DateTime, Utc};
use feedsift_core::FeedMetaConfig;

/// A single feed entry as fetched from one source.
///
/// All fields are defaulted at the source adapter boundary: a feed item
/// missing its title, link, or summary yields empty text here, never an
/// error. Immutable once fetched.
#[derive(Debug, Clone)]
pub struct RawEntry {
    pub title: String,
    pub link: String,
    /// Summary or description text; empty when the feed carried none.
    pub summary: String,
    /// Category/tag terms; empty for feeds without them.
    pub categories: Vec<String>,
    /// Publication time, falling back to the feed's updated time.
    pub published: Option<DateTime<Utc>>,
    /// URL of the originating feed, kept for provenance and logging.
    pub source: String,
}

/// Channel-level metadata for the output document.
#[derive(Debug, Clone)]
pub struct FeedMeta {
    pub title: String,
    pub description: String,
    pub link: String,
    pub language: String,
}

impl From<&FeedMetaConfig> for FeedMeta {
    fn from(config: &FeedMetaConfig) -> Self {
        Self {
            title: config.title.clone(),
            description: config.description.clone(),
            link: config.link.clone(),
            language: config.language.clone(),
        }
    }
}

/// Counts reported after one job run.
#[derive(Debug, Clone)]
pub struct JobSummary {
    pub slug: String,
    /// Entries fetched across all sources, before classification.
    pub fetched: usize,
    /// Entries that passed classification.
    pub accepted: usize,
    /// Entries written to the output feed after deduplication.
    pub retained: usize,
    /// Sources that failed to fetch or parse this run.
    pub failed_sources: usize,
}
