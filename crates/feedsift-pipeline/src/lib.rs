//! Feed filtering pipeline for feedsift.
//!
//! Fetches RSS/RDF/Atom sources, classifies entries against a job's filter
//! rule, drops near-duplicate stories across sources by title similarity,
//! ranks by publication time, and writes the surviving entries as an RSS 2.0
//! document. Each run is stateless: the output file is the only artifact.

pub mod classify;
pub mod dedup;
pub mod error;
pub mod pipeline;
pub mod rank;
pub mod sources;
pub mod types;

mod output;

pub use classify::classify;
pub use dedup::{dedup_entries, similarity, DEFAULT_SIMILARITY_THRESHOLD};
pub use error::PipelineError;
pub use pipeline::run_job;
pub use rank::rank_entries;
pub use sources::{collect_entries, fetch_feed};
pub use types::{FeedMeta, JobSummary, RawEntry};
