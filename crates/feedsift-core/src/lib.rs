//! Configuration layer for feedsift.
//!
//! Runtime knobs come from environment variables ([`AppConfig`]); the
//! per-job surface (sources, filter rules, output paths) comes from a YAML
//! jobs file ([`load_jobs`]).

mod app_config;
mod config;
mod error;
mod jobs;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use jobs::{load_jobs, FeedMetaConfig, FilterRule, JobConfig, JobsFile};
