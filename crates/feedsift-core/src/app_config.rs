use std::path::PathBuf;

/// Runtime configuration resolved from environment variables.
///
/// Everything here has a default; a bare environment is a valid one.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Path to the YAML jobs file.
    pub jobs_path: PathBuf,
    /// Default tracing filter when `RUST_LOG` is not set.
    pub log_level: String,
    /// Per-request timeout for source feed fetches.
    pub fetch_timeout_secs: u64,
    /// User agent sent with every feed request.
    pub user_agent: String,
}
