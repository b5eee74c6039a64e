use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// How a job decides which entries belong in its output feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum FilterRule {
    /// Category-gated filter: an entry is eligible when a category term,
    /// the title, or the link matches an inclusion signal, and is then
    /// dropped if title+summary hits any exclusion keyword.
    Category {
        include: Vec<String>,
        #[serde(default)]
        link_substrings: Vec<String>,
        #[serde(default)]
        exclude: Vec<String>,
    },
    /// Single-topic aggregation: an entry is eligible when the keyword
    /// appears verbatim in the title or summary.
    Topic { keyword: String },
}

impl FilterRule {
    #[must_use]
    pub fn mode(&self) -> &'static str {
        match self {
            FilterRule::Category { .. } => "category",
            FilterRule::Topic { .. } => "topic",
        }
    }
}

/// Channel-level metadata for a job's output feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedMetaConfig {
    pub title: String,
    pub description: String,
    pub link: String,
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    "en".to_string()
}

/// One configured pipeline run: sources in, filtered feed out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobConfig {
    pub name: String,
    pub sources: Vec<String>,
    pub filter: FilterRule,
    /// Title similarity above which a later entry is dropped as a
    /// near-duplicate. Defaults to 0.85 when absent.
    #[serde(default)]
    pub similarity_threshold: Option<f32>,
    pub output: PathBuf,
    pub feed: FeedMetaConfig,
}

impl JobConfig {
    /// Generate a URL-safe slug from the job name.
    #[must_use]
    pub fn slug(&self) -> String {
        self.name
            .to_lowercase()
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' {
                    c
                } else if c == ' ' {
                    '-'
                } else {
                    '\0'
                }
            })
            .filter(|&c| c != '\0')
            .collect::<String>()
            .split('-')
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("-")
    }
}

#[derive(Debug, Deserialize)]
pub struct JobsFile {
    pub jobs: Vec<JobConfig>,
}

/// Load and validate the jobs configuration from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_jobs(path: &Path) -> Result<JobsFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::JobsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let jobs_file: JobsFile = serde_yaml::from_str(&content)?;

    validate_jobs(&jobs_file)?;

    Ok(jobs_file)
}

fn validate_jobs(jobs_file: &JobsFile) -> Result<(), ConfigError> {
    let mut seen_slugs = HashSet::new();

    for job in &jobs_file.jobs {
        if job.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "job name must be non-empty".to_string(),
            ));
        }

        if job.sources.is_empty() {
            return Err(ConfigError::Validation(format!(
                "job '{}' has no sources",
                job.name
            )));
        }

        if let Some(threshold) = job.similarity_threshold {
            if !(threshold > 0.0 && threshold <= 1.0) {
                return Err(ConfigError::Validation(format!(
                    "job '{}' has similarity_threshold {threshold}; must be in (0, 1]",
                    job.name
                )));
            }
        }

        match &job.filter {
            FilterRule::Category {
                include,
                link_substrings,
                ..
            } => {
                if include.is_empty() && link_substrings.is_empty() {
                    return Err(ConfigError::Validation(format!(
                        "job '{}' has a category filter with no include keywords or link substrings",
                        job.name
                    )));
                }
            }
            FilterRule::Topic { keyword } => {
                if keyword.trim().is_empty() {
                    return Err(ConfigError::Validation(format!(
                        "job '{}' has an empty topic keyword",
                        job.name
                    )));
                }
            }
        }

        let slug = job.slug();
        if !seen_slugs.insert(slug.clone()) {
            return Err(ConfigError::Validation(format!(
                "duplicate job slug: '{}' (from job '{}')",
                slug, job.name
            )));
        }
    }

    Ok(())
}
