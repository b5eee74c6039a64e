//! `run` and `jobs` subcommand handlers.

use feedsift_core::{load_jobs, AppConfig, JobConfig};
use feedsift_pipeline::run_job;

/// Run every configured job in sequence, or a single job by slug.
///
/// Per-job failures are logged and do not stop the remaining jobs; the
/// command fails only when every selected job failed.
pub(crate) async fn run_jobs(config: &AppConfig, slug_filter: Option<&str>) -> anyhow::Result<()> {
    let jobs = select_jobs(config, slug_filter)?;

    let mut failed = 0_usize;
    for job in &jobs {
        match run_job(config, job).await {
            Ok(summary) => {
                println!(
                    "{}: {} fetched, {} retained -> {}",
                    summary.slug,
                    summary.fetched,
                    summary.retained,
                    job.output.display()
                );
            }
            Err(e) => {
                tracing::error!(job = %job.slug(), error = %e, "job failed");
                failed += 1;
            }
        }
    }

    if failed == jobs.len() && !jobs.is_empty() {
        anyhow::bail!("all {failed} jobs failed");
    }
    Ok(())
}

/// Print the configured jobs with slug, filter mode, and output path.
pub(crate) fn list_jobs(config: &AppConfig) -> anyhow::Result<()> {
    let jobs = load_jobs(&config.jobs_path)?.jobs;
    for job in &jobs {
        println!(
            "{}  [{}]  {} source(s) -> {}",
            job.slug(),
            job.filter.mode(),
            job.sources.len(),
            job.output.display()
        );
    }
    Ok(())
}

fn select_jobs(config: &AppConfig, slug_filter: Option<&str>) -> anyhow::Result<Vec<JobConfig>> {
    let jobs = load_jobs(&config.jobs_path)?.jobs;
    match slug_filter {
        Some(slug) => {
            let job = jobs
                .into_iter()
                .find(|j| j.slug() == slug)
                .ok_or_else(|| {
                    anyhow::anyhow!("job '{slug}' not found in {}", config.jobs_path.display())
                })?;
            Ok(vec![job])
        }
        None => Ok(jobs),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    const JOBS_YAML: &str = r#"
jobs:
  - name: Game Watch Goods
    sources:
      - https://example.com/feed.rdf
    filter:
      mode: category
      include: [グッズ]
      exclude: [ポケモン]
    output: out/goods.xml
    feed:
      title: goods
      description: goods feed
      link: https://example.com/
      language: ja
  - name: Pokemon News
    sources:
      - https://example.com/feed.rdf
    filter:
      mode: topic
      keyword: ポケモン
    output: out/pokemon.xml
    feed:
      title: pokemon
      description: pokemon feed
      link: https://example.com/
      language: ja
"#;

    fn config_with_jobs_file(test: &str) -> (AppConfig, PathBuf) {
        let path = std::env::temp_dir().join(format!(
            "feedsift-cli-{}-{test}.yaml",
            std::process::id()
        ));
        std::fs::write(&path, JOBS_YAML).expect("should write jobs file");
        let config = AppConfig {
            jobs_path: path.clone(),
            log_level: "info".to_string(),
            fetch_timeout_secs: 5,
            user_agent: "feedsift-test/0.1".to_string(),
        };
        (config, path)
    }

    #[test]
    fn select_jobs_returns_all_without_filter() {
        let (config, path) = config_with_jobs_file("all");
        let jobs = select_jobs(&config, None).unwrap();
        assert_eq!(jobs.len(), 2);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn select_jobs_filters_by_slug() {
        let (config, path) = config_with_jobs_file("by-slug");
        let jobs = select_jobs(&config, Some("pokemon-news")).unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].name, "Pokemon News");
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn select_jobs_unknown_slug_is_an_error() {
        let (config, path) = config_with_jobs_file("unknown");
        let err = select_jobs(&config, Some("no-such-job")).unwrap_err();
        assert!(err.to_string().contains("not found"));
        std::fs::remove_file(path).ok();
    }
}
