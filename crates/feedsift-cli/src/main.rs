use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod run;

#[derive(Debug, Parser)]
#[command(name = "feedsift")]
#[command(about = "Filtered, deduplicated RSS feeds from public news sources")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run all configured jobs, or one selected by slug
    Run {
        /// Slug of a single job to run
        #[arg(long)]
        job: Option<String>,
    },
    /// List configured jobs
    Jobs,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = feedsift_core::load_app_config_from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run { job } => run::run_jobs(&config, job.as_deref()).await,
        Commands::Jobs => run::list_jobs(&config),
    }
}
