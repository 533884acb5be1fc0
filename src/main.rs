use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use memory_match::{
    args::Args,
    best_score::{MemoryScoreStore, ScoreStore, UnavailableScoreStore},
    config::{self, GameConfig},
    db::{self, SqliteScoreStore},
    ui::run_ui,
};

const LOG_FILE_NAME: &str = "memory-match.log";

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // The terminal belongs to the UI, so logs go to a file.
    let log_dir = match &args.log_dir {
        Some(dir) => dir.clone(),
        None => config::data_dir()?,
    };
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;
    let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE_NAME);
    let (writer, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(writer)
        .with_ansi(false)
        .init();

    info!(version = env!("CARGO_PKG_VERSION"), "memory-match starting");

    let config = GameConfig::load(args.config.as_deref())?;
    let mut store = open_store(args.ephemeral).await;

    if args.reset_best {
        match store.clear() {
            Ok(()) => info!("Best score cleared"),
            Err(e) => warn!("Failed to clear best score: {e:#}"),
        }
    }

    run_ui(config, store, args.seed)
}

/// Open the persistent score store, degrading to one that remembers nothing.
async fn open_store(ephemeral: bool) -> Box<dyn ScoreStore> {
    if ephemeral {
        info!("Using in-memory best score");
        return Box::new(MemoryScoreStore::new());
    }

    match db::create_pool().await {
        Ok(pool) => {
            match db::best_score::load_best_score(&pool).await {
                Ok(Some(record)) => info!(
                    best = record.guess_count,
                    achieved_at = %record.achieved_at,
                    "Loaded best score"
                ),
                Ok(None) => info!("No best score recorded yet"),
                Err(e) => warn!("Stored best score is unreadable: {e:#}"),
            }
            Box::new(SqliteScoreStore::new(pool))
        }
        Err(e) => {
            warn!("Best score storage unavailable: {e:#}");
            Box::new(UnavailableScoreStore)
        }
    }
}
