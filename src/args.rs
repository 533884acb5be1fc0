use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "memory-match", version, about = "Find matching pairs of cards")]
pub struct Args {
    /// Path to a JSON config file (defaults to the user config directory)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Seed for the deck shuffle, for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,

    /// Keep the best score in memory only
    #[arg(long)]
    pub ephemeral: bool,

    /// Forget the stored best score before playing
    #[arg(long)]
    pub reset_best: bool,

    /// Directory for the log file (defaults to the data directory)
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}
