//! Command-line arguments.

use clap::Parser;
use std::path::PathBuf;

/// Níbbo: Abeokuta logistics, market errands and vendors in your terminal
#[derive(Parser, Debug, Default)]
#[command(name = "nibbo")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Config file path (defaults to ~/.config/nibbo/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log file path (defaults to the platform data dir)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Phone number to pre-fill on the login screen
    #[arg(short, long)]
    pub phone: Option<String>,
}
