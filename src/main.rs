use anyhow::Context;
use clap::Parser;
use nibbo::cli::Args;
use nibbo::config::Config;
use nibbo::logging::init_tracing;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_path = args.log_file.clone().unwrap_or_else(Config::log_path);
    if let Err(err) = init_tracing(&log_path) {
        eprintln!("Warning: logging disabled ({}): {err}", log_path.display());
    }

    let config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting nibbo");

    nibbo::ui::runtime::run(config, args.phone).context("Terminal UI failed")?;
    Ok(())
}
