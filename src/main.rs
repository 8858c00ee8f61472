use anyhow::{Context, Result};
use leaderboard::core::config::Config;
use leaderboard::core::tracing_init::init_tracing;
use leaderboard::handlers::session::run_session;
use leaderboard::stores::dataset::Dataset;
use leaderboard::stores::leaderboard_store::LeaderboardStore;
use std::env;
use std::io;
use std::path::PathBuf;
use tracing::info;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let config_path = if args.len() > 1 {
        PathBuf::from(&args[1])
    } else {
        PathBuf::from("config.toml")
    };

    // Load and validate configuration
    let config = Config::from_file(&config_path)
        .context(format!(
            "Failed to load configuration from '{}'. \
            If this is your first run, copy config.example.toml to config.toml and adjust the values.",
            config_path.display()
        ))?;

    init_tracing(&config.logging)?;

    info!(
        config_path = %config_path.display(),
        dataset = %config.dataset.path.display(),
        log_level = %config.logging.level,
        log_format = %config.logging.format,
        "Leaderboard starting"
    );

    let dataset = Dataset::from_file(&config.dataset.path)
        .context(format!("Failed to load dataset from '{}'", config.dataset.path.display()))?;

    let mut store = LeaderboardStore::new(dataset);
    store.mount();

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&mut store, &config.display, stdin.lock(), stdout.lock())?;

    info!("Leaderboard session finished");

    Ok(())
}
