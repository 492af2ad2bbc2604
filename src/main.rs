use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use quizterm::config::{Config, ConfigStore};
use quizterm::ui;

#[derive(Parser, Debug)]
#[command(name = "quizterm", version, about = "Terminal multiple-choice quiz")]
struct Cli {
    /// Question endpoint URL, overriding the config file.
    #[arg(long)]
    endpoint: Option<String>,

    /// Path to the config file.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing()?;

    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&path).context("loading configuration")?;
    apply_overrides(&mut config, cli.endpoint);
    config.validate().context("validating configuration")?;
    let store = ConfigStore::new(config, path);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("starting async runtime")?;

    ui::runtime::run(store, runtime.handle().clone()).context("running UI")?;
    Ok(())
}

fn apply_overrides(config: &mut Config, endpoint: Option<String>) {
    if let Some(endpoint) = endpoint {
        config.source.endpoint_url = endpoint;
    }
}

/// Logging goes to a file; stdout belongs to the TUI. Disabled unless
/// QUIZTERM_LOG is set (e.g. `QUIZTERM_LOG=quizterm=debug`).
fn init_tracing() -> anyhow::Result<()> {
    let Ok(filter) = std::env::var("QUIZTERM_LOG") else {
        return Ok(());
    };

    let path = std::env::temp_dir().join("quizterm.log");
    let file = File::create(&path)
        .with_context(|| format!("creating log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
