use anyhow::{Context, Result};
use clap::Parser;
use onboarding::client::HttpClient;
use onboarding::config::{Config, FileConfig, Overrides};
use onboarding::runtime::Runtime;
use onboarding::state::AppState;
use onboarding::terminal::Terminal;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Terminal registration form that creates users on a remote endpoint.
#[derive(Debug, Parser)]
#[command(name = "onboarding", version)]
struct Cli {
    /// URL the registration is POSTed to.
    #[arg(long, env = "ONBOARDING_ENDPOINT")]
    endpoint: Option<String>,

    /// Request timeout in seconds. No timeout when omitted.
    #[arg(long, env = "ONBOARDING_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// Append logs to this file. Logging is off without it.
    #[arg(long, env = "ONBOARDING_LOG_FILE")]
    log_file: Option<PathBuf>,

    /// YAML config file.
    #[arg(long, env = "ONBOARDING_CONFIG")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let file = cli
        .config
        .as_deref()
        .map(FileConfig::from_path)
        .transpose()?;
    let config = Config::resolve(
        file,
        Overrides {
            endpoint: cli.endpoint,
            timeout_secs: cli.timeout_secs,
            log_file: cli.log_file,
        },
    )?;

    if let Some(path) = config.log_file.as_deref() {
        init_tracing(path)?;
    }
    tracing::info!(endpoint = %config.endpoint, timeout = ?config.timeout, "starting");

    let client = Arc::new(HttpClient::new(config.endpoint.clone(), config.timeout));
    let state = AppState::new().with_banner_ttl(config.banner_ttl);
    let terminal = Terminal::new().context("failed to open terminal")?;

    let mut runtime = Runtime::new(state, terminal, client);
    runtime.run().context("terminal session failed")?;

    tracing::info!(users = runtime.state().users().len(), "exiting");
    Ok(())
}

fn init_tracing(path: &Path) -> Result<()> {
    use tracing_subscriber::{EnvFilter, prelude::*};

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();
    Ok(())
}
