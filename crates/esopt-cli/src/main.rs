//! esopt - ESTree JSON optimizer

use anyhow::Result;
use clap::Parser;
use esopt_cli::{run, Cli, CliConfig};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration, then let flags override it
    let mut config = CliConfig::load(cli.config.as_deref())?;
    cli.apply(&mut config);

    init_tracing(&config.log_level)?;
    debug!("Loaded configuration: {:?}", config);

    run(&cli, &config)
}

/// Initialize tracing subscriber; logs go to stderr so stdout stays JSON
fn init_tracing(level: &str) -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("esopt={level},esopt_cli={level},esopt_optimizer={level}").into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    Ok(())
}
