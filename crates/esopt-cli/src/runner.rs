//! Reading, optimizing and writing documents

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use esopt_core::Node;
use esopt_optimizer::Optimizer;
use tracing::{debug, info};

use crate::args::Cli;
use crate::config::CliConfig;

/// Run the CLI with an already merged configuration
pub fn run(cli: &Cli, config: &CliConfig) -> Result<()> {
    let source = read_input(cli.input.as_deref())?;
    let output = optimize_document(&source, config)?;
    write_output(cli.output.as_deref(), &output)
}

/// Optimize one ESTree JSON document
pub fn optimize_document(source: &str, config: &CliConfig) -> Result<String> {
    let program: Node = serde_json::from_str(source).context("Failed to parse ESTree JSON")?;
    debug!(nodes = program.size(), "parsed input");

    let optimizer = Optimizer::with_options(config.optimizer.clone());
    let optimized = optimizer.optimize(program).context("Failed to optimize program")?;
    info!(nodes = optimized.size(), "optimized program");

    let json = if config.pretty {
        serde_json::to_string_pretty(&optimized)
    } else {
        serde_json::to_string(&optimized)
    };
    json.context("Failed to serialize output")
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read stdin")?;
            Ok(source)
        }
    }
}

fn write_output(path: Option<&Path>, output: &str) -> Result<()> {
    match path {
        Some(path) => fs::write(path, format!("{}\n", output))
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", output).context("Failed to write stdout")
        }
    }
}
