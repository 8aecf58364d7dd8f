//! CLI configuration

use std::path::Path;

use anyhow::Context;
use esopt_optimizer::OptimizerOptions;
use serde::{Deserialize, Serialize};

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Pretty-print output JSON
    pub pretty: bool,

    /// Default log filter when `RUST_LOG` is not set
    pub log_level: String,

    /// Pipeline options
    pub optimizer: OptimizerOptions,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            log_level: "info".to_string(),
            optimizer: OptimizerOptions::default(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a config file and `ESOPT_*` environment
    /// variables.
    ///
    /// An explicit `path` must exist; otherwise `esopt.*` in the working
    /// directory is used when present. Nested keys use a double underscore,
    /// e.g. `ESOPT_OPTIMIZER__ENABLE_SIMPLIFICATION=false`.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        // Load .env file if exists
        dotenvy::dotenv().ok();

        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("esopt").required(false),
        };

        let settings = config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix("ESOPT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| match path {
                Some(path) => format!("Failed to read config file {}", path.display()),
                None => "Failed to read configuration".to_string(),
            })?;

        settings
            .try_deserialize()
            .map_err(|e| anyhow::anyhow!("Failed to deserialize config: {}", e))
    }
}
