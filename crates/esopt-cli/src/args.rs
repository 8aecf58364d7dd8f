//! Command line arguments

use std::path::PathBuf;

use clap::Parser;

use crate::config::CliConfig;

#[derive(Parser, Debug, Clone)]
#[command(name = "esopt", version, about = "Optimize an ESTree JSON program")]
pub struct Cli {
    /// ESTree JSON input file (stdin when absent or `-`)
    pub input: Option<PathBuf>,

    /// Output file (stdout when absent)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-print the output JSON
    #[arg(long)]
    pub pretty: bool,

    /// Skip constant folding and algebraic simplification
    #[arg(long)]
    pub no_simplify: bool,

    /// Skip dead code elimination
    #[arg(long)]
    pub no_dce: bool,

    /// Configuration file (defaults to `esopt.{toml,yaml,json}` if present)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Override loaded configuration with the flags that were given
    pub fn apply(&self, config: &mut CliConfig) {
        if self.pretty {
            config.pretty = true;
        }
        if self.no_simplify {
            config.optimizer.enable_simplification = false;
        }
        if self.no_dce {
            config.optimizer.enable_dead_code_elimination = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from(["esopt", "in.json", "-o", "out.json", "--no-dce"]).unwrap();
        assert_eq!(cli.input, Some(PathBuf::from("in.json")));
        assert_eq!(cli.output, Some(PathBuf::from("out.json")));
        assert!(cli.no_dce);
        assert!(!cli.no_simplify);
        assert!(!cli.pretty);
    }

    #[test]
    fn test_apply_overrides() {
        let cli = Cli::try_parse_from(["esopt", "--pretty", "--no-simplify"]).unwrap();
        let mut config = CliConfig::default();
        cli.apply(&mut config);

        assert!(config.pretty);
        assert!(!config.optimizer.enable_simplification);
        assert!(config.optimizer.enable_dead_code_elimination);
    }

    #[test]
    fn test_absent_flags_keep_config() {
        let cli = Cli::try_parse_from(["esopt"]).unwrap();
        let mut config = CliConfig {
            pretty: true,
            ..CliConfig::default()
        };
        cli.apply(&mut config);
        assert!(config.pretty);
        assert!(cli.input.is_none());
    }
}
