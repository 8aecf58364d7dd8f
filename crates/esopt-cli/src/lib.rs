//! esopt command line front end
//!
//! Reads an ESTree JSON program, optimizes it and writes ESTree JSON back.
//! Parsing source text and printing it again are left to external tools.

pub mod args;
pub mod config;
pub mod runner;

pub use args::Cli;
pub use config::CliConfig;
pub use runner::{optimize_document, run};
