//! CLI for the srcref source-reference normalizer.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use srcref_core::config;

use commands::{run_canonicalize, run_config, run_exists, run_schemes, run_scrub, run_validate};

/// Top-level CLI for srcref.
#[derive(Debug, Parser)]
#[command(name = "srcref")]
#[command(about = "srcref: turn paths, UNC shares and URLs into canonical fetchable URLs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Canonicalize a path or URL without checking its scheme.
    Canonicalize {
        /// Local path, UNC path, or URL.
        reference: String,
    },

    /// Canonicalize and require a registered scheme.
    Validate {
        /// Local path, UNC path, or URL.
        reference: String,
    },

    /// Report whether a canonical file:// URL exists on this machine.
    Exists {
        /// URL as printed by `canonicalize` or `validate`.
        url: String,
    },

    /// List the registered URL schemes.
    Schemes,

    /// Show the config file path, key interval and schemes in effect.
    Config,

    /// Print TEXT with every listed value replaced by <Filtered>.
    Scrub {
        /// Text to scrub.
        text: String,

        /// Values to filter out.
        values: Vec<String>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let registry = cfg.scheme_registry();

        match cli.command {
            CliCommand::Canonicalize { reference } => run_canonicalize(&reference)?,
            CliCommand::Validate { reference } => run_validate(&registry, &reference)?,
            CliCommand::Exists { url } => run_exists(&url),
            CliCommand::Schemes => run_schemes(&registry),
            CliCommand::Config => run_config(&cfg)?,
            CliCommand::Scrub { text, values } => run_scrub(&text, &values),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
