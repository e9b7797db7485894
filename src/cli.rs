//! Command-line surface. Every flag is optional and overrides the matching
//! config value.

use std::path::PathBuf;

use clap::Parser;

use callmap_core::config::Config;
use callmap_core::{MalformedPolicy, OverlapPolicy};

#[derive(Debug, Parser)]
#[command(
    name = "callmap",
    about = "Map unikraft dependency records to a function,library table"
)]
pub struct Cli {
    /// Dependency records to read (`-` for stdin). Defaults to `res.deps`.
    pub input: Option<PathBuf>,

    /// Table to write (`-` for stdout). Defaults to `callfile.csv`.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file layered over the built-in defaults.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Rows for a line carrying both path markers: `both` or `first`.
    #[arg(long)]
    pub overlap: Option<OverlapPolicy>,

    /// Abort on the first malformed record instead of skipping it.
    #[arg(long)]
    pub strict: bool,

    /// Log debug output to stderr.
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Load the config this invocation points at and apply the flag overrides.
    pub fn resolve(&self) -> anyhow::Result<Config> {
        let config = Config::load(self.config.as_deref())?;
        Ok(self.apply(config))
    }

    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(input) = &self.input {
            config.input.path = input.clone();
        }
        if let Some(output) = &self.output {
            config.output.path = output.clone();
        }
        if let Some(overlap) = self.overlap {
            config.convert.overlap = overlap;
        }
        if self.strict {
            config.convert.on_malformed = MalformedPolicy::Abort;
        }
        config
    }
}
