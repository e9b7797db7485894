//! Configuration types for callmap.
//!
//! [`Config::load`] layers an optional user file over the embedded defaults.
//! Without an explicit path it looks for `~/.config/callmap/config.toml` and
//! silently skips it when absent. [`Config::defaults`] returns the embedded
//! defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::classify::OverlapPolicy;
use crate::convert::MalformedPolicy;
use crate::error::{Error, Result};
use crate::export::Dialect;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[input]
path = "res.deps"

[output]
path      = "callfile.csv"
delimiter = ","
quote     = "|"

[convert]
overlap      = "both"
on_malformed = "skip"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub convert: ConvertConfig,
}

/// `[input]` section. A path of `-` reads standard input.
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    #[serde(default = "default_input_path")]
    pub path: PathBuf,
}

fn default_input_path() -> PathBuf { PathBuf::from("res.deps") }

impl Default for InputConfig {
    fn default() -> Self {
        Self { path: default_input_path() }
    }
}

/// `[output]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    #[serde(default = "default_quote")]
    pub quote: String,
}

fn default_output_path() -> PathBuf { PathBuf::from("callfile.csv") }
fn default_delimiter() -> String { ",".to_string() }
fn default_quote() -> String { "|".to_string() }

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            delimiter: default_delimiter(),
            quote: default_quote(),
        }
    }
}

/// `[convert]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConvertConfig {
    #[serde(default)]
    pub overlap: OverlapPolicy,
    #[serde(default)]
    pub on_malformed: MalformedPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load `path` (or the per-user config file when `None`) layered on top of
    /// the built-in defaults. An explicit path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let user = match path {
            Some(p) => config::File::from(p)
                .format(config::FileFormat::Toml)
                .required(true),
            None => config::File::from(config_path().as_path())
                .format(config::FileFormat::Toml)
                .required(false),
        };

        let cfg: Config = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(user)
            .build()?
            .try_deserialize()?;
        cfg.dialect()?;
        Ok(cfg)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    /// Output dialect described by `[output]`.
    pub fn dialect(&self) -> Result<Dialect> {
        let delimiter = single_char("delimiter", &self.output.delimiter)?;
        let quote = single_char("quote", &self.output.quote)?;
        if delimiter == quote {
            return Err(Error::InvalidDialect(format!(
                "delimiter and quote are both {delimiter:?}"
            )));
        }
        Ok(Dialect { delimiter, quote })
    }
}

fn single_char(name: &str, value: &str) -> Result<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() && c != '\r' && c != '\n' => Ok(c),
        _ => Err(Error::InvalidDialect(format!(
            "{name} must be a single ASCII character other than CR/LF, got {value:?}"
        ))),
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("callmap")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
