//! callmap — map unikraft dependency records to a `function,library` table.
//!
//! Reads the records produced by the dependency-extraction step (one per
//! line, `<path> <function> ...`), keeps the lines whose path points into
//! `unikraft/lib` or an external `libs/` checkout, and writes one
//! `function,library` row per match.
//!
//! # Architecture
//!
//! ```text
//! Feed ──► Classifier ──► Normalizer ──► Export
//! ```
//!
//! The layers live in `callmap-core` and `callmap-feeds`; this crate wires
//! them to the command line.

pub mod cli;

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use callmap_core::config::Config;
use callmap_core::{Classifier, Converter, Dialect, RowWriter, Summary};
use callmap_feeds::LineFeed;
use tempfile::NamedTempFile;

pub use cli::Cli;

/// Path that selects standard output instead of a file.
pub const STDOUT_PATH: &str = "-";

/// Run one conversion as described by `config`.
///
/// The input is opened before anything is written, so a missing input leaves
/// no output file behind. File output goes to a temporary file next to the
/// destination and replaces it only once every line has been converted; a
/// failed run leaves any previous table untouched.
pub fn run(config: &Config) -> anyhow::Result<Summary> {
    let dialect = config.dialect().context("invalid [output] settings")?;

    let feed = callmap_feeds::open_feed(&config.input.path).context("cannot open input")?;
    let source = feed.name();
    let converter = Converter::new(
        Classifier::new(config.convert.overlap),
        config.convert.on_malformed,
    );

    let dest = &config.output.path;
    if dest.as_os_str() == STDOUT_PATH {
        let (summary, _) = convert_into(&converter, feed, std::io::stdout().lock(), dialect)
            .with_context(|| format!("conversion of {source} failed"))?;
        return Ok(summary);
    }

    let staging = staging_file(dest)?;
    tracing::debug!(path = %dest.display(), staging = %staging.path().display(), "writing rows");
    let (summary, staging) = convert_into(&converter, feed, staging, dialect)
        .with_context(|| format!("conversion of {source} failed"))?;
    staging
        .persist(dest)
        .with_context(|| format!("cannot replace output file {}", dest.display()))?;

    Ok(summary)
}

/// Stream every line of `feed` into `sink` and flush it.
fn convert_into<W: Write>(
    converter: &Converter,
    feed: Box<dyn LineFeed>,
    sink: W,
    dialect: Dialect,
) -> callmap_core::Result<(Summary, W)> {
    let mut writer = RowWriter::new(sink, dialect);
    let summary = converter.run(feed.lines(), &mut writer)?;
    let sink = writer.finish()?;
    Ok((summary, sink))
}

fn staging_file(dest: &Path) -> anyhow::Result<NamedTempFile> {
    let dir = match dest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let staging = tempfile::Builder::new()
        .prefix(".callmap-")
        .suffix(".tmp")
        .tempfile_in(dir)
        .with_context(|| format!("cannot create output file {}", dest.display()))?;

    // Temp files are created 0600.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        staging
            .as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))
            .with_context(|| format!("cannot create output file {}", dest.display()))?;
    }

    Ok(staging)
}
