//! callmap-feeds — line feed adapters for callmap.
//!
//! Each feed opens a record source and yields its lines one at a time, so the
//! converter can stream without holding the whole input in memory.

pub mod file;
pub mod lines;
pub mod stdin;

use std::path::Path;

pub use file::FileFeed;
pub use lines::UniversalLines;
pub use stdin::StdinFeed;

/// Boxed line iterator handed to [`callmap_core::Converter::run`].
pub type Lines = Box<dyn Iterator<Item = std::io::Result<String>>>;

/// Trait implemented by each record source.
pub trait LineFeed {
    /// Human-readable name for logs (a path, or `<stdin>`).
    fn name(&self) -> String;

    /// Consume the feed and return its lines without terminators.
    fn lines(self: Box<Self>) -> Lines;
}

/// Path that selects standard input instead of a file.
pub const STDIN_PATH: &str = "-";

/// Open the feed named by `path`: `-` for stdin, otherwise a file.
///
/// A missing or unreadable file is reported here, before any output exists.
pub fn open_feed(path: &Path) -> callmap_core::Result<Box<dyn LineFeed>> {
    if path.as_os_str() == STDIN_PATH {
        tracing::debug!("reading records from stdin");
        return Ok(Box::new(StdinFeed::new()));
    }
    let feed = FileFeed::open(path)?;
    tracing::debug!(path = %path.display(), "reading records from file");
    Ok(Box::new(feed))
}
