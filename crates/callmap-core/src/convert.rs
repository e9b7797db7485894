//! Converter — drives one pass from input lines to written rows.
//!
//! Lines are pulled one at a time, classified, and every resulting row is
//! written before the next line is read. There is no cross-line state beyond
//! the counters in [`Summary`].

use std::io::Write;

use serde::Deserialize;

use crate::classify::Classifier;
use crate::error::{Error, Result};
use crate::export::RowWriter;
use crate::record::is_line_space;

/// What to do when a line matches a pattern but is too short to extract from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Log the line, count it, and keep going.
    #[default]
    Skip,
    /// Stop the run with [`Error::Malformed`].
    Abort,
}

/// Counters for a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub lines_read: usize,
    /// Lines containing at least one pattern marker.
    pub lines_matched: usize,
    /// Lines containing more than one pattern marker.
    pub overlapping_lines: usize,
    /// Pattern matches skipped because the line was too short.
    pub malformed: usize,
    pub rows_written: usize,
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} rows written ({} lines read, {} matched, {} overlapping, {} malformed)",
            self.rows_written,
            self.lines_read,
            self.lines_matched,
            self.overlapping_lines,
            self.malformed
        )
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Converter {
    classifier: Classifier,
    on_malformed: MalformedPolicy,
}

impl Converter {
    pub fn new(classifier: Classifier, on_malformed: MalformedPolicy) -> Self {
        Self {
            classifier,
            on_malformed,
        }
    }

    /// Convert every line and write the rows to `writer`.
    ///
    /// The writer is not flushed; call [`RowWriter::finish`] afterwards.
    pub fn run<I, W>(&self, lines: I, writer: &mut RowWriter<W>) -> Result<Summary>
    where
        I: IntoIterator<Item = std::io::Result<String>>,
        W: Write,
    {
        let mut summary = Summary::default();

        for (idx, line) in lines.into_iter().enumerate() {
            let line_no = idx + 1;
            let line = line.map_err(|source| Error::Read { line_no, source })?;
            summary.lines_read += 1;

            let classification = self.classifier.classify(&line);
            if !classification.is_match() {
                continue;
            }
            summary.lines_matched += 1;
            if classification.is_overlapping() {
                summary.overlapping_lines += 1;
                tracing::debug!(line_no, overlap = ?self.classifier.overlap(), "line matches both patterns");
            }

            for outcome in classification.outcomes {
                match outcome {
                    Ok(row) => writer.write_row(&row)?,
                    Err(reason) => match self.on_malformed {
                        MalformedPolicy::Skip => {
                            summary.malformed += 1;
                            tracing::warn!(line_no, %reason, line = %line.trim_end_matches(is_line_space), "skipping malformed record");
                        }
                        MalformedPolicy::Abort => {
                            return Err(Error::Malformed {
                                line_no,
                                line: line.trim_end_matches(is_line_space).to_string(),
                                reason,
                            });
                        }
                    },
                }
            }
        }

        summary.rows_written = writer.rows_written();
        tracing::info!(%summary, "conversion finished");
        Ok(summary)
    }
}
