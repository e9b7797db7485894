//! Export layer — writes [`CallRow`]s as a delimited table.
//!
//! One record per line, fields in `(function, library)` order, `\n`
//! terminated, no header. Quoting is minimal: a field is wrapped in the quote
//! character only when it contains the delimiter, the quote character, `\r`
//! or `\n`, and quote characters inside a quoted field are doubled.
//!
//! The default dialect uses `|` as the quote character so that C identifiers
//! and paths never need quoting in practice.

use std::io::{BufWriter, Write};

use crate::error::{Error, Result};
use crate::types::CallRow;

const TERMINATOR: &str = "\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dialect {
    pub delimiter: char,
    pub quote: char,
}

impl Default for Dialect {
    fn default() -> Self {
        Self {
            delimiter: ',',
            quote: '|',
        }
    }
}

impl Dialect {
    fn needs_quoting(&self, field: &str) -> bool {
        field
            .chars()
            .any(|c| c == self.delimiter || c == self.quote || c == '\r' || c == '\n')
    }
}

/// Streaming writer for output rows. Rows go straight to a buffered sink;
/// nothing is kept after [`RowWriter::write_row`] returns.
pub struct RowWriter<W: Write> {
    inner: BufWriter<W>,
    dialect: Dialect,
    rows_written: usize,
    scratch: String,
}

impl<W: Write> RowWriter<W> {
    pub fn new(sink: W, dialect: Dialect) -> Self {
        Self {
            inner: BufWriter::new(sink),
            dialect,
            rows_written: 0,
            scratch: String::new(),
        }
    }

    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    pub fn write_row(&mut self, row: &CallRow) -> Result<()> {
        self.scratch.clear();
        for (i, field) in row.fields().iter().enumerate() {
            if i > 0 {
                self.scratch.push(self.dialect.delimiter);
            }
            push_field(&mut self.scratch, field, self.dialect);
        }
        self.scratch.push_str(TERMINATOR);

        self.inner
            .write_all(self.scratch.as_bytes())
            .map_err(Error::Write)?;
        self.rows_written += 1;
        tracing::trace!(function = %row.function, library = %row.library, "row written");
        Ok(())
    }

    /// Flush buffered rows and hand back the underlying sink.
    pub fn finish(self) -> Result<W> {
        self.inner
            .into_inner()
            .map_err(|e| Error::Write(e.into_error()))
    }
}

fn push_field(out: &mut String, field: &str, dialect: Dialect) {
    if !dialect.needs_quoting(field) {
        out.push_str(field);
        return;
    }
    out.push(dialect.quote);
    for c in field.chars() {
        if c == dialect.quote {
            out.push(c);
        }
        out.push(c);
    }
    out.push(dialect.quote);
}
