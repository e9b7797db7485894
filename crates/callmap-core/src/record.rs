//! Record — a structured view of one dependency line.
//!
//! A record line looks like `<path> <function> [<anything> ...]`. The library
//! identifier and the function name are read by position: the line is split
//! once on `/` into *segments* and once on a single space into *tokens*. Both
//! splits cover the whole line, so a segment may contain spaces and a token may
//! contain slashes. Consecutive separators yield empty entries.

use crate::types::PathPattern;

/// Index of the function name among the space-delimited tokens.
pub const FUNCTION_TOKEN_INDEX: usize = 1;

/// Trailing characters stripped from a line: Unicode whitespace plus the
/// ASCII information separators `\x1c`..=`\x1f`.
pub fn is_line_space(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Borrowed, pre-split view of one line with trailing whitespace removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record<'a> {
    line: &'a str,
    segments: Vec<&'a str>,
    tokens: Vec<&'a str>,
}

impl<'a> Record<'a> {
    pub fn new(line: &'a str) -> Self {
        let line = line.trim_end_matches(is_line_space);
        Self {
            line,
            segments: line.split('/').collect(),
            tokens: line.split(' ').collect(),
        }
    }

    pub fn line(&self) -> &'a str {
        self.line
    }

    pub fn segment(&self, index: usize) -> Option<&'a str> {
        self.segments.get(index).copied()
    }

    pub fn token(&self, index: usize) -> Option<&'a str> {
        self.tokens.get(index).copied()
    }

    /// Whether the pattern's marker occurs anywhere in the line.
    pub fn matches(&self, pattern: PathPattern) -> bool {
        self.line.contains(pattern.marker())
    }

    /// Raw library identifier and function name for `pattern`.
    ///
    /// Does not check [`Record::matches`]; callers classify first.
    pub fn extract(&self, pattern: PathPattern) -> Result<Fields<'a>, Malformed> {
        let index = pattern.library_index();
        let library = self.segment(index).ok_or(Malformed {
            pattern,
            kind: MalformedKind::MissingSegment { index },
        })?;
        let function = self.token(FUNCTION_TOKEN_INDEX).ok_or(Malformed {
            pattern,
            kind: MalformedKind::MissingToken {
                index: FUNCTION_TOKEN_INDEX,
            },
        })?;
        Ok(Fields { library, function })
    }
}

/// The two raw values pulled out of a matched record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fields<'a> {
    pub library: &'a str,
    pub function: &'a str,
}

/// A line matched a pattern's marker but is too short to extract from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{pattern} record: {kind}")]
pub struct Malformed {
    pub pattern: PathPattern,
    pub kind: MalformedKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MalformedKind {
    #[error("no path segment at index {index}")]
    MissingSegment { index: usize },
    #[error("no space-delimited token at index {index}")]
    MissingToken { index: usize },
}
