//! Classifier — decides which path patterns a line matches and builds the
//! resulting [`CallRow`]s.
//!
//! Patterns are tested in [`PathPattern::ALL`] order. Under
//! [`OverlapPolicy::Both`] every matching pattern produces an outcome, so a
//! line such as `unikraft/libs/...` that carries both markers yields two rows.
//! [`OverlapPolicy::First`] keeps only the first match.

use serde::Deserialize;

use crate::normalizer::normalize_library;
use crate::record::{Malformed, Record};
use crate::types::{CallRow, PathPattern};

/// What to do with a line that contains more than one pattern marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlapPolicy {
    /// Emit one row per matching pattern.
    #[default]
    Both,
    /// Emit a row for the first matching pattern only.
    First,
}

impl std::str::FromStr for OverlapPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "both" => Ok(OverlapPolicy::Both),
            "first" => Ok(OverlapPolicy::First),
            other => Err(format!("unknown overlap policy {other:?} (expected both|first)")),
        }
    }
}

/// Per-pattern outcomes for a single line, in pattern order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Classification {
    pub outcomes: Vec<Result<CallRow, Malformed>>,
    /// Number of pattern markers found, before the overlap policy was applied.
    pub markers_found: usize,
}

impl Classification {
    pub fn is_match(&self) -> bool {
        !self.outcomes.is_empty()
    }

    pub fn is_overlapping(&self) -> bool {
        self.markers_found > 1
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Classifier {
    overlap: OverlapPolicy,
}

impl Classifier {
    pub fn new(overlap: OverlapPolicy) -> Self {
        Self { overlap }
    }

    pub fn overlap(&self) -> OverlapPolicy {
        self.overlap
    }

    pub fn classify(&self, line: &str) -> Classification {
        let record = Record::new(line);
        let matched: Vec<PathPattern> = PathPattern::ALL
            .into_iter()
            .filter(|p| record.matches(*p))
            .collect();

        let take = match self.overlap {
            OverlapPolicy::Both => matched.len(),
            OverlapPolicy::First => matched.len().min(1),
        };

        let outcomes = matched
            .iter()
            .take(take)
            .map(|&pattern| build_row(&record, pattern))
            .collect();

        Classification {
            outcomes,
            markers_found: matched.len(),
        }
    }
}

fn build_row(record: &Record<'_>, pattern: PathPattern) -> Result<CallRow, Malformed> {
    let fields = record.extract(pattern)?;
    Ok(CallRow {
        function: fields.function.to_string(),
        library: normalize_library(fields.library),
        pattern,
    })
}
