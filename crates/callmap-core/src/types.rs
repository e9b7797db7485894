//! Core types shared across the pipeline layers: the [`PathPattern`] a record
//! matched, the normalised [`LibraryName`], and the emitted [`CallRow`].

/// Which path convention a dependency record follows.
///
/// Each pattern is selected by a marker substring anywhere in the line and
/// reads the library identifier from a fixed `/`-delimited position of the
/// whole line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathPattern {
    /// Definition lives inside the unikraft tree, e.g. `unikraft/lib/nolibc/...`.
    Unikraft,
    /// Definition lives in an external library checkout, e.g. `libs/lwip/...`.
    External,
}

impl PathPattern {
    /// Patterns in the order they are tested against a line.
    pub const ALL: [PathPattern; 2] = [PathPattern::Unikraft, PathPattern::External];

    pub fn marker(self) -> &'static str {
        match self {
            PathPattern::Unikraft => "unikraft/lib",
            PathPattern::External => "libs/",
        }
    }

    /// Zero-based index of the library identifier after splitting on `/`.
    pub fn library_index(self) -> usize {
        match self {
            PathPattern::Unikraft => 2,
            PathPattern::External => 1,
        }
    }
}

impl std::fmt::Display for PathPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathPattern::Unikraft => write!(f, "unikraft"),
            PathPattern::External => write!(f, "external"),
        }
    }
}

/// A library identifier after normalisation (`libc`, `libuknetdev`, ...).
///
/// Only [`crate::normalizer::normalize_library`] constructs these outside of
/// tests.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LibraryName(String);

impl LibraryName {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LibraryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One output row: a function and the library that defines it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallRow {
    pub function: String,
    pub library: LibraryName,
    /// Pattern that produced the row. Not written to the table.
    pub pattern: PathPattern,
}

impl CallRow {
    /// Output columns in table order.
    pub fn fields(&self) -> [&str; 2] {
        [&self.function, self.library.as_str()]
    }
}
