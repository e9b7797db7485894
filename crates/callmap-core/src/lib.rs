//! callmap-core — dependency record classification and export.
//!
//! This crate exposes the pipeline layers as public modules, plus the shared
//! types used across all layers.
//!
//! # Architecture
//!
//! ```text
//! Feed ──► Classifier ──► Normalizer ──► Export
//!             └──────── Converter ─────────┘
//! ```
//!
//! Everything runs on the calling thread in a single streaming pass. No row
//! is retained once it has been handed to the [`export::RowWriter`].

pub mod classify;
pub mod config;
pub mod convert;
pub mod error;
pub mod export;
pub mod normalizer;
pub mod record;
pub mod types;

pub use classify::{Classification, Classifier, OverlapPolicy};
pub use convert::{Converter, MalformedPolicy, Summary};
pub use error::{Error, Result};
pub use export::{Dialect, RowWriter};
pub use types::{CallRow, LibraryName, PathPattern};
