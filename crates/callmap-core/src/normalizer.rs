//! Normalizer — turns a raw library identifier into a [`LibraryName`].
//!
//! The C library ports (`nolibc`, `newlib`) all collapse to `libc`; every
//! other identifier gets a `lib` prefix so it matches the unikraft library
//! naming used in build configs (`uknetdev` → `libuknetdev`).

use crate::types::LibraryName;

const LIB_PREFIX: &str = "lib";

/// Identifiers that provide the C library, and the name they collapse to.
static LIBC_ALIASES: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "nolibc" => "libc",
    "newlib" => "libc",
};

pub fn normalize_library(raw: &str) -> LibraryName {
    match LIBC_ALIASES.get(raw) {
        Some(name) => LibraryName::new(*name),
        None => LibraryName::new(format!("{LIB_PREFIX}{raw}")),
    }
}

pub fn is_libc_alias(raw: &str) -> bool {
    LIBC_ALIASES.contains_key(raw)
}
