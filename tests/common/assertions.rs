//! Domain-specific assertion macros for callmap harnesses.
//!
//! These wrap `pretty_assertions` so a failing table comparison shows a
//! line-by-line diff.

/// Assert that a table has exactly the given `(function, library)` rows.
///
/// ```rust
/// assert_rows!(ws.output(), [("printf", "libc"), ("SSL_new", "libopenssl")]);
/// ```
#[macro_export]
macro_rules! assert_rows {
    ($table:expr, [$(($function:expr, $library:expr)),* $(,)?]) => {{
        let table: String = $table;
        let expected: Vec<String> = vec![$(format!("{},{}", $function, $library)),*];
        let actual: Vec<String> = table.lines().map(str::to_string).collect();
        pretty_assertions::assert_eq!(actual, expected, "table rows differ");
        if !table.is_empty() {
            assert!(table.ends_with('\n'), "table must end with a record terminator");
        }
    }};
}

/// Parse a default-dialect table into `(function, library)` pairs. Quoted
/// fields are not supported; fixtures never need quoting.
pub fn parse_rows(table: &str) -> Vec<(String, String)> {
    table
        .lines()
        .map(|line| {
            let (function, library) = line
                .rsplit_once(',')
                .unwrap_or_else(|| panic!("row without delimiter: {line:?}"));
            (function.to_string(), library.to_string())
        })
        .collect()
}
