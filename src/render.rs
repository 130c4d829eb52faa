//! Response body rendering
//!
//! Bodies are the standard pretty-`Debug` dump of the value being
//! served, the Rust rendition of "export the variable as code". The
//! output is deterministic for a given input.

/// One row of the catalog listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRecord {
    pub schema: String,
    pub name: String,
}

/// Render the catalog rows as pretty-printed text
pub fn render_tables(records: &[TableRecord]) -> String {
    format!("{records:#?}")
}

/// Render the greeting literal, quoted like a string literal
pub fn render_greeting() -> String {
    format!("{:?}", "Hello World!")
}
