//! Command implementations behind the CLI.
//!
//! Each command takes the loaded [`Config`](gridglyph_config::Config) plus its
//! parsed arguments, prints its user-facing result lines to stdout and returns
//! a summary for callers and tests.

pub mod build_font;
pub mod check;
pub mod init_config;
pub mod render;

use anyhow::Context;
use gridglyph_fonts::GlyphTable;
use std::path::Path;

/// Convert CRLF and lone CR line endings to LF.
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Read a UTF-8 text document with universal newlines.
pub fn read_text(path: &Path) -> anyhow::Result<String> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read text file {}", path.display()))?;
    let text = String::from_utf8(bytes)
        .with_context(|| format!("Text file {} is not valid UTF-8", path.display()))?;
    Ok(normalize_newlines(&text))
}

/// Load a glyph table, attaching the path to any failure.
pub fn load_table(path: &Path) -> anyhow::Result<GlyphTable> {
    GlyphTable::load(path).with_context(|| format!("Failed to load glyph table {}", path.display()))
}
