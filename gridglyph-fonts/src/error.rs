//! Typed error types for gridglyph-fonts.

use thiserror::Error;

/// Errors raised while loading glyph tables or writing fonts.
#[derive(Debug, Error)]
pub enum FontError {
    /// The glyph table file could not be read from disk.
    #[error("Glyph table read failed for '{path}': {source}")]
    TableRead {
        /// Path to the table file.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The glyph table file is not valid UTF-8.
    #[error("Glyph table '{path}' is not valid UTF-8")]
    TableDecode {
        /// Path to the table file.
        path: String,
    },

    /// The generated font file could not be written.
    #[error("Font write failed for '{path}': {source}")]
    FontWrite {
        /// Destination path.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The glyph set does not fit in 16-bit glyph ids.
    #[error("Too many glyphs for a TrueType font: {0} (maximum 65535)")]
    TooManyGlyphs(usize),
}
