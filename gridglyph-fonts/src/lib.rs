//! Pixel-grid glyph fonts for gridglyph.
//!
//! This crate owns everything that depends only on the glyph table:
//!
//! - [`glyph_table`]: parsing the grid-per-character table
//! - [`metrics`]: raster and outline advance widths
//! - [`normalize`]: folding, transliteration and escaping of input text
//! - [`outline`]: rectangle contours for filled cells
//! - [`truetype`]: assembling an installable TrueType font

pub mod error;
pub mod glyph_table;
pub mod metrics;
pub mod normalize;
pub mod outline;
pub mod truetype;

pub use error::FontError;
pub use glyph_table::{GlyphTable, Grid, NOTDEF};
pub use metrics::{HorizontalMetrics, outline_advance, raster_advance};
pub use normalize::{NormalizeOptions, Normalized, TextNormalizer};
pub use outline::{OutlineGeometry, OutlineSink, emit_outline};
pub use truetype::{FontBuilder, write_font};
