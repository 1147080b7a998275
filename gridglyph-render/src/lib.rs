//! Layout and rasterization of normalized text with pixel-grid glyphs.
//!
//! - [`geometry`]: physical page size to pixels
//! - [`surface`]: the drawing capability and the grayscale page canvas
//! - [`layout`]: tokenizing, greedy wrapping and pagination
//! - [`output`]: page file naming and PNG output

pub mod error;
pub mod geometry;
pub mod layout;
pub mod output;
pub mod surface;

pub use error::RenderError;
pub use geometry::PageGeometry;
pub use layout::{LayoutEngine, LayoutOptions, Token};
pub use output::{page_paths, save_pages};
pub use surface::{Canvas, DrawSurface, PixelRect, RecordingSurface};
