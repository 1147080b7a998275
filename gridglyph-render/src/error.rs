//! Typed error types for gridglyph-render.

use thiserror::Error;

/// Errors raised while preparing pages or writing them to disk.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Page dimensions or margins leave no drawable area.
    #[error("Invalid page geometry: {0}")]
    InvalidGeometry(String),

    /// A page image could not be encoded or written.
    #[error("Image save failed for '{path}': {source}")]
    ImageSave {
        /// Destination path.
        path: String,
        /// Underlying image error.
        #[source]
        source: image::ImageError,
    },
}
