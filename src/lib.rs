//! gridglyph: render plain text with pixel-grid glyph tables and build
//! matching TrueType fonts.
//!
//! The work is split across the workspace crates:
//!
//! - `gridglyph-config`: YAML config, defaults and the grid-shape selector
//! - `gridglyph-fonts`: glyph tables, metrics, normalization, outlines, TrueType assembly
//! - `gridglyph-render`: page geometry, layout, pagination and PNG output
//!
//! This crate holds the CLI, the log bridge and the command implementations.

/// Application version (root crate version).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod commands;
pub mod debug;

pub mod config {
    //! Configuration re-exports from the gridglyph-config crate.
    pub use gridglyph_config::*;
}

pub mod fonts {
    //! Glyph table and font re-exports from the gridglyph-fonts crate.
    pub use gridglyph_fonts::*;
}

pub mod render {
    //! Layout and page output re-exports from the gridglyph-render crate.
    pub use gridglyph_render::*;
}
