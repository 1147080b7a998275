//! Configuration system for the gridglyph pixel-font renderer.
//!
//! This crate provides configuration loading, saving, and default values
//! shared by the rendering and font-building commands. It includes:
//!
//! - The grid-shape selector and its per-shape font constants
//! - Render settings (DPI, scale, margins, compact / maximum-density modes)
//! - Resource path defaults (glyph table directory, legend, font output)
//! - YAML persistence
//! - Typed configuration errors

pub mod config;
pub mod defaults;
pub mod error;
mod types;

// Re-export main types for convenience
pub use config::{Config, RenderOverrides, RenderSettings};
pub use error::ConfigError;
pub use types::{GridShape, LogLevel, OUTLINE_CELL_SIZE};
