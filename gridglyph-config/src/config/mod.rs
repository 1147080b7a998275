//! Renderer configuration management.
//!
//! This module provides the `Config` struct, its YAML persistence, and the
//! merge of command-line overrides into the effective `RenderSettings`.
//!
//! Sub-modules:
//! - `persistence`: `load` / `save` and XDG path helpers
//! - `settings`: CLI overrides and the resolved render settings

mod persistence;
mod settings;

pub use settings::{RenderOverrides, RenderSettings};

use crate::error::ConfigError;
use crate::types::{GridShape, LogLevel};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Physical page width in millimetres (A4 portrait)
pub const PAGE_WIDTH_MM: u32 = 210;
/// Physical page height in millimetres (A4 portrait)
pub const PAGE_HEIGHT_MM: u32 = 297;
/// Millimetres per inch, for DPI conversions
pub const MM_PER_INCH: f64 = 25.4;

/// Persistent renderer configuration.
///
/// Every field has a serde default, so a partial (or empty) YAML document
/// deserializes into a complete config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Glyph grid shape used when no `--size` is given
    #[serde(default = "crate::defaults::grid_shape")]
    pub grid_shape: GridShape,

    /// Output resolution in dots per inch
    #[serde(default = "crate::defaults::dpi")]
    pub dpi: u32,

    /// Output pixels per grid cell edge
    #[serde(default = "crate::defaults::scale")]
    pub scale: u32,

    /// Page margin on every side, in millimetres
    #[serde(default = "crate::defaults::margin_mm")]
    pub margin_mm: u32,

    /// Extra empty cells between lines
    #[serde(default = "crate::defaults::line_gap")]
    pub line_gap: u32,

    /// Collapse all whitespace (including line breaks) to single spaces
    #[serde(default = "crate::defaults::bool_false")]
    pub compact: bool,

    /// Densest output: implies compact, lowercases text, subscripts digits, zero line gap
    #[serde(default = "crate::defaults::bool_false")]
    pub max_density: bool,

    /// Prepend the character legend banner to the document
    #[serde(default = "crate::defaults::bool_true")]
    pub include_legend: bool,

    /// Transliterate Cyrillic when the glyph table has no Cyrillic letters
    #[serde(default = "crate::defaults::bool_true")]
    pub transliterate: bool,

    /// Directory holding the per-shape glyph tables
    #[serde(default = "crate::defaults::definitions_dir")]
    pub definitions_dir: PathBuf,

    /// Legend text file
    #[serde(default = "crate::defaults::legend_path")]
    pub legend_path: PathBuf,

    /// Directory receiving generated TrueType fonts
    #[serde(default = "crate::defaults::font_output_dir")]
    pub font_output_dir: PathBuf,

    /// Diagnostic verbosity
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid_shape: crate::defaults::grid_shape(),
            dpi: crate::defaults::dpi(),
            scale: crate::defaults::scale(),
            margin_mm: crate::defaults::margin_mm(),
            line_gap: crate::defaults::line_gap(),
            compact: false,
            max_density: false,
            include_legend: true,
            transliterate: true,
            definitions_dir: crate::defaults::definitions_dir(),
            legend_path: crate::defaults::legend_path(),
            font_output_dir: crate::defaults::font_output_dir(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the grid shape
    pub fn with_grid_shape(mut self, shape: GridShape) -> Self {
        self.grid_shape = shape;
        self
    }

    /// Set the output resolution
    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }

    /// Set the cell scale factor
    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale;
        self
    }

    /// Set the directory searched for glyph tables
    pub fn with_definitions_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.definitions_dir = dir.into();
        self
    }

    /// Path of the glyph table for a shape inside `definitions_dir`
    pub fn table_path(&self, shape: GridShape) -> PathBuf {
        self.definitions_dir.join(shape.table_file_name())
    }

    /// Default output path of the generated font for a shape
    pub fn font_output_path(&self, shape: GridShape) -> PathBuf {
        self.font_output_dir.join(shape.font_file_name())
    }

    /// Check field values that serde cannot constrain.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_page(self.grid_shape, self.dpi, self.scale, self.margin_mm)
    }
}

/// Page height in pixels at `dpi`, truncated.
fn page_height_px(dpi: u32) -> u64 {
    (f64::from(PAGE_HEIGHT_MM) / MM_PER_INCH * f64::from(dpi)) as u64
}

/// Reject page parameters that cannot produce a drawable page.
pub(crate) fn validate_page(
    shape: GridShape,
    dpi: u32,
    scale: u32,
    margin_mm: u32,
) -> Result<(), ConfigError> {
    if dpi == 0 {
        return Err(ConfigError::Validation("dpi must be greater than 0".into()));
    }
    if scale == 0 {
        return Err(ConfigError::Validation(
            "scale must be greater than 0".into(),
        ));
    }
    let row_height = u64::from(scale) * shape.max_rows() as u64;
    let page_height = page_height_px(dpi);
    if row_height > page_height {
        return Err(ConfigError::Validation(format!(
            "scale {scale} makes one {shape} glyph row {row_height} px tall, \
             more than the {page_height} px page at {dpi} dpi"
        )));
    }
    if margin_mm.saturating_mul(2) >= PAGE_WIDTH_MM {
        return Err(ConfigError::Validation(format!(
            "margin_mm {margin_mm} leaves no usable width on a {PAGE_WIDTH_MM} mm page"
        )));
    }
    Ok(())
}
