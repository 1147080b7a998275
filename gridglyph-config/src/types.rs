//! Enum and constant types shared across the gridglyph crates.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Size of one grid cell in outline (font) units, identical for every shape.
pub const OUTLINE_CELL_SIZE: u32 = 256;

/// Fixed glyph grid shape of a font variant.
///
/// Every glyph of a variant is drawn on the same `max_rows x max_cols` grid;
/// the shape also fixes the space advance used by the layout engine and the
/// em size of the generated TrueType font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum GridShape {
    /// 4 rows by 3 columns
    #[serde(rename = "4x3")]
    Rows4Cols3,
    /// 5 rows by 4 columns
    #[serde(rename = "5x4")]
    Rows5Cols4,
    /// 5 rows by 5 columns
    #[default]
    #[serde(rename = "5x5")]
    Rows5Cols5,
}

impl GridShape {
    /// Selector string as used on the command line and in file names
    pub fn as_str(&self) -> &'static str {
        match self {
            GridShape::Rows4Cols3 => "4x3",
            GridShape::Rows5Cols4 => "5x4",
            GridShape::Rows5Cols5 => "5x5",
        }
    }

    /// All available shapes
    pub fn all() -> &'static [GridShape] {
        &[
            GridShape::Rows4Cols3,
            GridShape::Rows5Cols4,
            GridShape::Rows5Cols5,
        ]
    }

    /// Number of grid rows; also the line height in cells
    pub fn max_rows(&self) -> usize {
        match self {
            GridShape::Rows4Cols3 => 4,
            GridShape::Rows5Cols4 | GridShape::Rows5Cols5 => 5,
        }
    }

    /// Number of grid columns
    pub fn max_cols(&self) -> usize {
        match self {
            GridShape::Rows4Cols3 => 3,
            GridShape::Rows5Cols4 => 4,
            GridShape::Rows5Cols5 => 5,
        }
    }

    /// Advance of a space token in raw cells.
    ///
    /// Glyph advances already carry one trailing gap cell, so a space of 3
    /// cells reads as a 4-cell gap between words.
    pub fn space_advance(&self) -> u32 {
        match self {
            GridShape::Rows4Cols3 => 2,
            GridShape::Rows5Cols4 | GridShape::Rows5Cols5 => 3,
        }
    }

    /// Units per em of the generated font: the widest glyph plus one gap cell
    pub fn units_per_em(&self) -> u16 {
        ((self.max_cols() as u32 + 1) * OUTLINE_CELL_SIZE) as u16
    }

    /// Advance width for glyphs that have no grid in the table (`space`, a missing `.notdef`)
    pub fn default_advance(&self) -> u16 {
        self.units_per_em()
    }

    /// Font family name embedded in the generated font
    pub fn font_family_name(&self) -> String {
        format!("Times Sitelew Roman {} pixels", self.as_str())
    }

    /// File name of the glyph table for this shape
    pub fn table_file_name(&self) -> String {
        format!("Times_Sitelew_Roman_{}_pixels.csv", self.as_str())
    }

    /// File name of the generated TrueType font for this shape
    pub fn font_file_name(&self) -> String {
        format!("Times_Sitelew_Roman_{}_pixels.ttf", self.as_str())
    }
}

impl fmt::Display for GridShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GridShape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "4x3" => Ok(GridShape::Rows4Cols3),
            "5x4" => Ok(GridShape::Rows5Cols4),
            "5x5" => Ok(GridShape::Rows5Cols5),
            other => Err(format!(
                "unknown grid shape '{other}' (expected one of: 4x3, 5x4, 5x5)"
            )),
        }
    }
}

/// Log level configuration
///
/// Controls the verbosity of diagnostics written to stderr.
/// The `RUST_LOG` environment variable and `--log-level` CLI flag take precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// No logging
    Off,
    /// Errors only
    Error,
    /// Warnings and errors
    #[default]
    Warn,
    /// Informational messages
    Info,
    /// Debug messages
    Debug,
    /// Most verbose
    Trace,
}

impl LogLevel {
    /// Display name for help output
    pub fn display_name(&self) -> &'static str {
        match self {
            LogLevel::Off => "Off",
            LogLevel::Error => "Error",
            LogLevel::Warn => "Warn",
            LogLevel::Info => "Info",
            LogLevel::Debug => "Debug",
            LogLevel::Trace => "Trace",
        }
    }

    /// All available levels
    pub fn all() -> &'static [LogLevel] {
        &[
            LogLevel::Off,
            LogLevel::Error,
            LogLevel::Warn,
            LogLevel::Info,
            LogLevel::Debug,
            LogLevel::Trace,
        ]
    }

    /// Convert to the `log` crate's filter
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" => Ok(LogLevel::Off),
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            other => Err(format!("unknown log level '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_constants() {
        let s = GridShape::Rows4Cols3;
        assert_eq!((s.max_rows(), s.max_cols(), s.space_advance()), (4, 3, 2));
        assert_eq!(s.units_per_em(), 1024);

        let s = GridShape::Rows5Cols4;
        assert_eq!((s.max_rows(), s.max_cols(), s.space_advance()), (5, 4, 3));
        assert_eq!(s.units_per_em(), 1280);

        let s = GridShape::Rows5Cols5;
        assert_eq!((s.max_rows(), s.max_cols(), s.space_advance()), (5, 5, 3));
        assert_eq!(s.units_per_em(), 1536);
        assert_eq!(s.default_advance(), 1536);
    }

    #[test]
    fn test_shape_parse_and_display() {
        for shape in GridShape::all() {
            assert_eq!(shape.as_str().parse::<GridShape>(), Ok(*shape));
            assert_eq!(shape.to_string(), shape.as_str());
        }
        assert!("6x6".parse::<GridShape>().is_err());
    }

    #[test]
    fn test_shape_file_names() {
        let s = GridShape::Rows5Cols4;
        assert_eq!(s.table_file_name(), "Times_Sitelew_Roman_5x4_pixels.csv");
        assert_eq!(s.font_file_name(), "Times_Sitelew_Roman_5x4_pixels.ttf");
        assert_eq!(s.font_family_name(), "Times Sitelew Roman 5x4 pixels");
    }

    #[test]
    fn test_log_level_parse() {
        assert_eq!("INFO".parse::<LogLevel>(), Ok(LogLevel::Info));
        assert_eq!("warning".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert!("loud".parse::<LogLevel>().is_err());
        assert_eq!(LogLevel::Debug.to_level_filter(), log::LevelFilter::Debug);
    }
}
