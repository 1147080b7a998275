//! Command-line overrides and the effective render settings.

use super::{Config, validate_page};
use crate::error::ConfigError;
use crate::types::GridShape;
use std::path::PathBuf;

/// Values supplied on the command line; `None` keeps the config value.
#[derive(Debug, Clone, Default)]
pub struct RenderOverrides {
    pub grid_shape: Option<GridShape>,
    pub dpi: Option<u32>,
    pub scale: Option<u32>,
    pub margin_mm: Option<u32>,
    pub line_gap: Option<u32>,
    pub compact: Option<bool>,
    pub max_density: Option<bool>,
    pub include_legend: Option<bool>,
    pub transliterate: Option<bool>,
    /// Explicit glyph table, bypassing `definitions_dir`
    pub table_path: Option<PathBuf>,
    pub legend_path: Option<PathBuf>,
}

/// Fully resolved settings for one rendering run.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    pub grid_shape: GridShape,
    pub dpi: u32,
    pub scale: u32,
    pub margin_mm: u32,
    pub line_gap: u32,
    pub compact: bool,
    pub max_density: bool,
    pub include_legend: bool,
    pub transliterate: bool,
    pub table_path: PathBuf,
    pub legend_path: PathBuf,
}

impl Config {
    /// Merge CLI overrides over this config.
    ///
    /// Maximum-density mode forces compact layout and a zero line gap no
    /// matter what was requested for those two settings.
    pub fn resolve_render(&self, overrides: &RenderOverrides) -> Result<RenderSettings, ConfigError> {
        let grid_shape = overrides.grid_shape.unwrap_or(self.grid_shape);
        let max_density = overrides.max_density.unwrap_or(self.max_density);
        let mut compact = overrides.compact.unwrap_or(self.compact);
        let mut line_gap = overrides.line_gap.unwrap_or(self.line_gap);

        if max_density {
            compact = true;
            line_gap = 0;
        }

        let settings = RenderSettings {
            grid_shape,
            dpi: overrides.dpi.unwrap_or(self.dpi),
            scale: overrides.scale.unwrap_or(self.scale),
            margin_mm: overrides.margin_mm.unwrap_or(self.margin_mm),
            line_gap,
            compact,
            max_density,
            include_legend: overrides.include_legend.unwrap_or(self.include_legend),
            transliterate: overrides.transliterate.unwrap_or(self.transliterate),
            table_path: overrides
                .table_path
                .clone()
                .unwrap_or_else(|| self.table_path(grid_shape)),
            legend_path: overrides
                .legend_path
                .clone()
                .unwrap_or_else(|| self.legend_path.clone()),
        };

        validate_page(
            settings.grid_shape,
            settings.dpi,
            settings.scale,
            settings.margin_mm,
        )?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_overrides_keeps_config() {
        let config = Config::default();
        let settings = config.resolve_render(&RenderOverrides::default()).unwrap();
        assert_eq!(settings.grid_shape, GridShape::Rows5Cols5);
        assert_eq!(settings.dpi, 300);
        assert_eq!(settings.line_gap, 1);
        assert!(!settings.compact);
        assert!(settings.include_legend);
        assert_eq!(
            settings.table_path,
            config.table_path(GridShape::Rows5Cols5)
        );
    }

    #[test]
    fn test_overrides_win() {
        let overrides = RenderOverrides {
            grid_shape: Some(GridShape::Rows4Cols3),
            scale: Some(3),
            include_legend: Some(false),
            table_path: Some(PathBuf::from("custom.csv")),
            ..Default::default()
        };
        let settings = Config::default().resolve_render(&overrides).unwrap();
        assert_eq!(settings.grid_shape, GridShape::Rows4Cols3);
        assert_eq!(settings.scale, 3);
        assert!(!settings.include_legend);
        assert_eq!(settings.table_path, PathBuf::from("custom.csv"));
    }

    #[test]
    fn test_max_density_forces_compact_and_zero_gap() {
        let overrides = RenderOverrides {
            max_density: Some(true),
            compact: Some(false),
            line_gap: Some(4),
            ..Default::default()
        };
        let settings = Config::default().resolve_render(&overrides).unwrap();
        assert!(settings.compact);
        assert_eq!(settings.line_gap, 0);
    }

    #[test]
    fn test_huge_scale_override_rejected() {
        let overrides = RenderOverrides {
            scale: Some(1_500_000_000),
            ..Default::default()
        };
        assert!(matches!(
            Config::default().resolve_render(&overrides),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_invalid_override_rejected() {
        let overrides = RenderOverrides {
            dpi: Some(0),
            ..Default::default()
        };
        assert!(Config::default().resolve_render(&overrides).is_err());
    }
}
