//! TrueType font assembly from a glyph table.
//!
//! Glyph order is `.notdef`, `space`, then one `uniXXXX` glyph per
//! single-character table entry in table order. Every filled cell becomes a
//! square contour of [`OUTLINE_CELL_SIZE`] units.

mod glyf;
mod names;
mod tables;

pub use glyf::{GlyfPen, SimpleGlyph};
pub use names::FontNames;

use crate::error::FontError;
use crate::glyph_table::{GlyphTable, Grid, NOTDEF};
use crate::metrics::{HorizontalMetrics, glyph_metrics};
use crate::outline::{Bounds, OutlineGeometry, emit_outline};
use gridglyph_config::{GridShape, OUTLINE_CELL_SIZE};
use std::collections::BTreeMap;
use std::path::Path;

/// Glyph id of `.notdef`.
pub const NOTDEF_GLYPH_ID: u16 = 0;
/// Glyph id of the built-in `space` glyph.
pub const SPACE_GLYPH_ID: u16 = 1;

/// One entry of the font's glyph order.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphRecord<'a> {
    pub name: String,
    /// Character mapped to this glyph by the table, if any
    pub codepoint: Option<char>,
    /// Table grid drawn for this glyph; `None` for an empty default glyph
    pub grid: Option<&'a Grid>,
}

/// Header values derived from the compiled glyphs.
#[derive(Debug, Clone)]
pub(crate) struct FontSummary {
    pub units_per_em: u16,
    pub cell_size: u32,
    pub bounds: Bounds,
    pub ascender: i16,
    pub descender: i16,
    pub line_gap: i16,
    pub advance_width_max: u16,
    pub min_left_side_bearing: i16,
    pub min_right_side_bearing: i16,
    pub x_max_extent: i16,
    pub average_advance: i16,
    pub strikeout_position: i16,
    pub num_glyphs: u16,
    pub max_points: u16,
    pub max_contours: u16,
}

/// Builds an installable TrueType font for one grid shape.
#[derive(Debug, Clone)]
pub struct FontBuilder<'a> {
    table: &'a GlyphTable,
    shape: GridShape,
    names: FontNames,
}

impl<'a> FontBuilder<'a> {
    pub fn new(table: &'a GlyphTable, shape: GridShape) -> Self {
        Self {
            table,
            shape,
            names: FontNames::for_shape(shape),
        }
    }

    /// Replace the default naming metadata.
    pub fn with_names(mut self, names: FontNames) -> Self {
        self.names = names;
        self
    }

    pub fn glyph_order(&self) -> Vec<GlyphRecord<'a>> {
        let mut glyphs = vec![
            GlyphRecord {
                name: NOTDEF.to_string(),
                codepoint: None,
                grid: self.table.notdef(),
            },
            GlyphRecord {
                name: "space".to_string(),
                codepoint: None,
                grid: None,
            },
        ];
        for (c, grid) in self.table.chars() {
            glyphs.push(GlyphRecord {
                name: format!("uni{:04X}", c as u32),
                codepoint: Some(c),
                grid: Some(grid),
            });
        }
        glyphs
    }

    /// Code point to glyph id; a table space overrides the built-in `space`.
    pub fn character_map(glyphs: &[GlyphRecord<'_>]) -> BTreeMap<u32, u16> {
        let mut cmap = BTreeMap::new();
        cmap.insert(u32::from(' '), SPACE_GLYPH_ID);
        for (gid, glyph) in glyphs.iter().enumerate() {
            if let Some(c) = glyph.codepoint {
                cmap.insert(c as u32, gid as u16);
            }
        }
        cmap
    }

    /// Compile the complete font file.
    pub fn build(&self) -> Result<Vec<u8>, FontError> {
        let glyphs = self.glyph_order();
        if glyphs.len() > usize::from(u16::MAX) {
            return Err(FontError::TooManyGlyphs(glyphs.len()));
        }
        let cmap = Self::character_map(&glyphs);

        let geometry = OutlineGeometry::for_shape(self.shape);
        let default_metrics = HorizontalMetrics {
            advance_width: self.shape.default_advance(),
            left_side_bearing: 0,
        };

        let mut outlines = Vec::with_capacity(glyphs.len());
        let mut metrics = Vec::with_capacity(glyphs.len());
        for glyph in &glyphs {
            match glyph.grid {
                Some(grid) => {
                    let mut pen = GlyfPen::new();
                    emit_outline(grid, geometry, &mut pen);
                    outlines.push(pen.finish());
                    metrics.push(glyph_metrics(grid, self.shape));
                }
                None => {
                    outlines.push(SimpleGlyph::default());
                    metrics.push(default_metrics);
                }
            }
        }

        let summary = self.summarize(&outlines, &metrics);
        let glyph_data: Vec<Vec<u8>> = outlines.into_iter().map(|g| g.data).collect();
        let (glyf, loca) = tables::build_glyf_loca(&glyph_data);

        let font = tables::write_sfnt(vec![
            (tables::tag_u32(b"OS/2"), tables::build_os2(&summary, &cmap)),
            (tables::tag_u32(b"cmap"), tables::build_cmap(&cmap)),
            (tables::tag_u32(b"glyf"), glyf),
            (tables::tag_u32(b"head"), tables::build_head(&summary)),
            (tables::tag_u32(b"hhea"), tables::build_hhea(&summary)),
            (tables::tag_u32(b"hmtx"), tables::build_hmtx(&metrics)),
            (tables::tag_u32(b"loca"), loca),
            (tables::tag_u32(b"maxp"), tables::build_maxp(&summary)),
            (tables::tag_u32(b"name"), tables::build_name(&self.names)),
            (tables::tag_u32(b"post"), tables::build_post()),
        ]);

        log::info!(
            "Built font '{}': {} glyphs, {} mapped code points, {} bytes",
            self.names.family,
            summary.num_glyphs,
            cmap.len(),
            font.len()
        );
        Ok(font)
    }

    fn summarize(&self, outlines: &[SimpleGlyph], metrics: &[HorizontalMetrics]) -> FontSummary {
        let units_per_em = self.shape.units_per_em();

        let mut bounds: Option<Bounds> = None;
        let mut min_lsb = i32::MAX;
        let mut min_rsb = i32::MAX;
        let mut max_extent = i32::MIN;
        for (outline, m) in outlines.iter().zip(metrics) {
            let Some(b) = outline.bounds else {
                continue;
            };
            bounds = Some(bounds.map_or(b, |acc| acc.union(b)));
            let lsb = i32::from(m.left_side_bearing);
            let extent = lsb + (b.x_max - b.x_min);
            min_lsb = min_lsb.min(lsb);
            min_rsb = min_rsb.min(i32::from(m.advance_width) - extent);
            max_extent = max_extent.max(extent);
        }
        let has_contours = bounds.is_some();

        let nonzero: Vec<u32> = metrics
            .iter()
            .map(|m| u32::from(m.advance_width))
            .filter(|w| *w > 0)
            .collect();
        let average_advance = if nonzero.is_empty() {
            0
        } else {
            (nonzero.iter().sum::<u32>() as f64 / nonzero.len() as f64).round() as i16
        };

        let glyph_height = (self.shape.max_rows() as u32 * OUTLINE_CELL_SIZE) as i16;

        FontSummary {
            units_per_em,
            cell_size: OUTLINE_CELL_SIZE,
            bounds: bounds.unwrap_or(Bounds {
                x_min: 0,
                y_min: 0,
                x_max: 0,
                y_max: 0,
            }),
            ascender: units_per_em as i16,
            descender: 0,
            line_gap: OUTLINE_CELL_SIZE as i16,
            advance_width_max: self.shape.default_advance(),
            min_left_side_bearing: if has_contours { min_lsb as i16 } else { 0 },
            min_right_side_bearing: if has_contours { min_rsb as i16 } else { 0 },
            x_max_extent: if has_contours { max_extent as i16 } else { 0 },
            average_advance,
            strikeout_position: glyph_height / 2,
            num_glyphs: metrics.len() as u16,
            max_points: outlines.iter().map(|g| g.points).max().unwrap_or(0) as u16,
            max_contours: outlines.iter().map(|g| g.contours).max().unwrap_or(0) as u16,
        }
    }
}

/// Write font bytes to `path`, creating parent directories.
pub fn write_font(path: &Path, bytes: &[u8]) -> Result<(), FontError> {
    let write_error = |source| FontError::FontWrite {
        path: path.display().to_string(),
        source,
    };
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }
    std::fs::write(path, bytes).map_err(write_error)?;
    log::info!("Wrote font to {}", path.display());
    Ok(())
}
