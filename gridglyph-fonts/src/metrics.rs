//! Advance widths for grid glyphs.
//!
//! Raster advances are in cells and get multiplied by the layout's pixel
//! scale; outline advances are in font units.

use crate::glyph_table::Grid;
use crate::outline::{BoundsPen, OutlineGeometry, emit_outline};
use gridglyph_config::{GridShape, OUTLINE_CELL_SIZE};

/// Cells advanced by a glyph with no filled cell (or no rows at all).
pub const EMPTY_GLYPH_CELLS: u32 = 2;

/// Rightmost filled column below `max_cols`, scanning every row.
pub fn max_filled_column(grid: &Grid, max_cols: usize) -> Option<usize> {
    grid.rows()
        .iter()
        .filter_map(|row| row.iter().take(max_cols).rposition(|filled| *filled))
        .max()
}

/// Layout advance in cells: glyph width plus one gap cell.
pub fn raster_advance(grid: &Grid, max_cols: usize) -> u32 {
    match max_filled_column(grid, max_cols) {
        Some(col) => col as u32 + 2,
        None => EMPTY_GLYPH_CELLS,
    }
}

/// Font advance in units of `cell_size`.
pub fn outline_advance(grid: &Grid, max_cols: usize, cell_size: u32) -> u32 {
    match max_filled_column(grid, max_cols) {
        Some(col) => (col as u32 + 2) * cell_size,
        None => EMPTY_GLYPH_CELLS * cell_size,
    }
}

/// Horizontal metrics of one font glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HorizontalMetrics {
    pub advance_width: u16,
    pub left_side_bearing: i16,
}

/// Font metrics for a table glyph: outline advance and the outline's `x_min`.
pub fn glyph_metrics(grid: &Grid, shape: GridShape) -> HorizontalMetrics {
    let mut pen = BoundsPen::new();
    emit_outline(grid, OutlineGeometry::for_shape(shape), &mut pen);
    let lsb = pen.bounds().map_or(0, |b| b.x_min);
    HorizontalMetrics {
        advance_width: outline_advance(grid, shape.max_cols(), OUTLINE_CELL_SIZE) as u16,
        left_side_bearing: lsb as i16,
    }
}
