//! Vector outlines for grid glyphs.
//!
//! Each filled cell becomes one closed axis-aligned rectangle in font units,
//! y growing upward with the bottom grid row sitting on the baseline.

use crate::glyph_table::Grid;
use gridglyph_config::{GridShape, OUTLINE_CELL_SIZE};

/// Receiver for outline drawing commands.
pub trait OutlineSink {
    fn move_to(&mut self, x: i32, y: i32);
    fn line_to(&mut self, x: i32, y: i32);
    fn close_path(&mut self);
}

/// Grid window and cell size used to emit an outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutlineGeometry {
    pub max_rows: usize,
    pub max_cols: usize,
    pub cell_size: i32,
}

impl OutlineGeometry {
    pub fn for_shape(shape: GridShape) -> Self {
        Self {
            max_rows: shape.max_rows(),
            max_cols: shape.max_cols(),
            cell_size: OUTLINE_CELL_SIZE as i32,
        }
    }
}

/// Emit one rectangle contour per filled cell inside the geometry window.
///
/// Contours start at the bottom-left corner and run up, right, then down.
/// Returns the number of contours emitted.
pub fn emit_outline<S: OutlineSink + ?Sized>(grid: &Grid, geometry: OutlineGeometry, sink: &mut S) -> usize {
    let cell = geometry.cell_size;
    let mut contours = 0;
    for (row, col) in grid.filled_cells(geometry.max_rows, geometry.max_cols) {
        let x_left = col as i32 * cell;
        let x_right = x_left + cell;
        let y_bottom = (geometry.max_rows - 1 - row) as i32 * cell;
        let y_top = y_bottom + cell;

        sink.move_to(x_left, y_bottom);
        sink.line_to(x_left, y_top);
        sink.line_to(x_right, y_top);
        sink.line_to(x_right, y_bottom);
        sink.close_path();
        contours += 1;
    }
    contours
}

/// Bounding box in font units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x_min: i32,
    pub y_min: i32,
    pub x_max: i32,
    pub y_max: i32,
}

impl Bounds {
    pub fn union(self, other: Bounds) -> Bounds {
        Bounds {
            x_min: self.x_min.min(other.x_min),
            y_min: self.y_min.min(other.y_min),
            x_max: self.x_max.max(other.x_max),
            y_max: self.y_max.max(other.y_max),
        }
    }

    fn include(&mut self, x: i32, y: i32) {
        self.x_min = self.x_min.min(x);
        self.y_min = self.y_min.min(y);
        self.x_max = self.x_max.max(x);
        self.y_max = self.y_max.max(y);
    }
}

/// Sink that only tracks the control-point bounds.
#[derive(Debug, Default)]
pub struct BoundsPen {
    bounds: Option<Bounds>,
}

impl BoundsPen {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` when nothing was drawn.
    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    fn point(&mut self, x: i32, y: i32) {
        match self.bounds.as_mut() {
            Some(b) => b.include(x, y),
            None => {
                self.bounds = Some(Bounds {
                    x_min: x,
                    y_min: y,
                    x_max: x,
                    y_max: y,
                })
            }
        }
    }
}

impl OutlineSink for BoundsPen {
    fn move_to(&mut self, x: i32, y: i32) {
        self.point(x, y);
    }

    fn line_to(&mut self, x: i32, y: i32) {
        self.point(x, y);
    }

    fn close_path(&mut self) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PenCommand {
    MoveTo(i32, i32),
    LineTo(i32, i32),
    ClosePath,
}

/// Sink that records every command, for inspection and tests.
#[derive(Debug, Default)]
pub struct RecordingPen {
    pub commands: Vec<PenCommand>,
}

impl RecordingPen {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OutlineSink for RecordingPen {
    fn move_to(&mut self, x: i32, y: i32) {
        self.commands.push(PenCommand::MoveTo(x, y));
    }

    fn line_to(&mut self, x: i32, y: i32) {
        self.commands.push(PenCommand::LineTo(x, y));
    }

    fn close_path(&mut self) {
        self.commands.push(PenCommand::ClosePath);
    }
}
