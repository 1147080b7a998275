//! Default values for page and rendering settings.

use crate::types::GridShape;

pub fn grid_shape() -> GridShape {
    GridShape::Rows5Cols5
}

pub fn dpi() -> u32 {
    300 // Printing resolution
}

pub fn scale() -> u32 {
    1 // Output pixels per grid cell edge
}

pub fn margin_mm() -> u32 {
    10
}

pub fn line_gap() -> u32 {
    1 // Empty cells between lines
}
