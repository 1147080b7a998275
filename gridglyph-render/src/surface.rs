//! Drawing surfaces driven by the layout engine.

use crate::error::RenderError;
use image::{GrayImage, ImageFormat, Luma};
use std::path::Path;

const PAPER: Luma<u8> = Luma([255]);
const INK: Luma<u8> = Luma([0]);

/// Something the layout engine can fill rectangles on.
pub trait DrawSurface {
    /// Fill a `width x height` rectangle whose top-left corner is at `(x, y)`.
    fn draw_rect(&mut self, x: u32, y: u32, width: u32, height: u32);
}

/// Pixel rectangle, top-left origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Surface that records rectangles instead of drawing them.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    pub rects: Vec<PixelRect>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DrawSurface for RecordingSurface {
    fn draw_rect(&mut self, x: u32, y: u32, width: u32, height: u32) {
        self.rects.push(PixelRect {
            x,
            y,
            width,
            height,
        });
    }
}

/// Grayscale page canvas: white paper, black cells.
///
/// Rectangles are clipped to the canvas; anything outside is dropped.
#[derive(Debug, Clone)]
pub struct Canvas {
    image: GrayImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: GrayImage::from_pixel(width, height, PAPER),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn is_inked(&self, x: u32, y: u32) -> bool {
        x < self.width() && y < self.height() && *self.image.get_pixel(x, y) == INK
    }

    /// Number of black pixels.
    pub fn inked_pixels(&self) -> usize {
        self.image.pixels().filter(|p| **p == INK).count()
    }

    pub fn image(&self) -> &GrayImage {
        &self.image
    }

    pub fn into_image(self) -> GrayImage {
        self.image
    }

    /// Encode to `path`; the format follows the extension, PNG when unknown.
    pub fn save(&self, path: &Path) -> Result<(), RenderError> {
        let format = ImageFormat::from_path(path).unwrap_or(ImageFormat::Png);
        self.image
            .save_with_format(path, format)
            .map_err(|source| RenderError::ImageSave {
                path: path.display().to_string(),
                source,
            })
    }
}

impl DrawSurface for Canvas {
    fn draw_rect(&mut self, x: u32, y: u32, width: u32, height: u32) {
        let x_end = x.saturating_add(width).min(self.width());
        let y_end = y.saturating_add(height).min(self.height());
        for py in y..y_end {
            for px in x..x_end {
                self.image.put_pixel(px, py, INK);
            }
        }
    }
}
