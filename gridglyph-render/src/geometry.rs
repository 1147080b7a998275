//! Physical page size to pixel conversion.

use crate::error::RenderError;
use gridglyph_config::config::{MM_PER_INCH, PAGE_HEIGHT_MM, PAGE_WIDTH_MM};

/// Truncating millimetre to pixel conversion.
pub fn mm_to_px(mm: u32, dpi: u32) -> u32 {
    (f64::from(mm) / MM_PER_INCH * f64::from(dpi)) as u32
}

/// Pixel size of a page and its uniform margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageGeometry {
    pub width: u32,
    pub height: u32,
    pub margin: u32,
}

impl PageGeometry {
    pub fn new(width: u32, height: u32, margin: u32) -> Result<Self, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidGeometry(format!(
                "page size {width}x{height} has no area"
            )));
        }
        if margin.saturating_mul(2) >= width || margin.saturating_mul(2) >= height {
            return Err(RenderError::InvalidGeometry(format!(
                "margin {margin}px leaves no drawable area on a {width}x{height} page"
            )));
        }
        Ok(Self {
            width,
            height,
            margin,
        })
    }

    /// A4 portrait at `dpi`.
    pub fn a4(dpi: u32, margin_mm: u32) -> Result<Self, RenderError> {
        Self::new(
            mm_to_px(PAGE_WIDTH_MM, dpi),
            mm_to_px(PAGE_HEIGHT_MM, dpi),
            mm_to_px(margin_mm, dpi),
        )
    }

    /// Rightmost x a token may reach.
    pub fn right_limit(&self) -> u32 {
        self.width - self.margin
    }

    /// Largest y a wrapped line may start at.
    pub fn bottom_limit(&self) -> u32 {
        self.height - self.margin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a4_at_300_dpi() {
        let page = PageGeometry::a4(300, 10).unwrap();
        assert_eq!((page.width, page.height, page.margin), (2480, 3507, 118));
        assert_eq!(page.right_limit(), 2362);
        assert_eq!(page.bottom_limit(), 3389);
    }

    #[test]
    fn test_a4_at_72_dpi() {
        let page = PageGeometry::a4(72, 0).unwrap();
        assert_eq!((page.width, page.height, page.margin), (595, 841, 0));
    }

    #[test]
    fn test_invalid_geometry() {
        assert!(PageGeometry::new(0, 10, 0).is_err());
        assert!(PageGeometry::new(100, 100, 50).is_err());
        assert!(PageGeometry::a4(300, 105).is_err());
    }
}
