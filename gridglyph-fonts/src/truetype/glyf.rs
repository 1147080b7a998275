//! Simple-glyph encoding for the `glyf` table.

use crate::outline::{Bounds, OutlineSink};

/// Flag byte for an on-curve point with full 16-bit x and y deltas.
const ON_CURVE_POINT: u8 = 0x01;

/// A compiled glyph record plus the statistics the font headers need.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimpleGlyph {
    /// Raw glyph bytes, empty for a glyph without contours
    pub data: Vec<u8>,
    pub bounds: Option<Bounds>,
    pub points: usize,
    pub contours: usize,
}

/// Outline sink that collects straight-line contours and encodes them as a
/// TrueType simple glyph.
#[derive(Debug, Default)]
pub struct GlyfPen {
    contours: Vec<Vec<(i32, i32)>>,
    current: Vec<(i32, i32)>,
}

impl GlyfPen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encode everything drawn so far.
    ///
    /// An unterminated contour is closed implicitly.
    pub fn finish(mut self) -> SimpleGlyph {
        self.close_path();
        if self.contours.is_empty() {
            return SimpleGlyph::default();
        }

        let points: Vec<(i32, i32)> = self.contours.iter().flatten().copied().collect();
        let bounds = points.iter().fold(None, |acc: Option<Bounds>, &(x, y)| {
            let point = Bounds {
                x_min: x,
                y_min: y,
                x_max: x,
                y_max: y,
            };
            Some(acc.map_or(point, |b| b.union(point)))
        });
        let Some(bounds) = bounds else {
            return SimpleGlyph::default();
        };

        let mut data = Vec::new();
        data.extend_from_slice(&(self.contours.len() as i16).to_be_bytes());
        data.extend_from_slice(&(bounds.x_min as i16).to_be_bytes());
        data.extend_from_slice(&(bounds.y_min as i16).to_be_bytes());
        data.extend_from_slice(&(bounds.x_max as i16).to_be_bytes());
        data.extend_from_slice(&(bounds.y_max as i16).to_be_bytes());

        let mut end_point = 0usize;
        for contour in &self.contours {
            end_point += contour.len();
            data.extend_from_slice(&((end_point - 1) as u16).to_be_bytes());
        }
        data.extend_from_slice(&0u16.to_be_bytes()); // instructionLength

        data.extend(std::iter::repeat_n(ON_CURVE_POINT, points.len()));

        let mut prev = 0i32;
        for &(x, _) in &points {
            data.extend_from_slice(&((x - prev) as i16).to_be_bytes());
            prev = x;
        }
        let mut prev = 0i32;
        for &(_, y) in &points {
            data.extend_from_slice(&((y - prev) as i16).to_be_bytes());
            prev = y;
        }

        SimpleGlyph {
            data,
            bounds: Some(bounds),
            points: points.len(),
            contours: self.contours.len(),
        }
    }
}

impl OutlineSink for GlyfPen {
    fn move_to(&mut self, x: i32, y: i32) {
        self.close_path();
        self.current.push((x, y));
    }

    fn line_to(&mut self, x: i32, y: i32) {
        self.current.push((x, y));
    }

    fn close_path(&mut self) {
        if !self.current.is_empty() {
            self.contours.push(std::mem::take(&mut self.current));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_pen_encodes_nothing() {
        let glyph = GlyfPen::new().finish();
        assert!(glyph.data.is_empty());
        assert_eq!(glyph.bounds, None);
    }

    #[test]
    fn test_single_rectangle_bytes() {
        let mut pen = GlyfPen::new();
        pen.move_to(0, 0);
        pen.line_to(0, 256);
        pen.line_to(256, 256);
        pen.line_to(256, 0);
        pen.close_path();
        let glyph = pen.finish();

        assert_eq!(glyph.points, 4);
        assert_eq!(glyph.contours, 1);
        #[rustfmt::skip]
        let expected: Vec<u8> = vec![
            0, 1,                   // numberOfContours
            0, 0, 0, 0, 1, 0, 1, 0, // bbox 0,0,256,256
            0, 3,                   // endPtsOfContours
            0, 0,                   // instructionLength
            1, 1, 1, 1,             // flags
            0, 0, 0, 0, 1, 0, 0, 0, // x deltas 0,0,+256,0
            0, 0, 1, 0, 0, 0, 255, 0, // y deltas 0,+256,0,-256
        ];
        assert_eq!(glyph.data, expected);
    }

    #[test]
    fn test_two_contours_end_points() {
        let mut pen = GlyfPen::new();
        for x in [0, 512] {
            pen.move_to(x, 0);
            pen.line_to(x, 256);
            pen.line_to(x + 256, 256);
            pen.line_to(x + 256, 0);
            pen.close_path();
        }
        let glyph = pen.finish();
        assert_eq!(glyph.contours, 2);
        assert_eq!(&glyph.data[10..14], &[0, 3, 0, 7]);
        assert_eq!(
            glyph.bounds,
            Some(Bounds {
                x_min: 0,
                y_min: 0,
                x_max: 768,
                y_max: 256
            })
        );
    }
}
