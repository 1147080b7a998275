//! Glyph definition tables.
//!
//! A table file is a sequence of blocks. A row whose first cell is non-empty
//! starts a new glyph and names it; the following rows (first cell empty) are
//! that glyph's grid rows. Any cell containing `#` is filled.

mod csv;

use crate::error::FontError;
use gridglyph_config::GridShape;
use indexmap::IndexMap;
use std::collections::HashSet;
use std::path::Path;

/// Name of the fallback glyph used for characters without a definition.
pub const NOTDEF: &str = ".notdef";

/// Number of empty cells used for a data row with no cells after the label column.
const SHORT_ROW_CELLS: usize = 5;

static EMPTY_GRID: Grid = Grid { rows: Vec::new() };

/// Cell matrix of a single glyph, rows top to bottom.
///
/// Rows may have different lengths and the grid may be larger than the
/// active [`GridShape`]; consumers clip to the shape themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<bool>>,
}

impl Grid {
    /// Build a grid from raw cell strings.
    pub fn from_cells<R, S>(rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(|cell| cell.as_ref().contains('#')).collect())
            .collect();
        Self { rows }
    }

    /// Build a grid from a picture such as `["#.#", ".#."]` (`#` filled, anything else empty).
    pub fn from_pattern(lines: &[&str]) -> Self {
        let rows = lines
            .iter()
            .map(|line| line.chars().map(|c| c == '#').collect())
            .collect();
        Self { rows }
    }

    /// A grid with no rows.
    pub fn empty() -> &'static Grid {
        &EMPTY_GRID
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(false)
    }

    /// Filled cells inside a `max_rows x max_cols` window, row-major.
    pub fn filled_cells(&self, max_rows: usize, max_cols: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().take(max_rows).enumerate().flat_map(move |(r, row)| {
            row.iter()
                .take(max_cols)
                .enumerate()
                .filter(|(_, filled)| **filled)
                .map(move |(c, _)| (r, c))
        })
    }

    /// True if any filled cell lies outside the given window.
    pub fn overflows(&self, max_rows: usize, max_cols: usize) -> bool {
        self.rows.iter().enumerate().any(|(r, row)| {
            row.iter()
                .enumerate()
                .any(|(c, filled)| *filled && (r >= max_rows || c >= max_cols))
        })
    }

    /// Append a data row; the leading (label) cell is dropped.
    fn push_row(&mut self, row: &[String]) {
        let row = if row.len() < 2 {
            vec![false; SHORT_ROW_CELLS]
        } else {
            row[1..].iter().map(|cell| cell.contains('#')).collect()
        };
        self.rows.push(row);
    }
}

/// Ordered mapping from glyph key to grid.
///
/// Keys are usually single characters; named entries such as `.notdef` are
/// kept alongside them. A repeated key replaces the earlier grid but keeps
/// the position of its first definition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlyphTable {
    glyphs: IndexMap<String, Grid>,
}

impl GlyphTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from already-split rows.
    ///
    /// Grid rows appearing before the first header are ignored.
    pub fn parse_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = Vec<String>>,
    {
        let mut glyphs: IndexMap<String, Grid> = IndexMap::new();
        let mut current: Option<(String, Grid)> = None;

        for row in rows {
            let Some(first) = row.first() else {
                continue;
            };
            if !first.is_empty() {
                if let Some((key, grid)) = current.take() {
                    glyphs.insert(key, grid);
                }
                current = Some((first.clone(), Grid::default()));
            } else if let Some((_, grid)) = current.as_mut() {
                grid.push_row(&row);
            } else {
                log::debug!("Ignoring grid row before the first glyph header");
            }
        }
        if let Some((key, grid)) = current {
            glyphs.insert(key, grid);
        }

        Self { glyphs }
    }

    /// Parse table text.
    pub fn parse_csv(text: &str) -> Self {
        Self::parse_rows(csv::parse_rows(text))
    }

    /// Read and parse a table file.
    pub fn load(path: &Path) -> Result<Self, FontError> {
        let bytes = std::fs::read(path).map_err(|source| FontError::TableRead {
            path: path.display().to_string(),
            source,
        })?;
        let text = String::from_utf8(bytes).map_err(|_| FontError::TableDecode {
            path: path.display().to_string(),
        })?;
        let text = text.strip_prefix('\u{feff}').unwrap_or(&text);

        let table = Self::parse_csv(text);
        log::info!(
            "Loaded {} glyph definitions from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    /// Insert or replace a glyph.
    pub fn insert(&mut self, key: impl Into<String>, grid: Grid) {
        self.glyphs.insert(key.into(), grid);
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Grid for an arbitrary key, including named entries.
    pub fn entry(&self, key: &str) -> Option<&Grid> {
        self.glyphs.get(key)
    }

    pub fn get(&self, c: char) -> Option<&Grid> {
        let mut buf = [0u8; 4];
        self.glyphs.get(&*c.encode_utf8(&mut buf))
    }

    pub fn contains(&self, c: char) -> bool {
        self.get(c).is_some()
    }

    pub fn notdef(&self) -> Option<&Grid> {
        self.glyphs.get(NOTDEF)
    }

    /// Grid to draw for `c`: its own, else `.notdef`, else an empty grid.
    pub fn glyph_or_fallback(&self, c: char) -> &Grid {
        self.get(c)
            .or_else(|| self.notdef())
            .unwrap_or(Grid::empty())
    }

    /// All entries in definition order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Grid)> {
        self.glyphs.iter().map(|(k, g)| (k.as_str(), g))
    }

    /// Single-character entries in definition order.
    pub fn chars(&self) -> impl Iterator<Item = (char, &Grid)> {
        self.glyphs.iter().filter_map(|(key, grid)| {
            let mut it = key.chars();
            match (it.next(), it.next()) {
                (Some(c), None) => Some((c, grid)),
                _ => None,
            }
        })
    }

    /// Set of characters the table defines.
    pub fn known_chars(&self) -> HashSet<char> {
        self.chars().map(|(c, _)| c).collect()
    }

    /// Keys whose grid has filled cells outside the shape's window.
    pub fn overflowing_glyphs(&self, shape: GridShape) -> Vec<&str> {
        self.entries()
            .filter(|(_, grid)| grid.overflows(shape.max_rows(), shape.max_cols()))
            .map(|(key, _)| key)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
A,,,
,#,#,#
,#,,#
.notdef,
,#,#
B,
,#,
,,
";

    #[test]
    fn test_parse_blocks() {
        let table = GlyphTable::parse_csv(SAMPLE);
        assert_eq!(table.len(), 3);
        let a = table.get('A').unwrap();
        assert_eq!(a.row_count(), 2);
        assert!(a.is_filled(0, 0) && a.is_filled(0, 2));
        assert!(!a.is_filled(1, 1));
        assert!(table.notdef().is_some());
        assert_eq!(table.chars().map(|(c, _)| c).collect::<Vec<_>>(), vec!['A', 'B']);
    }

    #[test]
    fn test_short_row_becomes_empty_row() {
        let table = GlyphTable::parse_csv("B,\n,#,\n\"\"\n,\n");
        let b = table.get('B').unwrap();
        assert_eq!(b.row_count(), 3);
        assert_eq!(b.rows()[0], vec![true, false]);
        assert_eq!(b.rows()[1], vec![false; 5]);
        assert_eq!(b.rows()[2], vec![false]);
    }

    #[test]
    fn test_duplicate_key_last_wins_first_position() {
        let table = GlyphTable::parse_csv("A,\n,#,\nB,\n,#,\nA,\n,,#\n");
        let keys: Vec<_> = table.entries().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["A", "B"]);
        assert!(table.get('A').unwrap().is_filled(0, 1));
        assert!(!table.get('A').unwrap().is_filled(0, 0));
    }

    #[test]
    fn test_fallback_glyph() {
        let table = GlyphTable::parse_csv(SAMPLE);
        assert_eq!(table.glyph_or_fallback('Z'), table.notdef().unwrap());

        let bare = GlyphTable::parse_csv("A,\n,#,\n");
        assert!(bare.glyph_or_fallback('Z').is_empty());
    }

    #[test]
    fn test_space_header_defines_space() {
        let table = GlyphTable::parse_csv(" ,\n,,\n");
        assert!(table.contains(' '));
    }

    #[test]
    fn test_overflowing_glyphs() {
        let table = GlyphTable::parse_csv("W,\n,#,,,,#\nA,\n,#,\n");
        assert_eq!(table.overflowing_glyphs(GridShape::Rows5Cols4), vec!["W"]);
        assert!(table.overflowing_glyphs(GridShape::Rows5Cols5).is_empty());
    }

    #[test]
    fn test_filled_cells_clip() {
        let grid = Grid::from_pattern(&["#..#", ".#..", "....", "....", "....", "#..."]);
        let cells: Vec<_> = grid.filled_cells(5, 3).collect();
        assert_eq!(cells, vec![(0, 0), (1, 1)]);
    }
}
