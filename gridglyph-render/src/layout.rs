//! Greedy word wrap and pagination.
//!
//! Text is split into source lines (a single line in compact mode), each
//! line into word and space tokens. Tokens are placed left to right; a word
//! that would cross the right margin moves to the next line, and a wrap past
//! the bottom margin starts a new page. Explicit line ends always advance the
//! cursor but never start a page on their own.

use crate::geometry::PageGeometry;
use crate::surface::{Canvas, DrawSurface};
use gridglyph_config::{GridShape, RenderSettings};
use gridglyph_fonts::{GlyphTable, Grid, raster_advance};
use std::borrow::Cow;

/// A layout unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    Space,
    Word(&'a str),
}

impl Token<'_> {
    pub fn is_space(&self) -> bool {
        matches!(self, Token::Space)
    }
}

/// Split text into the lines the engine lays out.
///
/// Compact mode collapses every whitespace run, newlines included, into a
/// single space and yields one line.
pub fn split_lines(text: &str, compact: bool) -> Vec<Cow<'_, str>> {
    if compact {
        vec![Cow::Owned(text.split_whitespace().collect::<Vec<_>>().join(" "))]
    } else {
        text.split('\n').map(Cow::Borrowed).collect()
    }
}

/// Split one line into words and single-space tokens.
///
/// Compact mode never emits two space tokens in a row.
pub fn tokenize(line: &str, compact: bool) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut word_start: Option<usize> = None;

    for (i, c) in line.char_indices() {
        if c != ' ' {
            word_start.get_or_insert(i);
            continue;
        }
        if let Some(start) = word_start.take() {
            tokens.push(Token::Word(&line[start..i]));
        }
        if !compact || tokens.last() != Some(&Token::Space) {
            tokens.push(Token::Space);
        }
    }
    if let Some(start) = word_start {
        tokens.push(Token::Word(&line[start..]));
    }
    tokens
}

/// Layout parameters that do not depend on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutOptions {
    pub shape: GridShape,
    pub scale: u32,
    pub line_gap: u32,
    pub compact: bool,
}

impl LayoutOptions {
    pub fn from_settings(settings: &RenderSettings) -> Self {
        Self {
            shape: settings.grid_shape,
            scale: settings.scale,
            line_gap: settings.line_gap,
            compact: settings.compact,
        }
    }
}

/// Layout cursor: top-left corner of the next glyph.
///
/// Coordinates saturate at `u32::MAX`; anything that far out lies off the
/// canvas and is clipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub x: u32,
    pub y: u32,
}

impl Cursor {
    fn at_margin(page: &PageGeometry) -> Self {
        Self {
            x: page.margin,
            y: page.margin,
        }
    }

    fn new_line(&mut self, page: &PageGeometry, advance: u32) {
        self.x = page.margin;
        self.y = self.y.saturating_add(advance);
    }
}

/// Places normalized text onto pages using one glyph table.
#[derive(Debug, Clone)]
pub struct LayoutEngine<'a> {
    table: &'a GlyphTable,
    page: PageGeometry,
    options: LayoutOptions,
}

impl<'a> LayoutEngine<'a> {
    pub fn new(table: &'a GlyphTable, page: PageGeometry, options: LayoutOptions) -> Self {
        Self {
            table,
            page,
            options,
        }
    }

    pub fn page(&self) -> PageGeometry {
        self.page
    }

    /// Vertical distance between consecutive lines.
    pub fn line_advance(&self) -> u32 {
        (self.options.shape.max_rows() as u32)
            .saturating_add(self.options.line_gap)
            .saturating_mul(self.options.scale)
    }

    fn glyph(&self, c: char) -> &'a Grid {
        self.table.glyph_or_fallback(c)
    }

    /// Scaled advance of one character.
    pub fn char_width(&self, c: char) -> u32 {
        raster_advance(self.glyph(c), self.options.shape.max_cols()).saturating_mul(self.options.scale)
    }

    /// Scaled advance of a token.
    pub fn token_width(&self, token: Token<'_>) -> u32 {
        let cells: u32 = match token {
            Token::Space => self.options.shape.space_advance(),
            Token::Word(word) => word
                .chars()
                .map(|c| raster_advance(self.glyph(c), self.options.shape.max_cols()))
                .fold(0u32, u32::saturating_add),
        };
        cells.saturating_mul(self.options.scale)
    }

    /// Lay `text` out, asking `new_page` for every page surface.
    ///
    /// Always returns at least one page, the last one possibly blank.
    pub fn layout<S, F>(&self, text: &str, mut new_page: F) -> Vec<S>
    where
        S: DrawSurface,
        F: FnMut() -> S,
    {
        let page = self.page;
        let line_advance = self.line_advance();
        let space_advance = self.token_width(Token::Space);

        let mut pages = Vec::new();
        let mut surface = new_page();
        let mut cursor = Cursor::at_margin(&page);

        for line in split_lines(text, self.options.compact) {
            for token in tokenize(&line, self.options.compact) {
                let width = self.token_width(token);
                if token.is_space() && cursor.x == page.margin {
                    continue;
                }

                if cursor.x.saturating_add(width) > page.right_limit() {
                    if token.is_space() {
                        continue;
                    }
                    cursor.new_line(&page, line_advance);
                    if cursor.y > page.bottom_limit() {
                        log::debug!("Page {} full, starting a new page", pages.len() + 1);
                        pages.push(std::mem::replace(&mut surface, new_page()));
                        cursor = Cursor::at_margin(&page);
                    }
                }

                match token {
                    Token::Space => cursor.x = cursor.x.saturating_add(space_advance),
                    Token::Word(word) => {
                        for c in word.chars() {
                            let grid = self.glyph(c);
                            self.draw_glyph(&mut surface, grid, cursor);
                            let advance = raster_advance(grid, self.options.shape.max_cols())
                                .saturating_mul(self.options.scale);
                            cursor.x = cursor.x.saturating_add(advance);
                        }
                    }
                }
            }
            cursor.new_line(&page, line_advance);
        }

        pages.push(surface);
        log::debug!("Layout finished with {} page(s)", pages.len());
        pages
    }

    /// Lay `text` out onto blank canvases of the page size.
    pub fn render(&self, text: &str) -> Vec<Canvas> {
        self.layout(text, || Canvas::new(self.page.width, self.page.height))
    }

    fn draw_glyph<S: DrawSurface>(&self, surface: &mut S, grid: &Grid, at: Cursor) {
        let scale = self.options.scale;
        let shape = self.options.shape;
        for (row, col) in grid.filled_cells(shape.max_rows(), shape.max_cols()) {
            let x = at.x.saturating_add((col as u32).saturating_mul(scale));
            let y = at.y.saturating_add((row as u32).saturating_mul(scale));
            surface.draw_rect(x, y, scale, scale);
        }
    }
}
