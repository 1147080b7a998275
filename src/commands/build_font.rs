//! `gridglyph build-font`: glyph table to TrueType font.

use super::load_table;
use crate::cli::BuildFontArgs;
use anyhow::Context;
use gridglyph_config::Config;
use gridglyph_fonts::{FontBuilder, write_font};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltFont {
    pub path: PathBuf,
    /// Glyph count including `.notdef` and `space`
    pub glyphs: usize,
    pub bytes: usize,
}

pub fn run(config: &Config, args: &BuildFontArgs) -> anyhow::Result<BuiltFont> {
    let shape = args.size.unwrap_or(config.grid_shape);
    let table_path = args
        .font_csv
        .clone()
        .unwrap_or_else(|| config.table_path(shape));
    let out = args
        .out
        .clone()
        .unwrap_or_else(|| config.font_output_path(shape));

    let table = load_table(&table_path)?;
    for name in table.overflowing_glyphs(shape) {
        log::warn!("Glyph '{name}' draws outside the {shape} grid; extra cells are dropped");
    }

    let builder = FontBuilder::new(&table, shape);
    let glyphs = builder.glyph_order().len();
    let bytes = builder
        .build()
        .with_context(|| format!("Failed to build {shape} font"))?;
    write_font(&out, &bytes)?;

    log::info!("Built {shape} font: {glyphs} glyphs, {} bytes", bytes.len());
    println!("Saved font to {} ({glyphs} glyphs)", out.display());

    Ok(BuiltFont {
        path: out,
        glyphs,
        bytes: bytes.len(),
    })
}
