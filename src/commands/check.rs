//! `gridglyph check`: glyph table coverage for a document.

use super::{load_table, read_text};
use crate::cli::CheckArgs;
use gridglyph_config::{Config, GridShape};
use gridglyph_fonts::GlyphTable;
use gridglyph_fonts::normalize::is_folded;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageReport {
    /// Distinct characters in the document
    pub unique_chars: usize,
    /// Characters with no glyph and no folding, by code point
    pub missing: Vec<char>,
    /// Table entries drawing outside the grid shape
    pub overflowing: Vec<String>,
}

impl CoverageReport {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.overflowing.is_empty()
    }
}

/// `U+XXXX 'c'`
pub fn describe_char(c: char) -> String {
    format!("U+{:04X} '{c}'", c as u32)
}

pub fn coverage(text: &str, table: &GlyphTable, shape: GridShape) -> CoverageReport {
    let unique: BTreeSet<char> = text.chars().collect();
    let missing = unique
        .iter()
        .copied()
        .filter(|&c| !matches!(c, ' ' | '\n' | '\r') && !table.contains(c) && !is_folded(c))
        .collect();
    let overflowing = table
        .overflowing_glyphs(shape)
        .into_iter()
        .map(str::to_string)
        .collect();

    CoverageReport {
        unique_chars: unique.len(),
        missing,
        overflowing,
    }
}

pub fn run(config: &Config, args: &CheckArgs) -> anyhow::Result<CoverageReport> {
    let shape = args.size.unwrap_or(config.grid_shape);
    let table_path = args
        .font_csv
        .clone()
        .unwrap_or_else(|| config.table_path(shape));
    let table = load_table(&table_path)?;
    let text = read_text(&args.text)?;

    let report = coverage(&text, &table, shape);

    println!("Unique characters: {}", report.unique_chars);
    if report.missing.is_empty() {
        println!("All characters have a glyph.");
    } else {
        println!("Missing characters ({}):", report.missing.len());
        for &c in &report.missing {
            println!("  {}", describe_char(c));
        }
    }
    if !report.overflowing.is_empty() {
        println!(
            "Glyphs drawing outside the {shape} grid ({}):",
            report.overflowing.len()
        );
        for name in &report.overflowing {
            println!("  {name}");
        }
    }

    Ok(report)
}
