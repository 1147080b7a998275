//! Shared integration test helpers for gridglyph.
//!
//! Include with `mod common;` at the top of a test file. The fixture writes
//! a small 5x5 glyph table into a temporary directory and returns a
//! `Config` whose resource paths all point inside it.

#![allow(dead_code)]

use gridglyph::config::{Config, GridShape};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Grid every fixture letter uses: a hollow 3x3 box, four cells wide with its gap.
pub const BOX: &[&str] = &["###", "#.#", "###"];

/// Fixture `.notdef`: a hollow 5x5 frame.
pub const FRAME: &[&str] = &["#####", "#...#", "#...#", "#...#", "#####"];

/// Characters the fixture table defines.
pub const FIXTURE_CHARS: &str = "abcdefghijklmnopqrstuvwxyz.,";

/// Serialize glyphs into the table CSV dialect: a header row per glyph,
/// then one row per grid line with a blank label cell.
pub fn table_csv(glyphs: &[(&str, &[&str])]) -> String {
    let mut out = String::new();
    for (key, pattern) in glyphs {
        let header = if key.contains(',') || key.contains('"') {
            format!("\"{}\"", key.replace('"', "\"\""))
        } else {
            key.to_string()
        };
        out.push_str(&header);
        out.push_str(",\n");
        for line in pattern.iter() {
            let cells: Vec<&str> = line.chars().map(|c| if c == '#' { "#" } else { "" }).collect();
            out.push(',');
            out.push_str(&cells.join(","));
            out.push('\n');
        }
    }
    out
}

pub struct Fixture {
    pub dir: TempDir,
    pub config: Config,
}

impl Fixture {
    /// 5x5 table with [`FIXTURE_CHARS`] and a `.notdef`, 72 dpi pages.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let defs = dir.path().join("defs");
        fs::create_dir_all(&defs).expect("Failed to create definitions dir");

        let letters: Vec<String> = FIXTURE_CHARS.chars().map(String::from).collect();
        let mut glyphs: Vec<(&str, &[&str])> = letters.iter().map(|k| (k.as_str(), BOX)).collect();
        glyphs.push((".notdef", FRAME));

        let config = Config {
            dpi: 72,
            definitions_dir: defs,
            legend_path: dir.path().join("legend.txt"),
            font_output_dir: dir.path().join("fonts"),
            ..Config::default()
        };
        fs::write(config.table_path(GridShape::Rows5Cols5), table_csv(&glyphs))
            .expect("Failed to write glyph table");

        Self { dir, config }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, contents).expect("Failed to write fixture file");
        path
    }

    pub fn write_legend(&self, contents: &str) {
        fs::write(&self.config.legend_path, contents).expect("Failed to write legend");
    }
}
