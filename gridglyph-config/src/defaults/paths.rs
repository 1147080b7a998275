//! Default values for resource locations.

use std::path::PathBuf;

pub fn definitions_dir() -> PathBuf {
    PathBuf::from("docs").join("definitions")
}

pub fn legend_path() -> PathBuf {
    PathBuf::from("tools").join("character_legend.txt")
}

pub fn font_output_dir() -> PathBuf {
    PathBuf::from("ttf_fonts")
}
