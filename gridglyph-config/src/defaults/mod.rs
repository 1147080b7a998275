//! Default value functions for configuration.
//!
//! Each sub-module groups related `default_*` free functions used as
//! `#[serde(default = "crate::defaults::...")]` attributes on `Config` fields.

mod paths;
mod render;

// ── Page & rendering ───────────────────────────────────────────────────────
pub use render::{dpi, grid_shape, line_gap, margin_mm, scale};

// ── Resource locations ─────────────────────────────────────────────────────
pub use paths::{definitions_dir, font_output_dir, legend_path};

// ── Miscellaneous ──────────────────────────────────────────────────────────
pub fn bool_true() -> bool {
    true
}

pub fn bool_false() -> bool {
    false
}
