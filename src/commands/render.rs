//! `gridglyph render`: text file to paginated page images.

use super::{load_table, read_text};
use crate::cli::RenderArgs;
use anyhow::Context;
use gridglyph_config::{Config, RenderSettings};
use gridglyph_fonts::normalize::prepend_legend;
use gridglyph_fonts::{GlyphTable, NormalizeOptions, Normalized, TextNormalizer};
use gridglyph_render::{Canvas, LayoutEngine, LayoutOptions, PageGeometry, save_pages};
use std::path::{Path, PathBuf};

/// One page image written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedPage {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone)]
pub struct RenderSummary {
    pub pages: Vec<SavedPage>,
    /// Characters replaced by `[\uXXXX]` escapes
    pub escaped: usize,
    pub transliterated: bool,
}

/// Read the legend, or warn and return `None` when it cannot be read.
pub fn load_legend(path: &Path) -> Option<String> {
    match read_text(path) {
        Ok(legend) => Some(legend),
        Err(e) => {
            log::warn!("Legend unavailable, rendering without it: {e:#}");
            None
        }
    }
}

/// Apply the legend and the normalization pipeline to a document body.
pub fn prepare_text(
    body: &str,
    legend: Option<&str>,
    table: &GlyphTable,
    settings: &RenderSettings,
) -> Normalized {
    let source = match legend {
        Some(legend) => prepend_legend(legend, body),
        None => body.to_string(),
    };
    let options = NormalizeOptions {
        max_density: settings.max_density,
        transliterate: settings.transliterate,
    };
    TextNormalizer::for_table(table, options).normalize(&source)
}

/// Lay normalized text out onto A4 canvases.
pub fn render_pages(
    text: &str,
    table: &GlyphTable,
    settings: &RenderSettings,
) -> anyhow::Result<Vec<Canvas>> {
    let page = PageGeometry::a4(settings.dpi, settings.margin_mm)?;
    log::debug!(
        "Page {}x{} px, margin {} px, shape {}",
        page.width,
        page.height,
        page.margin,
        settings.grid_shape
    );
    let engine = LayoutEngine::new(table, page, LayoutOptions::from_settings(settings));
    Ok(engine.render(text))
}

pub fn run(config: &Config, args: &RenderArgs) -> anyhow::Result<RenderSummary> {
    let settings = config
        .resolve_render(&args.overrides())
        .context("Invalid render settings")?;
    let table = load_table(&settings.table_path)?;
    let body = read_text(&args.text)?;

    let legend = if settings.include_legend {
        load_legend(&settings.legend_path)
    } else {
        None
    };
    let normalized = prepare_text(&body, legend.as_deref(), &table, &settings);
    if normalized.escaped > 0 {
        log::info!(
            "{} character(s) have no glyph and were escaped",
            normalized.escaped
        );
    }
    if normalized.transliterated {
        log::info!("Glyph table has no Cyrillic letters, transliterated");
    }

    let canvases = render_pages(&normalized.text, &table, &settings)?;
    let paths = save_pages(&canvases, &args.out)?;

    let pages: Vec<SavedPage> = paths
        .into_iter()
        .zip(&canvases)
        .map(|(path, canvas)| SavedPage {
            path,
            width: canvas.width(),
            height: canvas.height(),
        })
        .collect();
    for page in &pages {
        println!(
            "Saved to {} (Size: {}x{}, DPI: {})",
            page.path.display(),
            page.width,
            page.height,
            settings.dpi
        );
    }

    Ok(RenderSummary {
        pages,
        escaped: normalized.escaped,
        transliterated: normalized.transliterated,
    })
}
