//! Page file naming and saving.

use crate::error::RenderError;
use crate::surface::Canvas;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Extension used for numbered pages when the output path has none.
pub const DEFAULT_EXTENSION: &str = "png";

/// Destination paths for `count` pages.
///
/// A single page goes to `out` unchanged. Several pages go to
/// `<stem>_1.<ext>`, `<stem>_2.<ext>`, ... next to `out`.
pub fn page_paths(out: &Path, count: usize) -> Vec<PathBuf> {
    if count == 1 {
        return vec![out.to_path_buf()];
    }

    let stem = out.file_stem().map(|s| s.to_os_string()).unwrap_or_default();
    let ext = out
        .extension()
        .map(|e| e.to_os_string())
        .unwrap_or_else(|| OsString::from(DEFAULT_EXTENSION));

    (1..=count)
        .map(|i| {
            let mut name = stem.clone();
            name.push(format!("_{i}."));
            name.push(&ext);
            out.with_file_name(name)
        })
        .collect()
}

/// Save pages under the names from [`page_paths`], in order.
pub fn save_pages(pages: &[Canvas], out: &Path) -> Result<Vec<PathBuf>, RenderError> {
    let paths = page_paths(out, pages.len());
    for (page, path) in pages.iter().zip(&paths) {
        page.save(path)?;
        log::info!(
            "Saved page {} ({}x{})",
            path.display(),
            page.width(),
            page.height()
        );
    }
    Ok(paths)
}
