//! `gridglyph init-config`: materialize the default config file.

use anyhow::Context;
use gridglyph_config::Config;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    Written,
    AlreadyExists,
}

/// Write `Config::default()` to `path` unless a file exists there and `force` is off.
pub fn run(path: &Path, force: bool) -> anyhow::Result<InitOutcome> {
    if path.exists() && !force {
        log::warn!("Config {} exists, not overwriting", path.display());
        return Ok(InitOutcome::AlreadyExists);
    }
    Config::default()
        .save_to(path)
        .with_context(|| format!("Failed to write config {}", path.display()))?;
    log::info!("Wrote default config to {}", path.display());
    Ok(InitOutcome::Written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_then_refuses_without_force() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.yaml");

        assert_eq!(run(&path, false).unwrap(), InitOutcome::Written);
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());

        std::fs::write(&path, "dpi: 600\n").unwrap();
        assert_eq!(run(&path, false).unwrap(), InitOutcome::AlreadyExists);
        assert_eq!(Config::load_from(&path).unwrap().dpi, 600);

        assert_eq!(run(&path, true).unwrap(), InitOutcome::Written);
        assert_eq!(Config::load_from(&path).unwrap().dpi, 300);
    }
}
