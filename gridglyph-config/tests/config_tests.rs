use gridglyph_config::{Config, ConfigError, GridShape, LogLevel};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_defaults() {
    let config = Config::default();
    assert_eq!(config.grid_shape, GridShape::Rows5Cols5);
    assert_eq!(config.dpi, 300);
    assert_eq!(config.scale, 1);
    assert_eq!(config.margin_mm, 10);
    assert_eq!(config.line_gap, 1);
    assert!(!config.compact);
    assert!(!config.max_density);
    assert!(config.include_legend);
    assert!(config.transliterate);
    assert_eq!(config.log_level, LogLevel::Warn);
}

#[test]
fn test_config_yaml_round_trip() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("nested").join("config.yaml");

    let config = Config::new()
        .with_grid_shape(GridShape::Rows5Cols4)
        .with_scale(2)
        .with_definitions_dir("/srv/defs");
    config.save_to(&path).expect("save");

    let loaded = Config::load_from(&path).expect("load");
    assert_eq!(loaded, config);
    assert!(!path.with_extension("yaml.tmp").exists());
}

#[test]
fn test_partial_yaml_fills_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.yaml");
    fs::write(&path, "grid_shape: \"4x3\"\ncompact: true\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.grid_shape, GridShape::Rows4Cols3);
    assert!(config.compact);
    assert_eq!(config.dpi, 300);
    assert!(config.include_legend);
}

#[test]
fn test_missing_file_yields_defaults_without_writing() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("absent.yaml");

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config, Config::default());
    assert!(!path.exists());
}

#[test]
fn test_empty_file_yields_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.yaml");
    fs::write(&path, "\n").unwrap();
    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}

#[test]
fn test_invalid_yaml_is_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.yaml");
    fs::write(&path, "dpi: [not a number\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_invalid_value_is_validation_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.yaml");
    fs::write(&path, "scale: 0\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Validation(_)));
    assert!(err.to_string().contains("scale"));
}

#[test]
fn test_paths_are_taken_literally() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.yaml");
    fs::write(&path, "definitions_dir: \"${HOME}/defs\"\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(
        config.definitions_dir,
        std::path::PathBuf::from("${HOME}/defs")
    );
}
