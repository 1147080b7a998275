mod common;

use common::{FIXTURE_CHARS, Fixture};
use gridglyph::cli::BuildFontArgs;
use gridglyph::commands::build_font;
use gridglyph::config::GridShape;

#[test]
fn test_default_output_path_and_glyph_count() {
    let fixture = Fixture::new();
    let built = build_font::run(&fixture.config, &BuildFontArgs::default()).unwrap();

    assert_eq!(
        built.path,
        fixture.path("fonts").join("Times_Sitelew_Roman_5x5_pixels.ttf")
    );
    // .notdef and space come first, then one glyph per table character.
    assert_eq!(built.glyphs, 2 + FIXTURE_CHARS.chars().count());

    let bytes = std::fs::read(&built.path).unwrap();
    assert_eq!(bytes.len(), built.bytes);
    assert_eq!(&bytes[..4], &[0x00, 0x01, 0x00, 0x00]);
}

#[test]
fn test_explicit_table_and_output() {
    let fixture = Fixture::new();
    let table = fixture.write_file(
        "tiny.csv",
        &common::table_csv(&[("a", &["#"][..]), ("b", &["##"][..])]),
    );
    let args = BuildFontArgs {
        size: Some(GridShape::Rows4Cols3),
        font_csv: Some(table),
        out: Some(fixture.path("out").join("deep").join("tiny.ttf")),
    };

    let built = build_font::run(&fixture.config, &args).unwrap();
    assert_eq!(built.glyphs, 4);
    assert!(built.path.exists());
}

#[test]
fn test_missing_table_fails_without_output() {
    let fixture = Fixture::new();
    let args = BuildFontArgs {
        size: Some(GridShape::Rows5Cols4),
        ..BuildFontArgs::default()
    };

    // Only the 5x5 fixture table exists.
    let err = build_font::run(&fixture.config, &args).unwrap_err();
    assert!(format!("{err:#}").contains("Times_Sitelew_Roman_5x4_pixels.csv"));
    assert!(!fixture.config.font_output_path(GridShape::Rows5Cols4).exists());
}
