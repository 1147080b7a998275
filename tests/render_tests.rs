mod common;

use common::Fixture;
use gridglyph::cli::{self, Cli, CliResult, RenderArgs};
use clap::Parser;
use gridglyph::commands::render::{self, prepare_text};
use gridglyph::config::RenderOverrides;
use gridglyph::fonts::GlyphTable;
use std::ffi::OsString;

fn args(fixture: &Fixture, text: &str) -> RenderArgs {
    RenderArgs {
        text: fixture.write_file("input.txt", text),
        out: fixture.path("out.png"),
        no_legend: true,
        ..RenderArgs::default()
    }
}

#[test]
fn test_single_page_written_verbatim() {
    let fixture = Fixture::new();
    let summary = render::run(&fixture.config, &args(&fixture, "hello world\n")).unwrap();

    assert_eq!(summary.pages.len(), 1);
    let page = &summary.pages[0];
    assert_eq!(page.path, fixture.path("out.png"));
    assert_eq!((page.width, page.height), (595, 841));
    assert_eq!(summary.escaped, 0);

    let image = image::open(&page.path).unwrap().to_luma8();
    assert_eq!(image.dimensions(), (595, 841));
    // 10 mm margin at 72 dpi is 28 px; 'h' is a hollow box.
    assert_eq!(image.get_pixel(28, 28).0, [0]);
    assert_eq!(image.get_pixel(29, 29).0, [255]);
    assert_eq!(image.get_pixel(27, 28).0, [255]);
}

#[test]
fn test_long_text_paginates_with_suffixes() {
    let fixture = Fixture::new();
    let mut render_args = args(&fixture, &"abc ".repeat(200));
    render_args.scale = Some(10);

    // Three words per line, fourteen lines per page.
    let summary = render::run(&fixture.config, &render_args).unwrap();
    let names: Vec<_> = summary
        .pages
        .iter()
        .map(|p| p.path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        vec!["out_1.png", "out_2.png", "out_3.png", "out_4.png", "out_5.png"]
    );
    assert!(summary.pages.iter().all(|p| p.path.exists()));
    assert!(!fixture.path("out.png").exists());
}

#[test]
fn test_crlf_input_is_not_escaped() {
    let fixture = Fixture::new();
    let summary = render::run(&fixture.config, &args(&fixture, "ab\r\ncd\r\n")).unwrap();
    assert_eq!(summary.escaped, 0);
}

#[test]
fn test_unknown_characters_are_escaped() {
    let fixture = Fixture::new();
    let summary = render::run(&fixture.config, &args(&fixture, "smile \u{1F600}")).unwrap();
    assert_eq!(summary.escaped, 1);
    assert!(!summary.transliterated);
}

#[test]
fn test_cyrillic_transliterated_unless_disabled() {
    let fixture = Fixture::new();
    let summary = render::run(&fixture.config, &args(&fixture, "мир")).unwrap();
    assert!(summary.transliterated);
    assert_eq!(summary.escaped, 0);

    let mut keep = args(&fixture, "мир");
    keep.no_transliterate = true;
    let summary = render::run(&fixture.config, &keep).unwrap();
    assert!(!summary.transliterated);
    assert_eq!(summary.escaped, 3);
}

#[test]
fn test_extreme_mode_lowercases() {
    let fixture = Fixture::new();
    assert_eq!(render::run(&fixture.config, &args(&fixture, "ABC")).unwrap().escaped, 3);

    let mut extreme = args(&fixture, "ABC");
    extreme.extreme = true;
    assert_eq!(render::run(&fixture.config, &extreme).unwrap().escaped, 0);
}

#[test]
fn test_missing_legend_is_not_fatal() {
    let fixture = Fixture::new();
    let mut with_legend = args(&fixture, "ab");
    with_legend.no_legend = false;

    let summary = render::run(&fixture.config, &with_legend).unwrap();
    assert_eq!(summary.pages.len(), 1);
    assert_eq!(summary.escaped, 0);
}

#[test]
fn test_legend_prepended_before_normalization() {
    let fixture = Fixture::new();
    let table = GlyphTable::load(&fixture.config.table_path(fixture.config.grid_shape)).unwrap();
    let settings = fixture
        .config
        .resolve_render(&RenderOverrides::default())
        .unwrap();

    fixture.write_legend("ab\n   cd\n");
    let legend = render::load_legend(&fixture.config.legend_path).unwrap();
    let normalized = prepare_text("x", Some(&legend), &table, &settings);

    assert!(normalized.text.contains(" ab cd "));
    assert!(normalized.text.ends_with("\n\nx"));
    // Brackets, colon and capitals of the banner have no fixture glyph.
    assert!(normalized.escaped > 0);
}

#[test]
fn test_missing_table_is_fatal() {
    let fixture = Fixture::new();
    let mut bad = args(&fixture, "ab");
    bad.font_csv = Some(fixture.path("missing.csv"));

    let err = render::run(&fixture.config, &bad).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to load glyph table"));
}

#[test]
fn test_missing_text_is_fatal() {
    let fixture = Fixture::new();
    let mut bad = args(&fixture, "ab");
    bad.text = fixture.path("nope.txt");
    assert!(render::run(&fixture.config, &bad).is_err());
    assert!(!fixture.path("out.png").exists());
}

#[test]
fn test_cli_run_with_config_file() {
    let fixture = Fixture::new();
    let config_path = fixture.path("config.yaml");
    fixture.config.save_to(&config_path).unwrap();
    let text = fixture.write_file("doc.txt", "hello");
    let out = fixture.path("cli.png");

    let argv: Vec<OsString> = vec![
        "gridglyph".into(),
        "--config".into(),
        config_path.into(),
        "render".into(),
        "--text".into(),
        text.into(),
        "--out".into(),
        out.clone().into(),
        "--no-legend".into(),
    ];
    let parsed = Cli::try_parse_from(argv).unwrap();

    assert!(matches!(cli::run(parsed).unwrap(), CliResult::Success));
    let image = image::open(&out).unwrap().to_luma8();
    assert_eq!(image.dimensions(), (595, 841));
}
