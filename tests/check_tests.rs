mod common;

use common::Fixture;
use gridglyph::cli::CheckArgs;
use gridglyph::commands::check;

fn check_args(fixture: &Fixture, text: &str) -> CheckArgs {
    CheckArgs {
        text: fixture.write_file("doc.txt", text),
        ..CheckArgs::default()
    }
}

#[test]
fn test_fully_covered_document() {
    let fixture = Fixture::new();
    let report = check::run(&fixture.config, &check_args(&fixture, "hello, world.\r\n")).unwrap();

    assert_eq!(report.unique_chars, 11);
    assert!(report.is_clean());
}

#[test]
fn test_missing_characters_sorted_by_code_point() {
    let fixture = Fixture::new();
    let report = check::run(
        &fixture.config,
        &check_args(&fixture, "w\u{f6}rld! \u{201c}quoted\u{201d}"),
    )
    .unwrap();

    // Curly quotes fold to ASCII quotes and are not reported.
    assert_eq!(report.missing, vec!['!', '\u{f6}']);
    assert_eq!(check::describe_char(report.missing[1]), "U+00F6 '\u{f6}'");
}

#[test]
fn test_overflowing_glyphs_reported() {
    let fixture = Fixture::new();
    let table = fixture.write_file(
        "wide.csv",
        &common::table_csv(&[("a", &["#"][..]), ("w", &["#....#"][..])]),
    );
    let args = CheckArgs {
        font_csv: Some(table),
        ..check_args(&fixture, "aw")
    };

    let report = check::run(&fixture.config, &args).unwrap();
    assert!(report.missing.is_empty());
    assert_eq!(report.overflowing, vec!["w".to_string()]);
}
