use std::path::PathBuf;

use super::*;

fn parse(args: &[&str]) -> Cli {
    Cli::parse_from(std::iter::once("repo-cloc").chain(args.iter().copied()))
}

#[test]
fn cli_defaults() {
    let cli = parse(&["src"]);

    assert_eq!(cli.path.as_deref(), Some("src"));
    assert_eq!(cli.format, OutputFormat::Text);
    assert_eq!(cli.log_level, LogLevel::Info);
    assert!(!cli.dump_csv);
    assert!(!cli.quiet);
    assert!(matches!(cli.color, ColorChoice::Auto));
    assert!(cli.validate().is_ok());
}

#[test]
fn cli_all_flags() {
    let cli = parse(&[
        "repo",
        "--override-languages-path",
        "langs.toml",
        "--ignore-file",
        ".clocignore",
        "--dump-csv",
        "--scan-id",
        "nightly",
        "--results-directory-path",
        "out",
        "--format",
        "json",
        "--log-level",
        "DEBUG",
        "-q",
        "--color",
        "never",
    ]);

    assert_eq!(
        cli.override_languages_path,
        Some(PathBuf::from("langs.toml"))
    );
    assert_eq!(cli.ignore_file, Some(PathBuf::from(".clocignore")));
    assert_eq!(cli.scan_id.as_deref(), Some("nightly"));
    assert_eq!(cli.results_directory_path, Some(PathBuf::from("out")));
    assert_eq!(cli.format, OutputFormat::Json);
    assert_eq!(cli.log_level, LogLevel::Debug);
    assert!(cli.quiet);
    assert!(matches!(cli.color, ColorChoice::Never));
    assert!(cli.validate().is_ok());
}

#[test]
fn flags_may_follow_the_path() {
    let cli = parse(&["repo", "--format", "csv"]);
    assert_eq!(cli.format, OutputFormat::Csv);
}

#[test]
fn path_required_without_print_languages() {
    let cli = parse(&[]);
    assert!(matches!(cli.validate(), Err(ClocError::Config(_))));
}

#[test]
fn print_languages_needs_no_path() {
    let cli = parse(&["--print-languages"]);
    assert!(cli.validate().is_ok());
}

#[test]
fn dump_csv_requires_scan_id() {
    let cli = parse(&["repo", "--dump-csv"]);
    let err = cli.validate().unwrap_err();
    assert!(err.to_string().contains("--scan-id"));

    let cli = parse(&["repo", "--dump-csv", "--scan-id", ""]);
    assert!(cli.validate().is_err());
}

#[test]
fn results_directory_requires_dump_csv() {
    let cli = parse(&["repo", "--results-directory-path", "out"]);
    let err = cli.validate().unwrap_err();
    assert!(err.to_string().contains("--dump-csv"));
}

#[test]
fn unknown_format_is_rejected() {
    let result = Cli::try_parse_from(["repo-cloc", "repo", "--format", "sarif"]);
    assert!(result.is_err());
}

#[test]
fn scan_path_strips_trailing_quote() {
    let cli = parse(&["C:\\Users\\me\\repo\""]);
    let path = cli.scan_path().unwrap();
    assert!(!path.to_string_lossy().ends_with('"'));
}

#[test]
fn clean_path_is_lexical() {
    assert_eq!(clean_path("./repo/"), PathBuf::from("repo"));
    assert_eq!(clean_path("repo/./src/../lib"), PathBuf::from("repo/lib"));
    assert_eq!(clean_path("."), PathBuf::from("."));
    assert_eq!(clean_path("../sibling"), PathBuf::from("../sibling"));
    assert_eq!(clean_path("/abs/path/"), PathBuf::from("/abs/path"));
    assert_eq!(clean_path("repo\""), PathBuf::from("repo"));
}
