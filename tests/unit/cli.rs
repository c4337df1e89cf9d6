use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_no_args_is_help() {
    let cli = parse_args(&[]).unwrap();
    assert_eq!(cli.command, Command::Help);
    assert!(!cli.no_color);
}

#[test]
fn test_global_flags_before_command() {
    let cli = parse_args(&args(&[
        "--corpus",
        "/data/quran",
        "--no-color",
        "--settings",
        "s.json",
        "stats",
    ]))
    .unwrap();
    assert_eq!(cli.corpus, Some(PathBuf::from("/data/quran")));
    assert_eq!(cli.settings, Some(PathBuf::from("s.json")));
    assert!(cli.no_color);
    assert_eq!(cli.command, Command::Stats);
}

#[test]
fn test_search_joins_query_words() {
    let cli = parse_args(&args(&["search", "--mode", "any", "من", "ربك"])).unwrap();
    assert_eq!(
        cli.command,
        Command::Search {
            mode: Some(MatchMode::Repertoire),
            query: "من ربك".to_string(),
            chapter: None,
            export: None,
        }
    );
}

#[test]
fn test_search_options_anywhere() {
    let cli = parse_args(&args(&[
        "search", "قل", "--chapter", "112", "--export", "tsv", "--mode", "exact",
    ]))
    .unwrap();
    assert_eq!(
        cli.command,
        Command::Search {
            mode: Some(MatchMode::LetterSet),
            query: "قل".to_string(),
            chapter: Some(112),
            export: Some(ExportFormat::Tsv),
        }
    );
}

#[test]
fn test_search_without_mode_leaves_default_to_settings() {
    let cli = parse_args(&args(&["search", "الله"])).unwrap();
    assert!(matches!(cli.command, Command::Search { mode: None, .. }));
}

#[test]
fn test_verse_and_chapter() {
    let cli = parse_args(&args(&["verse", "2", "255"])).unwrap();
    assert_eq!(
        cli.command,
        Command::Verse {
            chapter: 2,
            number: 255
        }
    );

    let cli = parse_args(&args(&["chapter", "36"])).unwrap();
    assert_eq!(cli.command, Command::Chapter { id: 36 });
}

#[test]
fn test_usage_errors() {
    assert!(parse_args(&args(&["verse", "2"])).is_err());
    assert!(parse_args(&args(&["verse", "0", "1"])).is_err());
    assert!(parse_args(&args(&["chapter", "x"])).is_err());
    assert!(parse_args(&args(&["search", "--mode", "fuzzy", "قل"])).is_err());
    assert!(parse_args(&args(&["search", "--export"])).is_err());
    assert!(parse_args(&args(&["search", "--mdoe", "any", "قل"])).is_err());
    assert!(parse_args(&args(&["--corpus"])).is_err());
    assert!(parse_args(&args(&["--verbose", "stats"])).is_err());
    assert!(parse_args(&args(&["stats", "extra"])).is_err());
    assert!(parse_args(&args(&["grep"])).is_err());
}
