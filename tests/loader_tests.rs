mod common;

use common::{abcd_config, PENALTY_HEADER, SAMPLE_CONFIG};
use keygrade::error::GradeError;
use keygrade::loader::{load_config, parse_config, split_sections, strip_comments, ConfigTables};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_sections_in_any_order() {
    let text = format!(
        "[layouts]\n>> abcd\na b c d\n[penalties]\n{}\n[weights]\n0 0 0 0\n[keys]\nA B C D\n",
        PENALTY_HEADER
    );
    let sections = parse_config(&text).unwrap();
    assert_eq!(sections.get("keys"), Some("A B C D"));
    assert_eq!(sections.get("weights"), Some("0 0 0 0"));
    assert_eq!(
        sections.names().collect::<Vec<_>>(),
        vec!["layouts", "penalties", "weights", "keys"]
    );
}

#[test]
fn test_blank_lines_dropped_inside_sections() {
    let sections = split_sections("[keys]\nA B\n\n   \nC D\n");
    assert_eq!(sections.get("keys"), Some("A B\nC D"));
}

#[test]
fn test_missing_section_names_the_block() {
    let text = "[keys]\nA\n[weights]\n1\n[layouts]\n>> x\na\n";
    match parse_config(text) {
        Err(GradeError::MissingSection(name)) => assert_eq!(name, "penalties"),
        other => panic!("expected MissingSection, got {:?}", other),
    }
}

#[test]
fn test_missing_section_message() {
    let err = parse_config("[keys]\nA\n").unwrap_err();
    assert_eq!(err.to_string(), "Missing block from config file: weights");
}

#[test]
fn test_commented_out_header_does_not_count() {
    let text = abcd_config([0.0; 4]).replace("[penalties]", "// [penalties]");
    assert!(matches!(
        parse_config(&text),
        Err(GradeError::MissingSection(_))
    ));
}

#[test]
fn test_block_comment_spanning_lines_is_removed() {
    let text = "[keys]\nA /* B\nC */ D\n";
    let sections = split_sections(&strip_comments(text));
    assert_eq!(sections.get("keys"), Some("A  D"));
}

#[test]
fn test_duplicate_section_first_wins() {
    let sections = split_sections("[keys]\nA B\n[keys]\nC D\n");
    assert_eq!(sections.get("keys"), Some("A B"));
    assert_eq!(sections.names().count(), 1);
}

#[test]
fn test_unknown_sections_are_kept_but_ignored() {
    let text = format!("{}\n[notes]\nanything\n", abcd_config([0.0; 4]));
    let sections = parse_config(&text).unwrap();
    assert_eq!(sections.get("notes"), Some("anything"));
    assert!(ConfigTables::from_sections(&sections).is_ok());
}

#[test]
fn test_load_config_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", abcd_config([1.0, 2.0, 3.0, 4.0])).unwrap();

    let sections = load_config(file.path()).unwrap();
    assert_eq!(sections.get("weights"), Some("1 2 3 4"));

    let tables = ConfigTables::load(file.path()).unwrap();
    assert_eq!(tables.keys.len(), 4);
    assert_eq!(tables.layouts.len(), 1);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let result = load_config("definitely/not/here.txt");
    assert!(matches!(result, Err(GradeError::Io(_))));
}

#[test]
fn test_sample_config_parses() {
    let tables = ConfigTables::parse(SAMPLE_CONFIG).unwrap();
    assert_eq!(tables.keys.len(), 42);
    assert_eq!(tables.penalties.len(), 16);
    let names: Vec<&str> = tables.layouts.iter().map(|l| l.name()).collect();
    assert_eq!(names, vec!["qwerty", "colemak", "qwerty-fr"]);
}
