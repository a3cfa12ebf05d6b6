#![allow(dead_code)]

use keygrade::config::DEFAULT_IGNORE_CHARS;
use keygrade::frequency::{Bigram, FrequencyTable};
use keygrade::keys::Finger;
use keygrade::loader::ConfigTables;
use keygrade::scorer::{ErgonomicModel, Grader, GraderBuilder};
use strum::IntoEnumIterator;

pub const SAMPLE_CONFIG: &str = include_str!("../../data/config.txt");
pub const SAMPLE_STATS: &str = include_str!("../../data/stats.csv");

pub const PENALTY_HEADER: &str = ", same_row, row_jump1, row_jump2";

/// Four keys whose side markers all differ, so no bigram is same-hand.
/// Every finger pair carries a zero penalty.
pub fn abcd_config(weights: [f64; 4]) -> String {
    let codes = Finger::iter().flat_map(|a| Finger::iter().map(move |b| format!("{}{}", a, b)));
    let zeros: Vec<String> = codes.map(|code| format!("{}, 0, 0, 0", code)).collect();
    format!(
        "[keys]\nA B C D\n\n[weights]\n{} {} {} {}\n\n[penalties]\n{}\n{}\n\n[layouts]\n>> abcd\na b c d\n",
        weights[0],
        weights[1],
        weights[2],
        weights[3],
        PENALTY_HEADER,
        zeros.join("\n")
    )
}

/// Left-hand ring key on row 2 (L10) and index key on row 3 (L19), with an
/// `ir` row_jump1 penalty of 0.5 and no `ri` entry.
pub fn index_ring_config() -> String {
    format!(
        "[keys]\nL10 L19 R16\n[weights]\n1.0 0.25 2.0\n[penalties]\n{}\nir, 0, 0.5, 0\n[layouts]\n>> hand\nb a c\n",
        PENALTY_HEADER
    )
}

pub fn frequencies(language: &str, rows: &[(&str, f64)]) -> FrequencyTable {
    FrequencyTable::from_rows(
        vec![language.to_string()],
        rows.iter()
            .map(|(b, f)| (b.parse::<Bigram>().unwrap(), vec![*f]))
            .collect(),
    )
    .unwrap()
}

pub fn bigram(s: &str) -> Bigram {
    s.parse().unwrap()
}

pub fn model_from(config: &str) -> (ErgonomicModel, ConfigTables) {
    let tables = ConfigTables::parse(config).unwrap();
    let model = ErgonomicModel::new(tables.keys.clone(), tables.penalties.clone());
    (model, tables)
}

pub fn sample_grader() -> Grader {
    GraderBuilder::new()
        .with_config_from_str(SAMPLE_CONFIG)
        .unwrap()
        .with_frequencies_from_reader(SAMPLE_STATS.as_bytes())
        .unwrap()
        .ignore_chars(DEFAULT_IGNORE_CHARS)
        .build()
        .unwrap()
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}
