use criterion::{criterion_group, criterion_main, Criterion};
use keygrade::frequency::{Bigram, FrequencyTable};
use keygrade::loader::ConfigTables;
use keygrade::scorer::{CostMatrix, ErgonomicModel, Grader, GraderBuilder};
use std::hint::black_box;

const CONFIG: &str = include_str!("../data/config.txt");

/// Every ordered pair of lowercase letters, with two synthetic languages.
fn all_pairs() -> FrequencyTable {
    let letters: Vec<char> = ('a'..='z').collect();
    let mut rows = Vec::new();
    for (i, &a) in letters.iter().enumerate() {
        for (j, &b) in letters.iter().enumerate() {
            let f = ((i * 26 + j) % 97) as f64 / 10_000.0;
            rows.push((Bigram::new(a, b), vec![f, 0.01 - f / 2.0]));
        }
    }
    FrequencyTable::from_rows(vec!["xx".to_string(), "yy".to_string()], rows)
        .expect("Failed to build frequency table")
}

fn setup_grader() -> Grader {
    GraderBuilder::new()
        .with_config_from_str(CONFIG)
        .expect("Failed to parse config")
        .with_frequencies(all_pairs())
        .build()
        .expect("Failed to build grader")
}

fn criterion_benchmark(c: &mut Criterion) {
    let grader = setup_grader();
    c.bench_function("grade_all (3 layouts x 676 bigrams)", |b| {
        b.iter(|| black_box(&grader).grade_all())
    });

    let tables = ConfigTables::parse(CONFIG).expect("Failed to parse config");
    let model = ErgonomicModel::new(tables.keys.clone(), tables.penalties.clone());
    let freqs = all_pairs();
    c.bench_function("cost_matrix (3 layouts x 676 bigrams)", |b| {
        b.iter(|| CostMatrix::compute(black_box(&model), &tables.layouts, freqs.bigrams()))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
