use super::types::{BigramContribution, GradeRow, GradeTable};
use super::Grader;
use rayon::prelude::*;

/// Frequency-weighted sum of per-bigram costs, folded in row order.
pub fn weighted_sum(costs: &[f64], freqs: impl Iterator<Item = f64>) -> f64 {
    costs.iter().zip(freqs).map(|(c, f)| c * f).sum()
}

pub fn grade_one(grader: &Grader, layout: usize, language: usize) -> f64 {
    weighted_sum(
        grader.costs.layout_costs(layout),
        grader.frequencies.column(language).map(|(_, f)| f),
    )
}

/// Grades every layout against every language. Layout rows are computed in
/// parallel; each row's sums are sequential, so results match a serial run.
pub fn grade_all(grader: &Grader) -> GradeTable {
    let languages = grader.frequencies.languages().to_vec();
    let rows = grader
        .layouts
        .as_slice()
        .par_iter()
        .enumerate()
        .map(|(li, layout)| GradeRow {
            layout: layout.name().to_string(),
            grades: (0..languages.len())
                .map(|lang| grade_one(grader, li, lang))
                .collect(),
        })
        .collect();
    GradeTable { languages, rows }
}

/// Per-bigram contributions for one (layout, language), largest first.
pub fn breakdown(grader: &Grader, layout: usize, language: usize) -> Vec<BigramContribution> {
    let costs = grader.costs.layout_costs(layout);
    let mut out: Vec<BigramContribution> = grader
        .frequencies
        .column(language)
        .zip(costs)
        .map(|((bigram, frequency), &cost)| BigramContribution {
            bigram,
            frequency,
            cost,
            contribution: frequency * cost,
        })
        .collect();
    out.sort_by(|a, b| b.contribution.total_cmp(&a.contribution));
    out
}
