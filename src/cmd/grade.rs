use crate::reports;
use clap::Args;
use keygrade::config::{GradeParams, InputPaths, BLEND_COLUMN};
use keygrade::diagnostics::MissingLetters;
use keygrade::error::GradeResult;
use keygrade::scorer::{GradeTable, Grader};
use serde::Serialize;
use tracing::{info, warn};

/// `--json` output: the grade table plus the missing-letter diagnostic.
#[derive(Serialize)]
struct JsonReport<'a> {
    grades: &'a GradeTable,
    missing_letters: &'a [MissingLetters],
}

#[derive(Args, Debug, Clone)]
pub struct GradeArgs {
    #[command(flatten)]
    pub params: GradeParams,
}

pub fn run(args: GradeArgs, paths: &InputPaths) -> GradeResult<()> {
    let params = args.params;
    info!("Loading config: {}", paths.config.display());
    info!("Loading stats: {}", paths.stats.display());
    let grader = Grader::new(paths, &params.ignore_chars)?;

    let mut missing = grader.missing_letters();
    for m in &missing {
        let letters: String = m.letters.iter().collect();
        warn!(
            "Layout '{}' has no key for '{}'; their bigrams count 0.",
            m.layout, letters
        );
    }

    let mut table = grader.grade_all();
    if let Some(weights) = params.blend_weights()? {
        table.add_blend(BLEND_COLUMN, &weights)?;
    }

    let sort_column = params
        .sort_by
        .clone()
        .or_else(|| table.languages.first().cloned());
    if let Some(language) = sort_column {
        table.sort_by(&language)?;
    }

    table.hide(&params.hidden_languages());
    if let Some(filter) = &params.layout {
        table.retain_layouts(filter);
        let needle = filter.to_lowercase();
        missing.retain(|m| m.layout.to_lowercase().contains(&needle));
    }

    if params.json {
        let report = JsonReport {
            grades: &table,
            missing_letters: &missing,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if table.rows.is_empty() {
        println!("No layouts found matching criteria.");
        return Ok(());
    }
    if !missing.is_empty() {
        reports::print_missing_letters(&missing);
    }
    reports::print_grade_table(&table);
    Ok(())
}
