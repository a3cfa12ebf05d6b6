use crate::reports;
use clap::Args;
use keygrade::config::{InputPaths, DEFAULT_IGNORE_CHARS};
use keygrade::error::GradeResult;
use keygrade::scorer::Grader;

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Characters whose bigrams are removed before checking
    #[arg(long, default_value = DEFAULT_IGNORE_CHARS)]
    pub ignore_chars: String,

    /// Only show layouts whose name contains this (case-insensitive)
    #[arg(short, long)]
    pub layout: Option<String>,
}

/// Builds the grader (which validates every bigram cost) and reports what
/// the data says about itself, without printing grades.
pub fn run(args: CheckArgs, paths: &InputPaths) -> GradeResult<()> {
    let grader = Grader::new(paths, &args.ignore_chars)?;
    let keys = grader.model.keys();

    println!("\n=== INPUT CHECK ===");
    println!(
        "{} keys, {} layouts, {} penalty rows, {} bigrams x {} languages",
        keys.len(),
        grader.layouts.len(),
        grader.model.penalties().len(),
        grader.frequencies.len(),
        grader.frequencies.languages().len()
    );

    let filter = args.layout.as_ref().map(|f| f.to_lowercase());
    for layout in grader.layouts.iter() {
        if let Some(f) = &filter {
            if !layout.name().to_lowercase().contains(f) {
                continue;
            }
        }
        reports::print_layout_grid(layout);
    }

    let missing = grader.missing_letters();
    if missing.is_empty() {
        println!("\nEvery layout covers every letter in the frequency table.");
    } else {
        reports::print_missing_letters(&missing);
    }

    let asymmetries = grader.model.penalties().asymmetries();
    if asymmetries.is_empty() {
        println!("\nPenalty table is symmetric under finger-pair swap.");
    } else {
        reports::print_asymmetries(&asymmetries);
    }
    Ok(())
}
