use crate::reports;
use clap::Args;
use keygrade::config::{InputPaths, DEFAULT_IGNORE_CHARS};
use keygrade::error::GradeResult;
use keygrade::scorer::Grader;

#[derive(Args, Debug, Clone)]
pub struct CostsArgs {
    /// Exact layout name
    #[arg(short, long)]
    pub layout: String,

    #[arg(long, default_value = "en")]
    pub language: String,

    /// Show only the N largest contributions (0 = all)
    #[arg(short, long, default_value_t = 20)]
    pub top: usize,

    #[arg(long, default_value = DEFAULT_IGNORE_CHARS)]
    pub ignore_chars: String,
}

pub fn run(args: CostsArgs, paths: &InputPaths) -> GradeResult<()> {
    let grader = Grader::new(paths, &args.ignore_chars)?;
    let layout = grader.layout(&args.layout)?;
    let grade = grader.grade(&args.layout, &args.language)?;
    let mut rows = grader.breakdown(&args.layout, &args.language)?;
    if args.top > 0 {
        rows.truncate(args.top);
    }

    reports::print_layout_grid(layout);
    reports::print_cost_breakdown(&args.layout, &args.language, grade, &rows);
    Ok(())
}
