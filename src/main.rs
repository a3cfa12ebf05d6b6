use clap::{Parser, Subcommand};
use keygrade::config::InputPaths;
use std::process;
use tracing::error;
use tracing_subscriber::filter::LevelFilter;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    paths: InputPaths,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Grade every layout against every language
    Grade(cmd::grade::GradeArgs),
    /// Parse all inputs and report data problems without grading
    Check(cmd::check::CheckArgs),
    /// Per-bigram cost breakdown for one layout and language
    Costs(cmd::costs::CostsArgs),
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Grade(args) => cmd::grade::run(args, &cli.paths),
        Commands::Check(args) => cmd::check::run(args, &cli.paths),
        Commands::Costs(args) => cmd::costs::run(args, &cli.paths),
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}
