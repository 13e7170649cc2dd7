#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # tally
//!
//! Command line entry point for the autograder. `tally grade` runs the
//! rubric against a submission and writes the reports; `tally rubric`
//! prints the rubric itself for inspection.
//!
//! The process exits successfully for every computed score, including
//! zero. The only failure surfaced to the caller is a report that could
//! not be delivered.

use std::path::PathBuf;

use anyhow::Result;
use bpaf::*;
use dotenvy::dotenv;
use tally::{
    config::Config,
    grade::{self, GitClock},
    rubric,
};
use tracing::{Level, metadata::LevelFilter};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// Grade a submission
    Grade(PathBuf),
    /// Print the rubric
    Rubric,
}

/// Parse the command line arguments and return a `Cmd` enum
fn options() -> Cmd {
    /// parses the submission root
    fn root() -> impl Parser<PathBuf> {
        long("root")
            .help("Path to the submission root")
            .argument::<PathBuf>("PATH")
            .fallback(PathBuf::from("."))
    }

    let grade = construct!(Cmd::Grade(root()))
        .to_options()
        .command("grade")
        .help("Grade the submission and write the reports");

    let rubric = pure(Cmd::Rubric)
        .to_options()
        .command("rubric")
        .help("Prints a JSON description of the rubric");

    let cmd = construct!([grade, rubric]);

    cmd.to_options()
        .descr("Pattern-based autograder that generates feedback")
        .run()
}

fn main() -> Result<()> {
    dotenv().ok();

    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false);
    let filter_layer = LevelFilter::from_level(Level::INFO);
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    match options() {
        Cmd::Grade(root) => {
            let config = Config::from_env();
            let clock = GitClock::new(root.clone());
            let report = tally::grade_submission(&root, &config, &clock);

            grade::show_overview(&report);
            let delivered = grade::deliver(&report, &root.join(config.report_dir()))?;
            grade::emit_summary(&report, &delivered);
        }
        Cmd::Rubric => {
            let info = rubric::lab::web_lab().describe();
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
    }

    Ok(())
}
