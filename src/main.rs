#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # oprgrade
//!
//! Command-line front end for the OPR answer auto-grader. Reads an answer
//! text file and a criteria JSON file, grades the answer, and prints either
//! a feedback transcript with an overview table or the structured result as
//! JSON.

use std::fs;

use anyhow::{Context, Result};
use bpaf::*;
use colored::Colorize;
use oprgrade::{GradingCriteria, grade_answer, summary_table};
use tracing::{Level, metadata::LevelFilter};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// Grade an answer file against a criteria file
    Grade {
        /// Path to the answer text file
        answer: String,
        /// Path to the criteria JSON file
        criteria: String,
        /// Emit JSON instead of a transcript
        json: bool,
        /// Skip the overview table after the transcript
        no_table: bool,
    },
    /// Print a starter criteria JSON template
    Template,
}

/// Build the command line parser
fn options() -> OptionParser<Cmd> {
    let criteria = short('c')
        .long("criteria")
        .help("Path to the criteria JSON file")
        .argument::<String>("PATH");
    let json = long("json")
        .help("Print the result as JSON instead of a transcript")
        .switch();
    let no_table = long("no-table")
        .help("Skip the overview table after the transcript")
        .switch();
    let answer = positional::<String>("ANSWER").help("Path to the answer text file");

    let grade = construct!(Cmd::Grade {
        criteria,
        json,
        no_table,
        answer,
    })
    .to_options()
    .command("grade")
    .help("Grade an answer file against a criteria file");

    let template = pure(Cmd::Template)
        .to_options()
        .command("template")
        .help("Print a starter criteria JSON template");

    let cmd = construct!([grade, template]);

    cmd.to_options()
        .descr("Auto-grader for OPR report-style answers")
}

fn main() -> Result<()> {
    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false);
    let filter_layer = LevelFilter::from_level(Level::INFO);
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    match options().run() {
        Cmd::Grade {
            answer,
            criteria,
            json,
            no_table,
        } => {
            let answer_text = fs::read_to_string(&answer)
                .with_context(|| format!("Could not read answer file {answer}"))?;
            let criteria_text = fs::read_to_string(&criteria)
                .with_context(|| format!("Could not read criteria file {criteria}"))?;
            let criteria: GradingCriteria = serde_json::from_str(&criteria_text)
                .with_context(|| format!("Could not parse criteria file {criteria}"))?;

            let result = grade_answer(&answer_text, &criteria);

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                for line in &result.feedback {
                    if line.starts_with("===") {
                        println!("{}", line.bold());
                    } else if line.trim_start().starts_with('!') {
                        println!("{}", line.yellow());
                    } else {
                        println!("{line}");
                    }
                }
                if !no_table {
                    println!();
                    println!("{}", summary_table(&result, &criteria));
                }
            }
        }
        Cmd::Template => {
            let template = GradingCriteria::builder()
                .required_keywords(vec![
                    "first required keyword".to_string(),
                    "second required keyword".to_string(),
                ])
                .forbidden_keywords(vec!["a forbidden term".to_string()])
                .build();
            println!("{}", serde_json::to_string_pretty(&template)?);
        }
    }

    Ok(())
}
