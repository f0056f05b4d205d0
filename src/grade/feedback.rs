#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use itertools::Itertools;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Panel, Style, object::Rows},
};

use crate::{
    constants::{FEEDBACK_KEYWORD_LIMIT, FORBIDDEN_TERM_PENALTY},
    grade::{
        criteria::GradingCriteria,
        matcher::LogicOutcome,
        results::{GradingResult, HeuristicOutcome},
    },
};

/// Assembles the line-oriented feedback transcript for one grading run.
///
/// The shape is stable and rendering-ready: a logic section with matched,
/// missing, and forbidden keyword detail, then the clarity and completeness
/// sections with their deduction reasons, then a separator and the final
/// total line.
#[allow(clippy::too_many_arguments)]
pub(crate) fn transcript(
    criteria: &GradingCriteria,
    logic: &LogicOutcome,
    missing: &[String],
    clarity: &HeuristicOutcome,
    clarity_points: f64,
    completeness: &HeuristicOutcome,
    completeness_points: f64,
    total_score: f64,
) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!(
        "=== Logic & Accuracy ({:.1}/{} pts) ===",
        logic.score, criteria.max_logic_score
    ));
    lines.push(format!(
        "Keyword matches: {}/{}",
        logic.matches.len(),
        criteria.required_keywords.len()
    ));
    if !logic.matches.is_empty() {
        lines.push(format!(
            "  - matched: {}",
            logic
                .matches
                .iter()
                .take(FEEDBACK_KEYWORD_LIMIT)
                .map(|(k, _)| k.as_str())
                .join(", ")
        ));
    }
    if !missing.is_empty() {
        lines.push(format!(
            "  - missing: {}",
            missing.iter().take(FEEDBACK_KEYWORD_LIMIT).join(", ")
        ));
    }
    if !logic.forbidden_found.is_empty() {
        lines.push(format!(
            "  ! Forbidden terms found (-{} pts): {}",
            FORBIDDEN_TERM_PENALTY * logic.forbidden_found.len() as f64,
            logic.forbidden_found.iter().join(", ")
        ));
    }

    lines.push(String::new());
    lines.push(format!(
        "=== Clarity & Conciseness (grade {}, {:.1}/{} pts) ===",
        clarity.grade, clarity_points, criteria.max_clarity_score
    ));
    lines.extend(clarity.reasons.iter().cloned());

    lines.push(String::new());
    lines.push(format!(
        "=== Completeness (grade {}, {:.1}/{} pts) ===",
        completeness.grade, completeness_points, criteria.max_completeness_score
    ));
    lines.extend(completeness.reasons.iter().cloned());

    lines.push(String::new());
    lines.push("=".repeat(50));
    lines.push(format!("Total: {:.1}/{} pts", total_score, criteria.max_total()));

    lines
}

#[derive(Tabled)]
/// One row of the grading-overview table.
struct CriterionRow {
    /// Name of the scoring criterion
    #[tabled(rename = "Criterion")]
    criterion: String,
    /// Grade letter, or `-` for the numeric logic criterion
    #[tabled(rename = "Grade")]
    grade: String,
    /// Points earned over points possible
    #[tabled(rename = "Score")]
    score: String,
}

/// Renders a compact per-criterion overview table for terminal display.
pub fn summary_table(result: &GradingResult, criteria: &GradingCriteria) -> String {
    let rows = vec![
        CriterionRow {
            criterion: "Logic & Accuracy".to_string(),
            grade: "-".to_string(),
            score: format!("{:.1}/{}", result.logic_score, criteria.max_logic_score),
        },
        CriterionRow {
            criterion: "Clarity & Conciseness".to_string(),
            grade: result.clarity_grade.to_string(),
            score: format!("{:.1}/{}", result.clarity_points, criteria.max_clarity_score),
        },
        CriterionRow {
            criterion: "Completeness".to_string(),
            grade: result.completeness_grade.to_string(),
            score: format!(
                "{:.1}/{}",
                result.completeness_points, criteria.max_completeness_score
            ),
        },
    ];

    Table::new(&rows)
        .with(Panel::header("Grading Overview"))
        .with(Panel::footer(format!(
            "Total: {:.1}/{:.1}",
            result.total_score,
            criteria.max_total()
        )))
        .with(
            Modify::new(Rows::first())
                .with(Alignment::center())
                .with(Alignment::center_vertical()),
        )
        .with(
            Modify::new(Rows::last())
                .with(Alignment::center())
                .with(Alignment::center_vertical()),
        )
        .with(Style::modern())
        .to_string()
}
