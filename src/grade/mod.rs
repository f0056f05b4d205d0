#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Clarity/conciseness heuristic evaluator.
pub mod clarity;
/// Report-structure completeness evaluator.
pub mod completeness;
/// Rubric configuration types.
pub mod criteria;
/// Feedback transcript and overview table assembly.
pub mod feedback;
/// Fuzzy keyword matching and logic scoring.
pub mod matcher;
/// Shared grade and result types.
pub mod results;

use itertools::Itertools;

pub use clarity::evaluate_clarity;
pub use completeness::evaluate_completeness;
pub use criteria::{ForbiddenMatch, GradingCriteria};
pub use feedback::summary_table;
pub use matcher::{LogicOutcome, matches, score_logic};
pub use results::{Grade, GradingResult, HeuristicOutcome};

/// Grades one answer against a rubric.
///
/// Runs logic scoring, both heuristic evaluators, scales the heuristic
/// grades against the criteria's maxima, and assembles the feedback
/// transcript. Pure over its arguments: no I/O, no shared state, and
/// identical inputs always produce an identical result, so concurrent
/// callers need no coordination.
pub fn grade_answer(answer_text: &str, criteria: &GradingCriteria) -> GradingResult {
    let logic = score_logic(answer_text, criteria);
    let clarity = evaluate_clarity(answer_text);
    let completeness = evaluate_completeness(answer_text);

    let clarity_points = clarity.grade.scale(criteria.max_clarity_score);
    let completeness_points = completeness.grade.scale(criteria.max_completeness_score);
    let total_score = logic.score + clarity_points + completeness_points;

    let missing_keywords: Vec<String> = criteria
        .required_keywords
        .iter()
        .filter(|k| !logic.matches.iter().any(|(m, _)| m == *k))
        .cloned()
        .unique()
        .collect();

    let feedback = feedback::transcript(
        criteria,
        &logic,
        &missing_keywords,
        &clarity,
        clarity_points,
        &completeness,
        completeness_points,
        total_score,
    );

    tracing::info!(
        "Graded answer: {:.1}/{:.1} (logic {:.1}, clarity {}, completeness {})",
        total_score,
        criteria.max_total(),
        logic.score,
        clarity.grade,
        completeness.grade
    );

    GradingResult {
        logic_score: logic.score,
        clarity_grade: clarity.grade,
        completeness_grade: completeness.grade,
        clarity_points,
        completeness_points,
        total_score,
        feedback,
        keyword_matches: logic.matches.into_iter().collect(),
        missing_keywords,
        forbidden_found: logic.forbidden_found,
    }
}
