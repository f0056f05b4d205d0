//! # oprgrade
//!
//! A deterministic auto-grader for report-style (OPR) essay answers. Scores
//! an answer against a configurable rubric of required keywords, forbidden
//! terms, and structural conventions, and produces a numeric score with a
//! rendering-ready feedback transcript.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// A module defining the scoring constants used throughout
pub mod constants;
/// For all things related to grading
pub mod grade;
/// Text canonicalization applied before every keyword comparison
pub mod normalize;

pub use grade::{
    ForbiddenMatch, Grade, GradingCriteria, GradingResult, grade_answer, summary_table,
};

/// Grades an answer against a rubric and returns the full result.
///
/// Convenience re-entry point; equivalent to [`grade::grade_answer`].
pub fn grade(answer_text: &str, criteria: &GradingCriteria) -> GradingResult {
    grade::grade_answer(answer_text, criteria)
}
