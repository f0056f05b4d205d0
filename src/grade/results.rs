#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{collections::BTreeMap, fmt::Display};

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
/// An ordinal quality rating for a heuristic criterion.
///
/// Each variant is bound to a fixed multiplier used to scale the criterion's
/// maximum score into points.
pub enum Grade {
    /// Outstanding, full points
    S,
    /// Good, 85% of points
    A,
    /// Fair, 70% of points
    B,
    /// Weak, 55% of points
    C,
    /// Poor, 40% of points
    D,
}

impl Grade {
    /// Returns the fixed point multiplier for this grade.
    pub fn multiplier(&self) -> f64 {
        match self {
            Grade::S => 1.00,
            Grade::A => 0.85,
            Grade::B => 0.70,
            Grade::C => 0.55,
            Grade::D => 0.40,
        }
    }

    /// Scales a criterion's maximum score into points for this grade.
    pub fn scale(&self, max_points: f64) -> f64 {
        max_points * self.multiplier()
    }

    /// Maps a heuristic score to a grade.
    ///
    /// Thresholds: >= 90 is `S`, >= 80 is `A`, >= 70 is `B`, >= 60 is `C`,
    /// anything lower is `D`.
    pub fn from_score(score: i32) -> Self {
        match score {
            s if s >= 90 => Grade::S,
            s if s >= 80 => Grade::A,
            s if s >= 70 => Grade::B,
            s if s >= 60 => Grade::C,
            _ => Grade::D,
        }
    }
}

impl Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letter = match self {
            Grade::S => "S",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
        };
        write!(f, "{letter}")
    }
}

#[derive(Clone, Debug)]
/// Outcome of one heuristic evaluator (clarity or completeness).
pub struct HeuristicOutcome {
    /// Grade the evaluator settled on after deductions
    pub grade: Grade,
    /// One reason per deduction that fired, in check order. Empty when no
    /// deduction fired.
    pub reasons: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
/// The complete outcome of grading one answer.
///
/// Constructed exactly once per [`grade_answer`](crate::grade::grade_answer)
/// call and handed to a presentation layer. Every field is always present,
/// even when empty or zero, so downstream consumers (result panels, file
/// exporters) never have to probe for partial results.
pub struct GradingResult {
    /// Points earned on the logic/accuracy criterion, in `[0, max_logic_score]`
    pub logic_score: f64,
    /// Grade assigned by the clarity evaluator
    pub clarity_grade: Grade,
    /// Grade assigned by the completeness evaluator
    pub completeness_grade: Grade,
    /// `clarity_grade` scaled against `max_clarity_score`
    pub clarity_points: f64,
    /// `completeness_grade` scaled against `max_completeness_score`
    pub completeness_points: f64,
    /// Sum of the logic score and both scaled grades
    pub total_score: f64,
    /// Rendering-ready feedback transcript, in display order
    pub feedback: Vec<String>,
    /// Required keywords found in the answer, mapped to occurrence counts.
    /// Only entries with a count above zero appear. Fuzzy-only matches are
    /// recorded with a count of 1.
    pub keyword_matches: BTreeMap<String, usize>,
    /// Required keywords not found, in criteria order
    pub missing_keywords: Vec<String>,
    /// Forbidden terms detected in the answer, in criteria order
    pub forbidden_found: Vec<String>,
}
