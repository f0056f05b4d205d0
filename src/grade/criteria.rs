#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::constants::{
    DEFAULT_MAX_CLARITY_SCORE, DEFAULT_MAX_COMPLETENESS_SCORE, DEFAULT_MAX_LOGIC_SCORE,
};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
/// How forbidden terms are detected in an answer.
///
/// The grader historically shipped both behaviors; the policy is explicit
/// configuration so callers pick one instead of inheriting whichever
/// variant they happen to load.
pub enum ForbiddenMatch {
    #[default]
    /// Exact substring of the normalized text
    Exact,
    /// Same subsequence matcher used for required keywords
    Fuzzy,
}

#[derive(Serialize, Deserialize, TypedBuilder, Clone, Debug)]
#[builder(field_defaults(setter(into)))]
#[builder(doc)]
/// The rubric an answer is graded against.
///
/// Created once per grading request, never mutated. Deserializes from JSON
/// with defaults for everything except `required_keywords`, so a criteria
/// file only has to spell out what it changes.
pub struct GradingCriteria {
    /// Keywords the answer is expected to contain. Order is preserved in
    /// feedback; duplicates are allowed but pointless.
    pub required_keywords: Vec<String>,
    /// Terms whose presence deducts points
    #[builder(default)]
    #[serde(default)]
    pub forbidden_keywords: Vec<String>,
    /// Maximum score for the logic/accuracy criterion
    #[builder(default = DEFAULT_MAX_LOGIC_SCORE)]
    #[serde(default = "default_max_logic")]
    pub max_logic_score: f64,
    /// Maximum score for the clarity/conciseness criterion
    #[builder(default = DEFAULT_MAX_CLARITY_SCORE)]
    #[serde(default = "default_max_clarity")]
    pub max_clarity_score: f64,
    /// Maximum score for the completeness criterion
    #[builder(default = DEFAULT_MAX_COMPLETENESS_SCORE)]
    #[serde(default = "default_max_completeness")]
    pub max_completeness_score: f64,
    /// Detection policy for forbidden terms
    #[builder(default)]
    #[serde(default)]
    pub forbidden_match: ForbiddenMatch,
}

impl GradingCriteria {
    /// Sum of the three per-criterion maxima, i.e. the best possible total.
    pub fn max_total(&self) -> f64 {
        self.max_logic_score + self.max_clarity_score + self.max_completeness_score
    }
}

/// serde default for `max_logic_score`
fn default_max_logic() -> f64 {
    DEFAULT_MAX_LOGIC_SCORE
}

/// serde default for `max_clarity_score`
fn default_max_clarity() -> f64 {
    DEFAULT_MAX_CLARITY_SCORE
}

/// serde default for `max_completeness_score`
fn default_max_completeness() -> f64 {
    DEFAULT_MAX_COMPLETENESS_SCORE
}

#[cfg(test)]
mod tests {
    use super::{ForbiddenMatch, GradingCriteria};

    #[test]
    fn builder_fills_in_defaults() {
        let criteria = GradingCriteria::builder()
            .required_keywords(vec!["keyword".to_string()])
            .build();

        assert_eq!(criteria.max_logic_score, 40.0);
        assert_eq!(criteria.max_clarity_score, 30.0);
        assert_eq!(criteria.max_completeness_score, 30.0);
        assert_eq!(criteria.max_total(), 100.0);
        assert!(criteria.forbidden_keywords.is_empty());
        assert_eq!(criteria.forbidden_match, ForbiddenMatch::Exact);
    }

    #[test]
    fn deserializes_with_defaults() {
        let criteria: GradingCriteria =
            serde_json::from_str(r#"{"required_keywords": ["a", "b"]}"#).unwrap();

        assert_eq!(criteria.required_keywords.len(), 2);
        assert_eq!(criteria.max_logic_score, 40.0);
        assert_eq!(criteria.forbidden_match, ForbiddenMatch::Exact);
    }

    #[test]
    fn forbidden_match_policy_round_trips() {
        let criteria: GradingCriteria = serde_json::from_str(
            r#"{"required_keywords": [], "forbidden_match": "fuzzy"}"#,
        )
        .unwrap();
        assert_eq!(criteria.forbidden_match, ForbiddenMatch::Fuzzy);

        let text = serde_json::to_string(&criteria).unwrap();
        assert!(text.contains(r#""forbidden_match":"fuzzy""#));
    }
}
