#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::collections::HashMap;

use itertools::Itertools;

use crate::{
    constants::{
        FEEDBACK_REASON_LIMIT, HEURISTIC_BASE_SCORE, KEYWORD_LISTING_RATIO, MAX_LINE_LEN,
        REPETITION_THRESHOLD, SHORT_LINE_LEN,
    },
    grade::results::{Grade, HeuristicOutcome},
};

/// Evaluates the clarity/conciseness of an answer.
///
/// Works on the raw text; whitespace and line structure are significant
/// here. Starts at the base score of 85 and applies three independent
/// deductions, each at most once: word repetition (−10), over-long lines
/// (−5), and keyword-listing style (−10). The resulting score maps to a
/// [`Grade`] through the fixed thresholds.
pub fn evaluate_clarity(answer_text: &str) -> HeuristicOutcome {
    let mut score = HEURISTIC_BASE_SCORE;
    let mut reasons = Vec::new();

    let repeated = repeated_tokens(answer_text);
    if !repeated.is_empty() {
        score -= 10;
        reasons.push(format!(
            "Repeated words found: {}",
            repeated.iter().take(FEEDBACK_REASON_LIMIT).join(", ")
        ));
    }

    let long_lines: Vec<usize> = answer_text
        .split('\n')
        .enumerate()
        .filter(|(_, line)| line.chars().filter(|&c| c != ' ').count() > MAX_LINE_LEN)
        .map(|(i, _)| i + 1)
        .collect();
    if !long_lines.is_empty() {
        score -= 5;
        reasons.push(format!(
            "Lines over {MAX_LINE_LEN} characters: {}",
            long_lines.iter().take(FEEDBACK_REASON_LIMIT).join(", ")
        ));
    }

    if is_keyword_listing(answer_text) {
        score -= 10;
        reasons.push("Appears to be a simple keyword list".to_string());
    }

    HeuristicOutcome { grade: Grade::from_score(score), reasons }
}

/// Tokens (runs of word characters, length >= 2) that occur at least 5
/// times, in order of first appearance.
fn repeated_tokens(text: &str) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut order: Vec<String> = Vec::new();

    for token in word_runs(text) {
        let count = counts.entry(token.clone()).or_insert(0);
        if *count == 0 {
            order.push(token);
        }
        *count += 1;
    }

    order.retain(|t| counts[t] >= REPETITION_THRESHOLD);
    order
}

/// Splits text into maximal runs of word characters (alphanumerics,
/// including Hangul, plus underscore) and keeps runs of length >= 2.
fn word_runs(text: &str) -> Vec<String> {
    let mut runs = Vec::new();
    let mut current = String::new();

    for c in text.chars() {
        if c.is_alphanumeric() || c == '_' {
            current.push(c);
        } else if !current.is_empty() {
            if current.chars().count() >= 2 {
                runs.push(std::mem::take(&mut current));
            } else {
                current.clear();
            }
        }
    }
    if current.chars().count() >= 2 {
        runs.push(current);
    }

    runs
}

/// True when more than half of the non-blank lines are shorter than 15
/// characters, the signature of a flat keyword list instead of prose.
fn is_keyword_listing(text: &str) -> bool {
    let lines: Vec<&str> = text
        .split('\n')
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    if lines.is_empty() {
        return false;
    }

    let short = lines
        .iter()
        .filter(|l| l.chars().count() < SHORT_LINE_LEN)
        .count();
    short as f64 / lines.len() as f64 > KEYWORD_LISTING_RATIO
}

#[cfg(test)]
mod tests {
    use super::{repeated_tokens, word_runs};

    #[test]
    fn word_runs_drop_single_characters() {
        assert_eq!(word_runs("a bb c-dd ee"), vec!["bb", "dd", "ee"]);
    }

    #[test]
    fn repeated_tokens_preserve_first_appearance_order() {
        let text = "bb aa bb aa bb aa bb aa bb aa";
        assert_eq!(repeated_tokens(text), vec!["bb", "aa"]);
    }

    #[test]
    fn four_occurrences_are_not_repetition() {
        assert!(repeated_tokens("ab ab ab ab").is_empty());
    }
}
