#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use crate::{
    constants::{HEURISTIC_BASE_SCORE, MAX_TITLE_LEN, MIN_CONTENT_LINES, SUB_ITEM_GLYPH},
    grade::results::{Grade, HeuristicOutcome},
};

/// Evaluates how completely an answer follows the report structure.
///
/// Works on the raw text. Starts at the base score of 85 and deducts for a
/// missing or over-long title (−5), no `1.`-style major section (−10), no
/// `□` sub-item line (−5), and fewer than 15 non-blank lines (−10). The
/// resulting score maps to a [`Grade`] through the fixed thresholds.
pub fn evaluate_completeness(answer_text: &str) -> HeuristicOutcome {
    let mut score = HEURISTIC_BASE_SCORE;
    let mut reasons = Vec::new();

    // The first line of an empty answer is the empty string, which fails
    // the lower bound of the title check.
    let first_line = answer_text.split('\n').next().unwrap_or("");
    let title_len = first_line.chars().count();
    if !(1..=MAX_TITLE_LEN).contains(&title_len) {
        score -= 5;
        reasons.push("Title unclear".to_string());
    }

    if !answer_text.split('\n').any(is_section_heading) {
        score -= 10;
        reasons.push("No 1/2/3-style major sections".to_string());
    }

    if !answer_text
        .split('\n')
        .any(|l| l.starts_with(SUB_ITEM_GLYPH))
    {
        score -= 5;
        reasons.push("Insufficient sub-item structure".to_string());
    }

    let content_lines = answer_text
        .split('\n')
        .filter(|l| !l.trim().is_empty())
        .count();
    if content_lines < MIN_CONTENT_LINES {
        score -= 10;
        reasons.push(format!("Not enough content ({content_lines} lines)"));
    }

    HeuristicOutcome { grade: Grade::from_score(score), reasons }
}

/// True when a line starts with a single digit 1-9 immediately followed by
/// a period, the report convention for a top-level section heading.
fn is_section_heading(line: &str) -> bool {
    let mut chars = line.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_digit() && c != '0')
        && chars.next() == Some('.')
}

#[cfg(test)]
mod tests {
    use super::is_section_heading;

    #[test]
    fn section_headings_anchor_at_line_start() {
        assert!(is_section_heading("1. Background"));
        assert!(is_section_heading("9."));
        assert!(!is_section_heading(" 1. indented"));
        assert!(!is_section_heading("0. zero"));
        assert!(!is_section_heading("10. two digits"));
        assert!(!is_section_heading("1) paren"));
    }
}
