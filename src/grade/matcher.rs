#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use crate::{
    constants::{
        FORBIDDEN_TERM_PENALTY, FUZZY_MATCH_RATIO, MIN_FUZZY_KEYWORD_LEN, MIN_FUZZY_MATCHED_CHARS,
    },
    grade::criteria::{ForbiddenMatch, GradingCriteria},
    normalize::normalize,
};

#[derive(Clone, Debug)]
/// Outcome of scoring the logic/accuracy criterion for one answer.
pub struct LogicOutcome {
    /// Final score after the forbidden-term penalty, floored at zero
    pub score: f64,
    /// Matched keywords with occurrence counts, in criteria order.
    /// Keywords that only matched via the subsequence path carry a count
    /// of 1.
    pub matches: Vec<(String, usize)>,
    /// Forbidden terms detected, in criteria order
    pub forbidden_found: Vec<String>,
}

/// Decides whether `keyword` is present in `text`.
///
/// Both are normalized first. An exact substring match wins immediately.
/// Otherwise the keyword may match as an ordered character subsequence:
/// a single forward scan looks up each keyword character in turn, counting
/// hits, and the keyword matches when at least `max(3, floor(0.7 × len))`
/// of its characters were found in order. Normalized keywords shorter than
/// 3 characters never take the subsequence path, to avoid spurious hits on
/// short tokens.
pub fn matches(keyword: &str, text: &str) -> bool {
    matches_normalized(&normalize(keyword), &normalize(text))
}

/// [`matches`] on already-normalized inputs, so callers scoring a whole
/// rubric normalize the answer text once.
pub(crate) fn matches_normalized(norm_kw: &str, norm_text: &str) -> bool {
    if norm_text.contains(norm_kw) {
        return true;
    }

    let kw_chars: Vec<char> = norm_kw.chars().collect();
    if kw_chars.len() < MIN_FUZZY_KEYWORD_LEN {
        return false;
    }

    let required = MIN_FUZZY_MATCHED_CHARS.max((kw_chars.len() as f64 * FUZZY_MATCH_RATIO) as usize);
    let text_chars: Vec<char> = norm_text.chars().collect();

    let mut matched = 0usize;
    let mut cursor = 0usize;
    for &c in &kw_chars {
        // A miss neither aborts the scan nor moves the cursor.
        if let Some(offset) = text_chars[cursor..].iter().position(|&t| t == c) {
            matched += 1;
            cursor += offset + 1;
        }
    }

    matched >= required
}

/// Scores the logic/accuracy criterion.
///
/// Each required keyword is recorded with its non-overlapping occurrence
/// count when it appears verbatim in the normalized answer, or with a count
/// of 1 when only the subsequence matcher accepts it. The base score is
/// `max_logic_score × match_rate`; every forbidden term detected (per the
/// criteria's [`ForbiddenMatch`] policy) then subtracts 2 points, floored
/// at zero. Forbidden entries are checked one by one, so a term listed
/// twice is penalized twice. An empty keyword list yields a match rate of
/// 0 rather than a division error.
pub fn score_logic(answer_text: &str, criteria: &GradingCriteria) -> LogicOutcome {
    let norm_text = normalize(answer_text);

    let mut matches = Vec::new();
    for keyword in &criteria.required_keywords {
        if matches.iter().any(|(k, _)| k == keyword) {
            continue;
        }
        let norm_kw = normalize(keyword);
        let count = norm_text.matches(norm_kw.as_str()).count();
        if count > 0 {
            matches.push((keyword.clone(), count));
        } else if matches_normalized(&norm_kw, &norm_text) {
            matches.push((keyword.clone(), 1));
        }
    }

    let mut forbidden_found = Vec::new();
    for term in &criteria.forbidden_keywords {
        let norm_term = normalize(term);
        let hit = match criteria.forbidden_match {
            ForbiddenMatch::Exact => norm_text.contains(norm_term.as_str()),
            ForbiddenMatch::Fuzzy => matches_normalized(&norm_term, &norm_text),
        };
        if hit {
            forbidden_found.push(term.clone());
        }
    }

    let match_rate = if criteria.required_keywords.is_empty() {
        0.0
    } else {
        matches.len() as f64 / criteria.required_keywords.len() as f64
    };
    let base_score = criteria.max_logic_score * match_rate;
    let penalty = FORBIDDEN_TERM_PENALTY * forbidden_found.len() as f64;
    let score = (base_score - penalty).max(0.0);

    tracing::info!(
        "Logic score {:.1}/{}: {}/{} keywords matched, {} forbidden term(s)",
        score,
        criteria.max_logic_score,
        matches.len(),
        criteria.required_keywords.len(),
        forbidden_found.len()
    );

    LogicOutcome { score, matches, forbidden_found }
}

#[cfg(test)]
mod tests {
    use super::matches;

    #[test]
    fn exact_match_modulo_normalization() {
        assert!(matches("계통안정화용 ESS", "본문에 계통안정화용ess 설치 계획 포함"));
        assert!(matches("NWAs", "(nwas) 기술 적용"));
    }

    #[test]
    fn short_keywords_never_fuzzy_match() {
        // "ab" is absent verbatim; its chars appear in order, but the
        // subsequence path is closed to keywords under 3 characters.
        assert!(!matches("ab", "axxb"));
        assert!(matches("ab", "xxabxx"));
    }

    #[test]
    fn subsequence_match_tolerates_gaps() {
        // 4 of 5 characters in order, required = max(3, floor(3.5)) = 3
        assert!(matches("abcde", "a-b-c-d-x"));
        // Reversed text leaves only one in-order hit
        assert!(!matches("abcde", "edcba"));
    }
}
