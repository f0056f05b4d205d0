use oprgrade::{
    grade::{matches, score_logic},
    GradingCriteria, ForbiddenMatch,
};

#[test]
fn verbatim_keywords_always_match() {
    assert!(matches("전력망 건설지연", "전력망 건설지연 대응전략 보고서"));
    assert!(matches("keyword", "the keyword is right here"));
}

#[test]
fn matching_ignores_whitespace_case_and_brackets() {
    assert!(matches("발전제약 해소", "재생e 계통연계 지연으로 발전제약해소 시급"));
    assert!(matches("NWAs", "nwas 기술 적용으로 송전능력 확보"));
    assert!(matches("ESS", "계통안정화용 (ess) 설치"));
    assert!(matches("[tab\tseparated]", "tabseparated"));
}

#[test]
fn short_keywords_require_exact_presence() {
    // Normalized length below 3 closes the subsequence path entirely.
    assert!(!matches("ab", "a--b"));
    assert!(!matches("(a)", "zzz")); // normalizes to "a", still exact-only
    assert!(matches("ab", "slab"));
}

#[test]
fn subsequence_match_needs_seventy_percent_in_order() {
    // "전력망혁신위원회" (8 chars) needs max(3, floor(5.6)) = 5 in-order hits.
    assert!(matches("전력망혁신위원회", "전력망의 혁신을 위한 위원회"));
    // Characters present but shuffled out of order fall short.
    assert!(!matches("abcdef", "fedcba"));
}

#[test]
fn exact_path_counts_occurrences_fuzzy_path_counts_one() {
    let criteria = GradingCriteria::builder()
        .required_keywords(vec!["grid plan".to_string(), "stability".to_string()])
        .build();

    // "grid plan" appears twice verbatim; "stability" only as a gapped
    // subsequence.
    let outcome = score_logic("grid plan first, grid plan second, sta-bili-ty", &criteria);

    assert_eq!(outcome.matches.len(), 2);
    assert_eq!(outcome.matches[0], ("grid plan".to_string(), 2));
    assert_eq!(outcome.matches[1], ("stability".to_string(), 1));
}

#[test]
fn duplicate_keywords_count_once_against_the_full_list() {
    let criteria = GradingCriteria::builder()
        .required_keywords(vec![
            "grid".to_string(),
            "grid".to_string(),
            "grid".to_string(),
            "absent-term-xyz".to_string(),
        ])
        .build();

    let outcome = score_logic("the grid holds", &criteria);

    // One unique match against a list of four: 40 * 1/4.
    assert_eq!(outcome.matches.len(), 1);
    assert_eq!(outcome.score, 10.0);
}

#[test]
fn duplicate_forbidden_entries_each_cost_two_points() {
    let criteria = GradingCriteria::builder()
        .required_keywords(vec!["grid".to_string()])
        .forbidden_keywords(vec!["hvdc".to_string(), "hvdc".to_string()])
        .build();

    let outcome = score_logic("the grid relies on hvdc links", &criteria);

    // Forbidden entries are checked per listing, not per unique term:
    // 40 * 1/1 - 2 * 2.
    assert_eq!(
        outcome.forbidden_found,
        vec!["hvdc".to_string(), "hvdc".to_string()]
    );
    assert_eq!(outcome.score, 36.0);
}

#[test]
fn forbidden_match_policy_changes_detection() {
    let answer = "this mentions h-v-d-c separately, never together";

    let exact = GradingCriteria::builder()
        .required_keywords(Vec::<String>::new())
        .forbidden_keywords(vec!["HVDC".to_string()])
        .build();
    assert!(score_logic(answer, &exact).forbidden_found.is_empty());

    let fuzzy = GradingCriteria::builder()
        .required_keywords(Vec::<String>::new())
        .forbidden_keywords(vec!["HVDC".to_string()])
        .forbidden_match(ForbiddenMatch::Fuzzy)
        .build();
    assert_eq!(
        score_logic(answer, &fuzzy).forbidden_found,
        vec!["HVDC".to_string()]
    );
}
