#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Default maximum score for the logic/accuracy criterion
pub const DEFAULT_MAX_LOGIC_SCORE: f64 = 40.0;

/// Default maximum score for the clarity/conciseness criterion
pub const DEFAULT_MAX_CLARITY_SCORE: f64 = 30.0;

/// Default maximum score for the completeness criterion
pub const DEFAULT_MAX_COMPLETENESS_SCORE: f64 = 30.0;

/// Points subtracted per forbidden term detected in an answer
pub const FORBIDDEN_TERM_PENALTY: f64 = 2.0;

/// Base score both heuristic evaluators start from before deductions.
///
/// Sits below the `S` threshold on purpose: the heuristics only ever
/// deduct, so `S` stays reserved for a future positive-bonus mechanism.
pub const HEURISTIC_BASE_SCORE: i32 = 85;

/// Keywords whose normalized form is shorter than this never match via the
/// subsequence path, only as exact substrings
pub const MIN_FUZZY_KEYWORD_LEN: usize = 3;

/// Fraction of a keyword's characters that must appear, in order, in the
/// text for a subsequence match
pub const FUZZY_MATCH_RATIO: f64 = 0.7;

/// A subsequence match never requires fewer than this many character hits
pub const MIN_FUZZY_MATCHED_CHARS: usize = 3;

/// Tokens repeated at least this many times trigger the repetition deduction
pub const REPETITION_THRESHOLD: usize = 5;

/// Maximum line length in characters, measured after stripping spaces
pub const MAX_LINE_LEN: usize = 35;

/// Non-blank lines shorter than this many characters count as "short" for
/// the keyword-listing check
pub const SHORT_LINE_LEN: usize = 15;

/// An answer whose fraction of short lines exceeds this is flagged as a
/// keyword listing rather than prose
pub const KEYWORD_LISTING_RATIO: f64 = 0.5;

/// Maximum title length in characters (the first line of the answer)
pub const MAX_TITLE_LEN: usize = 21;

/// Minimum number of non-blank lines expected of a complete answer
pub const MIN_CONTENT_LINES: usize = 15;

/// Glyph that introduces a sub-item line in the report convention
pub const SUB_ITEM_GLYPH: char = '□';

/// At most this many matched or missing keywords are listed in the feedback
/// transcript
pub const FEEDBACK_KEYWORD_LIMIT: usize = 10;

/// At most this many offending tokens or line numbers appear in a single
/// deduction reason
pub const FEEDBACK_REASON_LIMIT: usize = 3;
