#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Canonicalizes text for keyword comparison.
///
/// Removes spaces, tabs, and newlines, strips the literal bracket characters
/// `(`, `)`, `[`, `]`, and lowercases what remains. Every comparison in the
/// matcher runs on normalized text, so matching is whitespace-, case-, and
/// bracket-insensitive.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !matches!(c, ' ' | '\t' | '\n' | '(' | ')' | '[' | ']'))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::normalize;

    #[test]
    fn strips_whitespace_and_brackets() {
        assert_eq!(normalize("a b\tc\nd"), "abcd");
        assert_eq!(normalize("(a)[b]"), "ab");
    }

    #[test]
    fn lowercases() {
        assert_eq!(normalize("NWAs WAMS"), "nwaswams");
    }

    #[test]
    fn keeps_hangul_intact() {
        assert_eq!(normalize("발전제약 해소"), "발전제약해소");
    }
}
