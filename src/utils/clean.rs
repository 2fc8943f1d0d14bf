use crate::utils::text::first_line;

/// Reduces each candidate to its first line, trimmed.
pub fn clean_matches<S: AsRef<str>>(candidates: &[S]) -> Vec<String> {
    candidates
        .iter()
        .map(|candidate| first_line(candidate.as_ref()).trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::clean_matches;

    #[test]
    fn multiline_matches_keep_first_line_only() {
        let raw = [" line one \n line two\n  ", "good match", "  padded match  "];
        assert_eq!(
            clean_matches(&raw),
            vec!["line one", "good match", "padded match"]
        );
    }

    #[test]
    fn carriage_returns_count_as_line_breaks() {
        assert_eq!(clean_matches(&["Agaricus\r\nsecond"]), vec!["Agaricus"]);
        assert_eq!(clean_matches(&["\nhidden"]), vec![""]);
    }

    #[test]
    fn cleaning_is_idempotent() {
        let raw = [
            "  a \n b",
            "\t tabbed\t",
            "",
            "   \n   ",
            "trailing\r",
            "ñ unicode  ",
        ];
        let once = clean_matches(&raw);
        assert_eq!(clean_matches(&once), once);
    }
}
