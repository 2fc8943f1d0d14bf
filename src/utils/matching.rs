use crate::errors::AutocompleteError;
use regex::Regex;
use serde::Serialize;

// Anything that is not a letter or digit may precede a word.
const BOUNDARY: &str = r"[^\p{L}\p{N}]";

/// How a candidate is tested against the part of the pattern in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchRule {
    /// The candidate must literally begin with the pattern prefix.
    Prefix,
    /// Case-insensitive; the fragment may begin any word of the candidate,
    /// and words of the pattern may appear in any order.
    WordStart,
}

#[derive(Debug)]
pub enum Filter {
    Prefix(String),
    Pattern(Regex),
}

impl Filter {
    pub fn accepts(&self, candidate: &str) -> bool {
        match self {
            Filter::Prefix(prefix) => candidate.starts_with(prefix.as_str()),
            Filter::Pattern(regex) => regex.is_match(candidate),
        }
    }
}

fn compile(source: String) -> Result<Filter, AutocompleteError> {
    Regex::new(&source).map(Filter::Pattern).map_err(|err| {
        AutocompleteError::internal(format!("Failed to build match expression: {}", err))
    })
}

impl MatchRule {
    /// Filter for the partially typed `fragment` following the already
    /// `committed` part of the pattern.
    pub fn fragment(self, committed: &str, fragment: &str) -> Result<Filter, AutocompleteError> {
        match self {
            MatchRule::Prefix => Ok(Filter::Prefix(format!("{}{}", committed, fragment))),
            MatchRule::WordStart => compile(format!(
                "(?i)(^|{}){}",
                BOUNDARY,
                regex::escape(fragment)
            )),
        }
    }

    /// Filter requiring `word` to be present in full, ended by `separator` for
    /// `Prefix` or by any word boundary for `WordStart`.
    pub fn whole_word(
        self,
        committed: &str,
        word: &str,
        separator: &str,
    ) -> Result<Filter, AutocompleteError> {
        match self {
            MatchRule::Prefix => Ok(Filter::Prefix(format!("{}{}{}", committed, word, separator))),
            MatchRule::WordStart => compile(format!(
                "(?i)(^|{b}){w}({b}|$)",
                b = BOUNDARY,
                w = regex::escape(word)
            )),
        }
    }
}
