//! Prefix refinement.
//!
//! Given a pattern and a rough candidate list, commit to as few leading
//! characters of the pattern as needed to bring the candidate count within
//! the limit. Matches are narrowed step by step; the refined string is always
//! a prefix of the pattern. When even the full pattern leaves too many
//! candidates, the full pattern is returned with the over-limit list.

use crate::errors::AutocompleteError;
use crate::services::validation::Validation;
use crate::utils::matching::{Filter, MatchRule};
use crate::utils::text::{char_ends, word_spans};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Refinement {
    pub refined: String,
    pub matches: Vec<String>,
}

impl Refinement {
    fn new(refined: &str, matches: Vec<String>) -> Self {
        Self {
            refined: refined.to_string(),
            matches,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    Character,
    Word,
}

impl Granularity {
    pub fn refine(
        self,
        rule: MatchRule,
        pattern: &str,
        candidates: Vec<String>,
        limit: usize,
    ) -> Result<Refinement, AutocompleteError> {
        match self {
            Granularity::Character => refine_by_char(rule, pattern, candidates, limit),
            Granularity::Word => refine_by_word(rule, pattern, candidates, limit),
        }
    }
}

fn narrow(matches: &mut Vec<String>, filter: &Filter) {
    matches.retain(|candidate| filter.accepts(candidate));
}

/// Extends the prefix one character at a time.
pub fn refine_by_char(
    rule: MatchRule,
    pattern: &str,
    candidates: Vec<String>,
    limit: usize,
) -> Result<Refinement, AutocompleteError> {
    let limit = Validation::new().ensure_limit(limit)?;
    let mut matches = candidates;
    for end in char_ends(pattern) {
        narrow(&mut matches, &rule.fragment("", &pattern[..end])?);
        if matches.len() <= limit {
            return Ok(Refinement::new(&pattern[..end], matches));
        }
    }
    Ok(Refinement::new(pattern, matches))
}

/// Extends the prefix a whole word at a time, stepping through characters
/// only inside the word currently being typed. Whitespace before the first
/// word is stepped like any other character; whitespace after the last word
/// is committed together with it.
pub fn refine_by_word(
    rule: MatchRule,
    pattern: &str,
    candidates: Vec<String>,
    limit: usize,
) -> Result<Refinement, AutocompleteError> {
    let limit = Validation::new().ensure_limit(limit)?;
    let words = word_spans(pattern);
    let Some(&(first_start, _)) = words.first() else {
        return refine_by_char(rule, pattern, candidates, limit);
    };

    let mut matches = candidates;
    for end in char_ends(&pattern[..first_start]) {
        narrow(&mut matches, &rule.fragment("", &pattern[..end])?);
        if matches.len() <= limit {
            return Ok(Refinement::new(&pattern[..end], matches));
        }
    }

    for (idx, &(start, end)) in words.iter().enumerate() {
        let committed = &pattern[..start];
        let word = &pattern[start..end];
        for frag_end in char_ends(word) {
            narrow(&mut matches, &rule.fragment(committed, &word[..frag_end])?);
            if matches.len() <= limit {
                return Ok(Refinement::new(&pattern[..start + frag_end], matches));
            }
        }
        let separator_end = words
            .get(idx + 1)
            .map_or(pattern.len(), |&(next_start, _)| next_start);
        if separator_end == end {
            break;
        }
        narrow(
            &mut matches,
            &rule.whole_word(committed, word, &pattern[end..separator_end])?,
        );
        if matches.len() <= limit {
            return Ok(Refinement::new(&pattern[..separator_end], matches));
        }
    }
    Ok(Refinement::new(pattern, matches))
}
