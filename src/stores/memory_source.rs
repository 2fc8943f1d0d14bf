use super::{MatchSource, SourceError};
use crate::utils::matching::MatchRule;
use crate::utils::text::first_char;
use std::path::Path;

/// A fixed candidate list held in memory.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    entries: Vec<String>,
}

impl MemorySource {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// One candidate per line; blank lines are skipped.
    pub fn from_file(path: &Path) -> Result<Self, SourceError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(Self::new(
            raw.lines().filter(|line| !line.trim().is_empty()),
        ))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl MatchSource for MemorySource {
    /// Entries having a word that starts with the pattern's first character.
    fn fetch(&self, pattern: &str) -> Result<Vec<String>, SourceError> {
        let Some(letter) = first_char(pattern.trim_start()) else {
            return Ok(Vec::new());
        };
        let filter = MatchRule::WordStart
            .fragment("", letter)
            .map_err(|err| SourceError::Unavailable(err.message))?;
        Ok(self
            .entries
            .iter()
            .filter(|entry| filter.accepts(entry))
            .cloned()
            .collect())
    }
}
