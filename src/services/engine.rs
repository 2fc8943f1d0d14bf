use crate::errors::AutocompleteError;
use crate::managers::Strategy;
use crate::services::logger::Logger;
use crate::services::registry::resolve;
use crate::services::validation::Validation;
use crate::stores::MatchSource;
use crate::utils::clean::clean_matches;
use crate::utils::refine::Refinement;
use crate::utils::truncate::truncate_matches;
use serde::Serialize;
use std::sync::Arc;

/// One suggestion request. Leading whitespace of the pattern is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pattern: String,
    limit: usize,
}

impl Query {
    pub fn new(pattern: impl Into<String>, limit: usize) -> Result<Self, AutocompleteError> {
        let limit = Validation::new().ensure_limit(limit)?;
        let pattern: String = pattern.into();
        Ok(Self {
            pattern: pattern.trim_start().to_string(),
            limit,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestions {
    /// The prefix of the pattern actually used to select `matches`.
    pub refined: String,
    pub matches: Vec<String>,
}

/// fetch -> clean -> arrange -> refine -> truncate.
#[derive(Clone)]
pub struct Engine {
    logger: Logger,
    strategy: Arc<dyn Strategy>,
    source: Arc<dyn MatchSource>,
}

impl Engine {
    pub fn new(logger: Logger, strategy: Arc<dyn Strategy>, source: Arc<dyn MatchSource>) -> Self {
        Self {
            logger: logger
                .child("engine")
                .with_field("type", strategy.type_name()),
            strategy,
            source,
        }
    }

    pub fn for_type(
        logger: Logger,
        identifier: &str,
        source: Arc<dyn MatchSource>,
    ) -> Result<Self, AutocompleteError> {
        Ok(Self::new(logger, resolve(identifier)?, source))
    }

    pub fn strategy(&self) -> &Arc<dyn Strategy> {
        &self.strategy
    }

    fn fetch(&self, pattern: &str) -> Result<Vec<String>, AutocompleteError> {
        let rough = self.source.fetch(pattern).map_err(|err| {
            self.logger.warn(
                "Match source failed",
                Some(&serde_json::json!({ "pattern": pattern, "error": err.to_string() })),
            );
            AutocompleteError::from(err)
        })?;
        Ok(self.strategy.arrange(clean_matches(&rough)))
    }

    fn refine(
        &self,
        pattern: &str,
        matches: Vec<String>,
        limit: usize,
    ) -> Result<Refinement, AutocompleteError> {
        self.strategy
            .granularity()
            .refine(self.strategy.rule(), pattern, matches, limit)
    }

    pub fn run(&self, query: &Query) -> Result<Suggestions, AutocompleteError> {
        let pattern = query.pattern();
        if pattern.is_empty() {
            return Ok(Suggestions {
                refined: String::new(),
                matches: Vec::new(),
            });
        }

        let cleaned = self.fetch(pattern)?;
        let rough_count = cleaned.len();
        let refinement = self.refine(pattern, cleaned, query.limit())?;
        let matched_count = refinement.matches.len();
        let matches = truncate_matches(refinement.matches, query.limit())?;

        self.logger.debug(
            "suggest",
            Some(&serde_json::json!({
                "pattern": pattern,
                "limit": query.limit(),
                "rough": rough_count,
                "refined": refinement.refined,
                "matched": matched_count,
                "returned": matches.len(),
            })),
        );

        Ok(Suggestions {
            refined: refinement.refined,
            matches,
        })
    }

    pub fn suggest(&self, pattern: &str, limit: usize) -> Result<Vec<String>, AutocompleteError> {
        let query = Query::new(pattern, limit)?;
        Ok(self.run(&query)?.matches)
    }

    /// The candidate equal to the pattern ignoring case, else the best
    /// refined match.
    pub fn first_match(&self, pattern: &str) -> Result<Option<String>, AutocompleteError> {
        let pattern = pattern.trim();
        if pattern.is_empty() {
            return Ok(None);
        }
        let cleaned = self.fetch(pattern)?;
        let wanted = pattern.to_lowercase();
        if let Some(exact) = cleaned.iter().find(|m| m.to_lowercase() == wanted) {
            return Ok(Some(exact.clone()));
        }
        let refinement = self.refine(pattern, cleaned, 1)?;
        Ok(refinement.matches.into_iter().next())
    }
}
