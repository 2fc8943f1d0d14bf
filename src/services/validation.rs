use crate::constants::limits::MIN_LIMIT;
use crate::errors::AutocompleteError;
use once_cell::sync::Lazy;
use regex::Regex;

static STRATEGY_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z][a-z0-9]*(_[a-z0-9]+)*$").unwrap());
static SQL_IDENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

#[derive(Clone, Default)]
pub struct Validation;

impl Validation {
    pub fn new() -> Self {
        Self
    }

    pub fn ensure_limit(&self, limit: usize) -> Result<usize, AutocompleteError> {
        if limit < MIN_LIMIT {
            return Err(AutocompleteError::invalid_argument(format!(
                "Limit must be at least {}",
                MIN_LIMIT
            ))
            .with_details(serde_json::json!({ "limit": limit })));
        }
        Ok(limit)
    }

    pub fn ensure_strategy_identifier(&self, value: &str) -> Result<String, AutocompleteError> {
        let trimmed = value.trim();
        if !STRATEGY_ID_RE.is_match(trimmed) {
            return Err(AutocompleteError::configuration(format!(
                "Invalid autocomplete type: '{}'",
                value
            ))
            .with_hint("Types are lowercase words joined by underscores, e.g. species_list."));
        }
        Ok(trimmed.to_string())
    }

    pub fn ensure_sql_identifier(
        &self,
        value: &str,
        label: &str,
    ) -> Result<String, AutocompleteError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(AutocompleteError::invalid_argument(format!(
                "{} must be a non-empty string",
                label
            )));
        }
        if !SQL_IDENT_RE.is_match(trimmed) {
            return Err(AutocompleteError::invalid_argument(format!(
                "{} must contain only letters, digits and underscores",
                label
            )));
        }
        Ok(trimmed.to_string())
    }
}
