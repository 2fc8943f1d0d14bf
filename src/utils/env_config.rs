use crate::constants::env::{DATABASE, LIMIT};
use crate::errors::AutocompleteError;
use crate::services::validation::Validation;
use std::env;
use std::path::PathBuf;

fn normalize_env_value(value: Option<String>) -> Option<String> {
    let raw = value?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let lowered = trimmed.to_lowercase();
    if lowered == "undefined" || lowered == "null" {
        return None;
    }
    Some(trimmed.to_string())
}

pub fn env_value(key: &str) -> Option<String> {
    normalize_env_value(env::var(key).ok())
}

/// The explicit limit wins; otherwise `AUTOCOMPLETE_LIMIT` must be set.
pub fn resolve_limit(explicit: Option<usize>) -> Result<usize, AutocompleteError> {
    let validation = Validation::new();
    if let Some(limit) = explicit {
        return validation.ensure_limit(limit);
    }
    let Some(raw) = env_value(LIMIT) else {
        return Err(AutocompleteError::configuration("No suggestion limit configured")
            .with_hint(format!("Pass --limit or set {}.", LIMIT)));
    };
    let parsed = raw.parse::<usize>().map_err(|_| {
        AutocompleteError::configuration(format!("{} must be a positive integer", LIMIT))
            .with_details(serde_json::json!({ "value": raw }))
    })?;
    validation.ensure_limit(parsed)
}

pub fn resolve_database_path(explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit.or_else(|| env_value(DATABASE).map(PathBuf::from))
}

#[cfg(test)]
mod tests {
    use super::normalize_env_value;

    #[test]
    fn placeholder_values_count_as_unset() {
        assert_eq!(normalize_env_value(None), None);
        assert_eq!(normalize_env_value(Some("  ".into())), None);
        assert_eq!(normalize_env_value(Some("null".into())), None);
        assert_eq!(normalize_env_value(Some("Undefined".into())), None);
        assert_eq!(normalize_env_value(Some(" 25 ".into())), Some("25".into()));
    }
}
