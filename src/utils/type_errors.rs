use crate::constants::limits::{MAX_LISTED_TYPES, MAX_SUGGESTED_TYPES};
use crate::constants::registry::TYPE_PREFIX;
use crate::errors::AutocompleteError;
use crate::utils::suggest::did_you_mean;
use crate::utils::text::camel_case;

fn known_types_hint(known_types: &[String]) -> Option<String> {
    if known_types.is_empty() {
        return None;
    }
    let listed = known_types
        .iter()
        .take(MAX_LISTED_TYPES)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    Some(match known_types.len().saturating_sub(MAX_LISTED_TYPES) {
        0 => format!("Use one of: {}.", listed),
        more => format!("Use one of: {} (and {} more).", listed, more),
    })
}

/// Configuration error for a type identifier no strategy is registered
/// under. The details carry the type name that was looked up.
pub fn unknown_type_error(identifier: &str, known_types: &[String]) -> AutocompleteError {
    let close = did_you_mean(identifier, known_types, MAX_SUGGESTED_TYPES);
    let guess = match close.as_slice() {
        [] => None,
        [only] => Some(format!("Did you mean '{}'?", only)),
        many => Some(format!("Did you mean one of: {}?", many.join(", "))),
    };
    let hint = guess
        .into_iter()
        .chain(known_types_hint(known_types))
        .collect::<Vec<_>>()
        .join(" ");

    let err = AutocompleteError::configuration(format!(
        "Invalid autocomplete type: '{}'",
        identifier
    ))
    .with_details(serde_json::json!({
        "requested_type": format!("{}{}", TYPE_PREFIX, camel_case(identifier.trim())),
        "known_types": known_types,
        "did_you_mean": close,
    }));
    if hint.is_empty() {
        err
    } else {
        err.with_hint(hint)
    }
}
