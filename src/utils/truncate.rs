use crate::constants::display::ELLIPSIS;
use crate::errors::AutocompleteError;
use crate::services::validation::Validation;

/// Keeps the first `limit` matches and appends a single ellipsis marker when
/// anything was cut. The result never exceeds `limit + 1` entries.
pub fn truncate_matches(
    matches: Vec<String>,
    limit: usize,
) -> Result<Vec<String>, AutocompleteError> {
    let limit = Validation::new().ensure_limit(limit)?;
    if matches.len() <= limit {
        return Ok(matches);
    }
    let mut out: Vec<String> = matches.into_iter().take(limit).collect();
    out.push(ELLIPSIS.to_string());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::truncate_matches;
    use crate::errors::ErrorKind;

    fn list() -> Vec<String> {
        (0..10).map(|i| format!("b{}", i)).collect()
    }

    #[test]
    fn list_within_limit_is_unchanged() {
        assert_eq!(truncate_matches(list(), 10).unwrap(), list());
        assert_eq!(truncate_matches(list(), 50).unwrap(), list());
        assert!(truncate_matches(Vec::new(), 1).unwrap().is_empty());
    }

    #[test]
    fn overflow_is_replaced_by_one_marker() {
        let mut expected = list();
        expected[9] = "...".to_string();
        assert_eq!(truncate_matches(list(), 9).unwrap(), expected);

        assert_eq!(
            truncate_matches(list(), 1).unwrap(),
            vec!["b0".to_string(), "...".to_string()]
        );
    }

    #[test]
    fn output_is_bounded_by_limit_plus_one() {
        for len in 0..8 {
            let input: Vec<String> = (0..len).map(|i| i.to_string()).collect();
            for limit in 1..8 {
                let out = truncate_matches(input.clone(), limit).unwrap();
                assert!(out.len() <= limit + 1);
                if len <= limit {
                    assert_eq!(out, input);
                } else {
                    assert_eq!(&out[..limit], &input[..limit]);
                    assert_eq!(out[limit], "...");
                }
            }
        }
    }

    #[test]
    fn zero_limit_is_rejected() {
        let err = truncate_matches(list(), 0).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidArgument);
    }
}
