//! "Did you mean" lookup for autocomplete type identifiers.
//!
//! Identifiers are compared with separators and the `AutoComplete` type-name
//! prefix removed, so `SpeciesList`, `species-list` and
//! `AutoCompleteSpeciesList` all land on `species_list`.

use crate::constants::registry::TYPE_PREFIX;

fn squash(value: &str) -> Vec<char> {
    let value = value.trim();
    let value = match value.get(..TYPE_PREFIX.len()) {
        Some(head) if head.eq_ignore_ascii_case(TYPE_PREFIX) => &value[TYPE_PREFIX.len()..],
        _ => value,
    };
    value
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Edit distance counting an adjacent transposition as one edit.
fn edit_distance(a: &[char], b: &[char]) -> usize {
    let mut rows = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for (i, row) in rows.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=b.len() {
        rows[0][j] = j;
    }
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            let mut best = (rows[i - 1][j] + 1)
                .min(rows[i][j - 1] + 1)
                .min(rows[i - 1][j - 1] + cost);
            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                best = best.min(rows[i - 2][j - 2] + 1);
            }
            rows[i][j] = best;
        }
    }
    rows[a.len()][b.len()]
}

fn score(input: &[char], known: &[char]) -> usize {
    if input.len() >= 3 && known.starts_with(input) && input != known {
        return 1;
    }
    edit_distance(input, known)
}

fn tolerance(input: &[char]) -> usize {
    input.len() / 4 + 1
}

/// Up to `limit` known identifiers close to `input`, best first.
pub fn did_you_mean(input: &str, known: &[String], limit: usize) -> Vec<String> {
    let wanted = squash(input);
    if wanted.is_empty() {
        return Vec::new();
    }
    let tolerance = tolerance(&wanted);

    let mut ranked: Vec<(usize, &String)> = known
        .iter()
        .map(|identifier| (score(&wanted, &squash(identifier)), identifier))
        .filter(|(distance, _)| *distance <= tolerance)
        .collect();
    ranked.sort();
    ranked.dedup_by(|a, b| a.1 == b.1);
    ranked
        .into_iter()
        .take(limit.max(1))
        .map(|(_, identifier)| identifier.clone())
        .collect()
}
