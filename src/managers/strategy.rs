use crate::utils::matching::MatchRule;
use crate::utils::refine::Granularity;
use serde::Serialize;
use std::collections::HashSet;

/// A named autocomplete flavour: how rough matches are ordered and how the
/// pattern is refined against them.
pub trait Strategy: Send + Sync {
    /// Registered type name, `AutoComplete` followed by the camel-cased type.
    fn type_name(&self) -> &'static str;

    fn granularity(&self) -> Granularity;

    fn rule(&self) -> MatchRule;

    /// Reorders or deduplicates cleaned matches before refinement.
    fn arrange(&self, matches: Vec<String>) -> Vec<String> {
        matches
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Arrangement {
    AsFetched,
    Unique,
    Sorted,
    GeneraFirst,
}

impl Arrangement {
    pub fn apply(self, matches: Vec<String>) -> Vec<String> {
        match self {
            Arrangement::AsFetched => matches,
            Arrangement::Unique => unique(matches),
            Arrangement::Sorted => {
                let mut matches = matches;
                matches.sort();
                matches.dedup();
                matches
            }
            Arrangement::GeneraFirst => {
                // Single-word names (genus and above) first, then alphabetical.
                let mut matches = matches;
                matches.sort_by(|a, b| {
                    a.contains(' ')
                        .cmp(&b.contains(' '))
                        .then_with(|| a.cmp(b))
                });
                matches.dedup();
                matches
            }
        }
    }
}

fn unique(matches: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    matches
        .into_iter()
        .filter(|value| seen.insert(value.clone()))
        .collect()
}

#[derive(Debug, Clone, Copy)]
pub struct BuiltinStrategy {
    pub type_name: &'static str,
    pub granularity: Granularity,
    pub rule: MatchRule,
    pub arrangement: Arrangement,
}

impl Strategy for BuiltinStrategy {
    fn type_name(&self) -> &'static str {
        self.type_name
    }

    fn granularity(&self) -> Granularity {
        self.granularity
    }

    fn rule(&self) -> MatchRule {
        self.rule
    }

    fn arrange(&self, matches: Vec<String>) -> Vec<String> {
        self.arrangement.apply(matches)
    }
}

const fn builtin(
    type_name: &'static str,
    granularity: Granularity,
    rule: MatchRule,
    arrangement: Arrangement,
) -> BuiltinStrategy {
    BuiltinStrategy {
        type_name,
        granularity,
        rule,
        arrangement,
    }
}

pub const BUILTIN_STRATEGIES: &[BuiltinStrategy] = &[
    builtin(
        "AutoCompleteName",
        Granularity::Character,
        MatchRule::WordStart,
        Arrangement::GeneraFirst,
    ),
    builtin(
        "AutoCompleteLocation",
        Granularity::Word,
        MatchRule::WordStart,
        Arrangement::Sorted,
    ),
    builtin(
        "AutoCompleteProject",
        Granularity::Word,
        MatchRule::WordStart,
        Arrangement::Unique,
    ),
    builtin(
        "AutoCompleteSpeciesList",
        Granularity::Word,
        MatchRule::WordStart,
        Arrangement::Unique,
    ),
    builtin(
        "AutoCompleteUser",
        Granularity::Word,
        MatchRule::WordStart,
        Arrangement::Unique,
    ),
    builtin(
        "AutoCompleteHerbarium",
        Granularity::Word,
        MatchRule::WordStart,
        Arrangement::Unique,
    ),
    builtin(
        "AutoCompleteMock",
        Granularity::Character,
        MatchRule::Prefix,
        Arrangement::AsFetched,
    ),
    builtin(
        "AutoCompleteMockByWord",
        Granularity::Word,
        MatchRule::Prefix,
        Arrangement::AsFetched,
    ),
];

#[cfg(test)]
mod tests {
    use super::Arrangement;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn genera_sort_before_binomials() {
        let out = Arrangement::GeneraFirst.apply(strings(&[
            "Agaricus campestris",
            "Amanita",
            "Agaricus",
            "Amanita",
            "Agaricales",
        ]));
        assert_eq!(
            out,
            strings(&["Agaricales", "Agaricus", "Amanita", "Agaricus campestris"])
        );
    }

    #[test]
    fn unique_keeps_first_occurrence_order() {
        let out = Arrangement::Unique.apply(strings(&["b", "a", "b", "c", "a"]));
        assert_eq!(out, strings(&["b", "a", "c"]));
        let out = Arrangement::Sorted.apply(strings(&["b", "a", "b"]));
        assert_eq!(out, strings(&["a", "b"]));
    }
}
