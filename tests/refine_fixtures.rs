mod common;
use common::{shuffled, STRING_EXAMPLES, STRING_LIST, WORD_EXAMPLES, WORD_LIST};

use autocomplete::resolve;
use autocomplete::utils::matching::MatchRule;
use autocomplete::utils::refine::{refine_by_char, refine_by_word, Granularity, Refinement};

fn show(refinement: &Refinement, list: &[&str]) -> String {
    let mut out = String::new();
    for entry in list {
        let mark = if refinement.matches.iter().any(|m| m == entry) {
            "+"
        } else {
            "X"
        };
        out.push_str(&format!("{} {:?}\n", mark, entry));
    }
    out
}

#[test]
fn refine_by_string_narrows_to_limit() {
    let pattern = "one two three";
    for rule in [MatchRule::Prefix, MatchRule::WordStart] {
        for &(limit, expected_matches, expected_string) in STRING_EXAMPLES {
            let out = refine_by_char(rule, pattern, shuffled(STRING_LIST), limit)
                .expect("refinement");
            assert!(
                out.refined == expected_string && out.matches.len() == expected_matches,
                "{:?} limit {}: refined {:?}, expected {:?}\n{}",
                rule,
                limit,
                out.refined,
                expected_string,
                show(&out, STRING_LIST)
            );
        }
    }
}

#[test]
fn refine_by_string_keeps_every_candidate_sharing_the_prefix() {
    let pattern = "one two three";
    for &(limit, _, _) in STRING_EXAMPLES {
        let out = refine_by_char(MatchRule::Prefix, pattern, shuffled(STRING_LIST), limit)
            .expect("refinement");
        assert!(pattern.starts_with(&out.refined));
        let expected: Vec<&str> = STRING_LIST
            .iter()
            .copied()
            .filter(|c| c.starts_with(&out.refined))
            .collect();
        assert_eq!(out.matches.len(), expected.len());
        for entry in &out.matches {
            assert!(expected.contains(&entry.as_str()), "unexpected {entry:?}");
        }
    }
}

#[test]
fn refine_by_word_allows_words_out_of_order() {
    let pattern = "one two shree";
    for &(limit, expected_matches, expected_string) in WORD_EXAMPLES {
        let out = refine_by_word(MatchRule::WordStart, pattern, shuffled(WORD_LIST), limit)
            .expect("refinement");
        assert!(
            out.refined == expected_string && out.matches.len() == expected_matches,
            "limit {}: refined {:?}, expected {:?}\n{}",
            limit,
            out.refined,
            expected_string,
            show(&out, WORD_LIST)
        );
    }
}

#[test]
fn refine_by_word_limit_five_drops_partial_words() {
    let out = refine_by_word(MatchRule::WordStart, "one two shree", shuffled(WORD_LIST), 5)
        .expect("refinement");
    let mut matches = out.matches.clone();
    matches.sort();
    assert_eq!(
        matches,
        vec![
            "one two four",
            "one two shree four",
            "shreee two one",
            "two-shirty-one",
        ]
    );
}

#[test]
fn registered_strategies_carry_their_granularity() {
    let mock = resolve("mock").expect("mock strategy");
    assert_eq!(mock.granularity(), Granularity::Character);
    let out = mock
        .granularity()
        .refine(mock.rule(), "one two three", shuffled(STRING_LIST), 6)
        .expect("refinement");
    assert_eq!(out.refined, "one");
    assert_eq!(out.matches.len(), 6);

    let location = resolve("location").expect("location strategy");
    let out = location
        .granularity()
        .refine(location.rule(), "one two shree", shuffled(WORD_LIST), 3)
        .expect("refinement");
    assert_eq!(out.refined, "one two s");
    assert_eq!(out.matches.len(), 3);
}
