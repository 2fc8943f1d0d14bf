#![allow(dead_code)]

use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use std::sync::Mutex;

pub static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

pub fn restore_env(key: &str, previous: Option<String>) {
    match previous {
        Some(value) => std::env::set_var(key, value),
        None => std::env::remove_var(key),
    }
}

pub fn shuffled(items: &[&str]) -> Vec<String> {
    let mut out: Vec<String> = items.iter().map(|s| s.to_string()).collect();
    out.shuffle(&mut rand::thread_rng());
    out
}

pub const STRING_LIST: &[&str] = &[
    "one two three four",
    "one two threee",
    "one two three",
    "one two ten",
    "one two four",
    "one two-thirty",
    "only this",
    "o p q",
    "o",
    "something",
    "else",
];

/// (limit, expected match count, expected refined string)
pub const STRING_EXAMPLES: &[(usize, usize, &str)] = &[
    (10, 9, "o"),
    (9, 9, "o"),
    (8, 7, "on"),
    (7, 7, "on"),
    (6, 6, "one"),
    (5, 5, "one two "),
    (4, 4, "one two t"),
    (3, 3, "one two th"),
    (2, 3, "one two three"),
];

pub const WORD_LIST: &[&str] = &[
    "one two shree four",
    "shreee two one",
    "two-shirty-one",
    "one two four",
    "twooo one shree one",
    "ten ten one twosies",
    "this is only five",
    "l m n o p q",
    "o",
    "something",
    "else",
];

pub const WORD_EXAMPLES: &[(usize, usize, &str)] = &[
    (10, 9, "o"),
    (9, 9, "o"),
    (8, 7, "on"),
    (7, 7, "on"),
    (6, 6, "one"),
    (5, 4, "one two "),
    (4, 4, "one two "),
    (3, 3, "one two s"),
    (2, 2, "one two shr"),
    (1, 2, "one two shree"),
];
