//! Shared test utilities.
//!
//! Not every test binary uses every helper.
#![allow(dead_code)]

use simile::{build_term_vector, TermVector};

/// Tolerance for comparing floating-point scores.
pub const EPSILON: f64 = 1e-12;

/// Assert two scores are equal up to rounding.
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {} but got {} (diff {})",
        expected,
        actual,
        (actual - expected).abs()
    );
}

/// Term vector of the whitespace-separated words of `text`.
pub fn vector_of(text: &str, binary: bool) -> TermVector {
    build_term_vector(text.split_whitespace(), binary)
}

/// `s` with the characters at `i` and `i + 1` exchanged.
pub fn swap_adjacent(s: &str, i: usize) -> String {
    let mut chars: Vec<char> = s.chars().collect();
    chars.swap(i, i + 1);
    chars.into_iter().collect()
}

/// Character count, the unit every `_str` distance works in.
pub fn char_len(s: &str) -> u64 {
    s.chars().count() as u64
}
