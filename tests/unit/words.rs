//! Word alignment tests.

use crate::common::assert_close;
use simile::{
    damerau_levenshtein_str, levenshtein_str, word_similarity, Metric, SimilarityError,
};

#[test]
fn test_word_order_is_ignored() {
    assert_eq!(
        word_similarity("Ana Toth", "Toth Ana", levenshtein_str).unwrap(),
        0.0
    );
    assert_eq!(
        word_similarity("nuclear energy", "energy nuclear", levenshtein_str).unwrap(),
        0.0
    );
}

#[test]
fn test_known_scores() {
    assert_eq!(
        word_similarity("Anna Toth", "Toth Ana", levenshtein_str).unwrap(),
        0.5
    );
    assert_eq!(
        word_similarity("Anna Toth", "Toht Ana", levenshtein_str).unwrap(),
        1.5
    );
    assert_eq!(
        word_similarity("Anna Toth", "Toht Ana", damerau_levenshtein_str).unwrap(),
        1.0
    );
}

#[test]
fn test_enum_metric_matches_function() {
    for (a, b) in [
        ("Anna Toth", "Toht Ana"),
        ("the city of perth", "perth city"),
        ("x", "y z"),
    ] {
        assert_eq!(
            word_similarity(a, b, Metric::Levenshtein),
            word_similarity(a, b, levenshtein_str)
        );
        assert_eq!(
            word_similarity(a, b, Metric::DamerauLevenshtein),
            word_similarity(a, b, damerau_levenshtein_str)
        );
    }
}

#[test]
fn test_whitespace_runs_are_one_separator() {
    let spaced = word_similarity("  Anna \t Toth\n", "Toht   Ana", levenshtein_str).unwrap();
    assert_eq!(spaced, 1.5);
}

#[test]
fn test_not_symmetric_in_general() {
    // b's words each pick their nearest in a; both "ab" and "abc" pick "abc"
    let forward = word_similarity("abc xyz", "ab abc", levenshtein_str).unwrap();
    let backward = word_similarity("ab abc", "abc xyz", levenshtein_str).unwrap();
    assert_close(forward, 0.5);
    assert_close(backward, 1.5);
}

#[test]
fn test_both_empty_is_invalid_input() {
    let err = word_similarity("", "", levenshtein_str).unwrap_err();
    assert!(matches!(err, SimilarityError::InvalidInput { .. }));
    assert!(err.to_string().contains("no words"));
}

#[test]
fn test_metric_sees_padding_as_empty_string() {
    let seen_empty = std::cell::Cell::new(false);
    let probe = |a: &str, b: &str| {
        if a.is_empty() || b.is_empty() {
            seen_empty.set(true);
        }
        levenshtein_str(a, b)
    };
    word_similarity("one two three", "one", probe).unwrap();
    assert!(seen_empty.get());
}
