//! Edit distance tests: known values, borders, and generic element types.

use crate::common::{char_len, swap_adjacent};
use simile::{damerau_levenshtein, damerau_levenshtein_str, levenshtein, levenshtein_str};

// ============================================================================
// LEVENSHTEIN
// ============================================================================

#[test]
fn test_levenshtein_known_values() {
    assert_eq!(levenshtein_str("anton", "ana"), 3);
    assert_eq!(levenshtein_str("anna", "ana"), 1);
    assert_eq!(levenshtein_str("alfred", "alfred"), 0);
    assert_eq!(levenshtein_str("tothi", "alfredKurz"), 10);
    assert_eq!(levenshtein_str("maria", "marion"), 2);
    assert_eq!(levenshtein_str("safety measures", "safety measures"), 0);
    assert_eq!(levenshtein_str("kitten", "sitting"), 3);
    assert_eq!(levenshtein_str("saturday", "sunday"), 3);
}

#[test]
fn test_levenshtein_empty_is_length_of_other() {
    for s in ["", "a", "perth", "the city of perth", "తెలుగు"] {
        assert_eq!(levenshtein_str("", s), char_len(s));
        assert_eq!(levenshtein_str(s, ""), char_len(s));
    }
}

#[test]
fn test_levenshtein_symmetric_on_uneven_lengths() {
    // Exercises the operand swap in both directions
    assert_eq!(levenshtein_str("ana", "anton"), levenshtein_str("anton", "ana"));
    assert_eq!(
        levenshtein_str("alfredKurz", "tothi"),
        levenshtein_str("tothi", "alfredKurz")
    );
}

#[test]
fn test_levenshtein_over_bytes_and_tokens() {
    assert_eq!(levenshtein(b"flaw", b"lawn"), 2);
    let a: Vec<&str> = "we hold these truths".split(' ').collect();
    let b: Vec<&str> = "we hold those truths".split(' ').collect();
    assert_eq!(levenshtein(&a, &b), 1);
}

// ============================================================================
// DAMERAU-LEVENSHTEIN
// ============================================================================

#[test]
fn test_damerau_known_values() {
    assert_eq!(damerau_levenshtein_str("jump", "jupm"), 1);
    assert_eq!(damerau_levenshtein_str("julius", "julius"), 0);
    assert_eq!(
        damerau_levenshtein_str("the city of perth", ""),
        "the city of perth".len() as u64
    );
    assert_eq!(
        damerau_levenshtein_str("the city of perth", "teh city of perht"),
        2
    );
}

#[test]
fn test_damerau_documented_examples() {
    assert_eq!(damerau_levenshtein(b"ba", b"abc"), 2);
    assert_eq!(damerau_levenshtein(b"fee", b"deed"), 2);
    let abcd: Vec<char> = "abcd".chars().collect();
    assert_eq!(damerau_levenshtein(&abcd, &['b', 'a', 'c', 'd', 'e']), 2);
}

#[test]
fn test_damerau_empty_second_operand() {
    for s in ["", "x", "julius", "the city of perth"] {
        assert_eq!(damerau_levenshtein_str(s, ""), char_len(s));
    }
}

#[test]
fn test_single_swap_costs_one_versus_two() {
    let word = "photography";
    for i in 0..word.len() - 1 {
        let swapped = swap_adjacent(word, i);
        if swapped == word {
            continue;
        }
        assert_eq!(damerau_levenshtein_str(word, &swapped), 1, "swap at {}", i);
        assert_eq!(levenshtein_str(word, &swapped), 2, "swap at {}", i);
    }
}

#[test]
fn test_damerau_only_adjacent_transpositions() {
    // "abc" -> "cba" swaps non-neighbours: two substitutions either way
    assert_eq!(damerau_levenshtein_str("abc", "cba"), 2);
    assert_eq!(levenshtein_str("abc", "cba"), 2);
}

#[test]
fn test_damerau_unicode() {
    assert_eq!(damerau_levenshtein_str("tōkyō", "tkōyō"), 1);
    assert_eq!(damerau_levenshtein_str("హరీష్", "హరీష్"), 0);
}
