// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for word alignment over arbitrary text.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use simile::{word_similarity, Metric, SimilarityError};

#[derive(Debug, Arbitrary)]
struct WordsInput {
    a: String,
    b: String,
    transpositions: bool,
}

fuzz_target!(|input: WordsInput| {
    let a: String = input.a.chars().take(200).collect();
    let b: String = input.b.chars().take(200).collect();
    let metric = if input.transpositions {
        Metric::DamerauLevenshtein
    } else {
        Metric::Levenshtein
    };

    let no_words = a.split_whitespace().next().is_none() && b.split_whitespace().next().is_none();

    match word_similarity(&a, &b, metric) {
        Ok(score) => {
            assert!(!no_words, "score {} without any words", score);
            assert!(score.is_finite() && score >= 0.0, "bad score {} for {:?} / {:?}", score, a, b);

            // Every word in b is at most its own length away from the best match
            let longest = a
                .split_whitespace()
                .chain(b.split_whitespace())
                .map(|w| w.chars().count())
                .max()
                .unwrap_or(0);
            assert!(score <= longest as f64);
        }
        Err(SimilarityError::InvalidInput { .. }) => assert!(no_words),
        Err(e) => panic!("unexpected error {:?}", e),
    }

    // Identical texts align perfectly
    if !no_words {
        assert_eq!(word_similarity(&a, &a, metric), Ok(0.0));
    }
});
