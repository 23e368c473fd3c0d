// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Word alignment: compare two texts word by word, ignoring word order.
//!
//! Each word of the second text is matched to its closest word in the first, and
//! the score is the mean of those best-match distances. "nuclear energy" and
//! "energy nuclear" score 0. A missing word is compared as `""`, so it costs its
//! full length.
//!
//! Driven by an edit distance this is a *dissimilarity*: 0 means every word found
//! an exact partner, larger is further apart.

use crate::contracts::check_word_score;
use crate::error::{Result, SimilarityError};

use super::DistanceMetric;

/// Mean best-match distance from the words of `b` to the words of `a`.
///
/// Both texts are split on whitespace and the shorter word list is padded with
/// empty strings to the length `n` of the longer one. For every word `w2` of the
/// padded `b`, take the minimum of `metric(w1, w2)` over the padded `a`; the result
/// is the sum of those minimums divided by `n`.
///
/// The construction is not symmetric in general: matches go from `b` into `a`, and
/// several words of `b` may pick the same word of `a`.
///
/// # Errors
/// [`SimilarityError::InvalidInput`] when neither text contains a word; there is
/// nothing to average over.
///
/// # Example
/// ```
/// use simile::{word_similarity, levenshtein_str, damerau_levenshtein_str};
///
/// assert_eq!(word_similarity("Ana Toth", "Toth Ana", levenshtein_str).unwrap(), 0.0);
/// assert_eq!(word_similarity("Anna Toth", "Toht Ana", levenshtein_str).unwrap(), 1.5);
/// assert_eq!(word_similarity("Anna Toth", "Toht Ana", damerau_levenshtein_str).unwrap(), 1.0);
/// ```
pub fn word_similarity<M: DistanceMetric>(a: &str, b: &str, metric: M) -> Result<f64> {
    let mut words_a: Vec<&str> = a.split_whitespace().collect();
    let mut words_b: Vec<&str> = b.split_whitespace().collect();

    let n = words_a.len().max(words_b.len());
    if n == 0 {
        tracing::debug!("word alignment over two texts without words");
        return Err(SimilarityError::InvalidInput {
            reason: "both texts contain no words",
        });
    }
    words_a.resize(n, "");
    words_b.resize(n, "");

    // words_a holds n >= 1 entries, so every fold sees at least one distance.
    // Summed as f64: a user metric may return values near u64::MAX.
    let total: f64 = words_b
        .iter()
        .map(|w2| {
            words_a
                .iter()
                .fold(u64::MAX, |best, w1| best.min(metric.distance(w1, w2)))
        })
        .map(|best| best as f64)
        .sum();

    let score = total / n as f64;
    tracing::trace!(words = n, total, score, "word alignment");
    check_word_score(score);
    Ok(score)
}
