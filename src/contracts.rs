// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the numeric guarantees of every score.
//!
//! Each public operation calls into this module right before returning. The checks:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** while tests and fuzzers run
//! 3. State the bounds a caller is allowed to rely on
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function            | Guarantee                                         |
//! |------------------------------|---------------------------------------------------|
//! | `check_edit_distance_bounds` | `\|len(a) - len(b)\| <= d <= max(len(a), len(b))` |
//! | `check_transposition_bound`  | Damerau-Levenshtein never exceeds Levenshtein     |
//! | `check_word_score`           | word alignment score is finite and `>= 0`         |
//! | `check_cosine_range`         | cosine lies in `[0, 1]`                           |
//!
//! # Usage
//!
//! ```ignore
//! let d = levenshtein(a, b);
//! check_edit_distance_bounds(a.len(), b.len(), d);
//! ```

// ============================================================================
// EDIT DISTANCE CONTRACTS
// ============================================================================

/// Check that an edit distance lies within its trivial bounds.
///
/// The length difference is a lower bound (every surplus element needs an insert or
/// delete). The longer length is an upper bound (substitute the overlap, insert the
/// rest).
///
/// # Panics (debug builds only)
/// Panics if `distance` falls outside `[|len_a - len_b|, max(len_a, len_b)]`.
#[inline]
pub fn check_edit_distance_bounds(len_a: usize, len_b: usize, distance: u64) {
    let lower = len_a.abs_diff(len_b) as u64;
    let upper = len_a.max(len_b) as u64;
    debug_assert!(
        distance >= lower,
        "Contract violation: edit distance {} below length difference {}",
        distance,
        lower
    );
    debug_assert!(
        distance <= upper,
        "Contract violation: edit distance {} above longer length {}",
        distance,
        upper
    );
}

/// Check that allowing transpositions never made a distance larger.
///
/// # Panics (debug builds only)
/// Panics if `damerau > levenshtein`.
#[inline]
pub fn check_transposition_bound(damerau: u64, levenshtein: u64) {
    debug_assert!(
        damerau <= levenshtein,
        "Contract violation: damerau-levenshtein {} > levenshtein {}",
        damerau,
        levenshtein
    );
}

// ============================================================================
// SCORE CONTRACTS
// ============================================================================

/// Check that a word alignment score is a finite, non-negative mean.
///
/// # Panics (debug builds only)
/// Panics on NaN, infinity, or a negative score.
#[inline]
pub fn check_word_score(score: f64) {
    debug_assert!(
        score.is_finite(),
        "Contract violation: word alignment score {} is not finite",
        score
    );
    debug_assert!(
        score >= 0.0,
        "Contract violation: word alignment score {} is negative",
        score
    );
}

/// Check that a cosine over non-negative counts lies in `[0, 1]`.
///
/// Rounding can push the raw quotient past 1, so callers clamp before checking.
///
/// # Panics (debug builds only)
/// Panics on NaN or a value outside `[0, 1]`.
#[inline]
pub fn check_cosine_range(cosine: f64) {
    debug_assert!(
        !cosine.is_nan(),
        "Contract violation: cosine similarity is NaN"
    );
    debug_assert!(
        (0.0..=1.0).contains(&cosine),
        "Contract violation: cosine similarity {} outside [0, 1]",
        cosine
    );
}
