// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Levenshtein distance with two rolling rows.
//!
//! The full DP table is `(len(a) + 1) x (len(b) + 1)`, but each row only reads the
//! row above it, so two rows of `len(b) + 1` cells are enough. The longer operand
//! drives the outer loop so the rows are as short as possible.

use crate::contracts::check_edit_distance_bounds;

/// Minimum number of single-element insertions, deletions and substitutions that
/// turn `a` into `b`.
///
/// Works on any slice of comparable elements: characters, tokens, byte strings.
///
/// # Example
/// ```
/// use simile::levenshtein;
///
/// assert_eq!(levenshtein(b"kitten", b"sitting"), 3);
/// assert_eq!(levenshtein(&["a", "rose", "is"], &["a", "rose"]), 1);
/// ```
pub fn levenshtein<T: PartialEq>(a: &[T], b: &[T]) -> u64 {
    // Symmetric, so keep the row over the shorter operand
    if a.len() < b.len() {
        return levenshtein(b, a);
    }
    if b.is_empty() {
        return a.len() as u64;
    }

    let mut previous_row: Vec<u64> = (0..=b.len() as u64).collect();
    let mut current_row: Vec<u64> = vec![0; b.len() + 1];

    for (i, c1) in a.iter().enumerate() {
        current_row[0] = i as u64 + 1;
        for (j, c2) in b.iter().enumerate() {
            // Rows are one cell longer than b, hence j + 1
            let insertion = previous_row[j + 1] + 1;
            let deletion = current_row[j] + 1;
            let substitution = previous_row[j] + u64::from(c1 != c2);
            current_row[j + 1] = insertion.min(deletion).min(substitution);
        }
        std::mem::swap(&mut previous_row, &mut current_row);
    }

    let distance = previous_row[b.len()];
    check_edit_distance_bounds(a.len(), b.len(), distance);
    distance
}

/// Levenshtein distance between two strings, counted in `char`s.
///
/// "café" and "cafe" are one substitution apart, not two byte edits.
///
/// # Example
/// ```
/// use simile::levenshtein_str;
///
/// assert_eq!(levenshtein_str("anton", "ana"), 3);
/// assert_eq!(levenshtein_str("café", "cafe"), 1);
/// ```
pub fn levenshtein_str(a: &str, b: &str) -> u64 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let distance = levenshtein(&a_chars, &b_chars);
    tracing::trace!(a, b, distance, "levenshtein");
    distance
}
