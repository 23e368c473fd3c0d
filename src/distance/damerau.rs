// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Damerau-Levenshtein distance (adjacent transpositions), three rolling rows.
//!
//! Typos are mostly swapped neighbours: "teh", "jupm", "perht". Plain Levenshtein
//! charges two substitutions for each; this charges one transposition. Only
//! *adjacent* swaps are recognised, and no substring is edited twice (the "optimal
//! string alignment" restriction), so `"ca" -> "abc"` costs 3 here, not 2.
//!
//! # Row layout
//!
//! Conceptually a `(len(a) + 1) x (len(b) + 1)` table, but a cell only looks back
//! two rows, so three rows of `len(b) + 1` cells are kept. Each row stores the
//! table's leftmost column in its *last* slot:
//!
//! ```text
//!   row[0]     row[1]     ...  row[n-1]     row[n]
//!   D[x+1][1]  D[x+1][2]  ...  D[x+1][n]    D[x+1][0]
//! ```
//!
//! so `row[y - 1]` at `y = 0` wraps to `row[n]` and reads the left border with no
//! special case. Every backward read goes through [`back`], which does this wrap.

use crate::contracts::check_edit_distance_bounds;

/// Index `y - k` in a row of `width` cells, wrapping past zero to the end.
#[inline]
fn back(y: usize, k: usize, width: usize) -> usize {
    (y + width - k) % width
}

/// Minimum number of insertions, deletions, substitutions and adjacent
/// transpositions that turn `a` into `b`.
///
/// O(len(a) * len(b)) time, O(len(b)) space.
///
/// # Example
/// ```
/// use simile::damerau_levenshtein;
///
/// assert_eq!(damerau_levenshtein(b"ba", b"abc"), 2);
/// assert_eq!(damerau_levenshtein(b"fee", b"deed"), 2);
///
/// // Any sequence of comparable elements works
/// let tokens: Vec<char> = "abcd".chars().collect();
/// assert_eq!(damerau_levenshtein(&tokens, &['b', 'a', 'c', 'd', 'e']), 2);
/// ```
pub fn damerau_levenshtein<T: PartialEq>(a: &[T], b: &[T]) -> u64 {
    let n = b.len();
    let width = n + 1;

    // Left border D[0][0] = 0 sits in the last slot
    let mut thisrow: Vec<u64> = (1..=n as u64).chain(std::iter::once(0)).collect();
    let mut oneago: Vec<u64> = vec![0; width];
    let mut twoago: Vec<u64> = vec![0; width];

    for x in 0..a.len() {
        // twoago <- oneago <- thisrow, then reuse the oldest row as the new one
        std::mem::swap(&mut twoago, &mut oneago);
        std::mem::swap(&mut oneago, &mut thisrow);
        thisrow.fill(0);
        thisrow[n] = x as u64 + 1;

        for y in 0..n {
            let delcost = oneago[y] + 1;
            let addcost = thisrow[back(y, 1, width)] + 1;
            let subcost = oneago[back(y, 1, width)] + u64::from(a[x] != b[y]);
            thisrow[y] = delcost.min(addcost).min(subcost);

            if x > 0 && y > 0 && a[x] == b[y - 1] && a[x - 1] == b[y] && a[x] != b[y] {
                thisrow[y] = thisrow[y].min(twoago[back(y, 2, width)] + 1);
            }
        }
    }

    // D[len(a)][len(b)]; with b empty this wraps onto the left border, len(a)
    let distance = thisrow[back(n, 1, width)];
    check_edit_distance_bounds(a.len(), b.len(), distance);
    #[cfg(debug_assertions)]
    crate::contracts::check_transposition_bound(distance, super::levenshtein(a, b));
    distance
}

/// Damerau-Levenshtein distance between two strings, counted in `char`s.
///
/// # Example
/// ```
/// use simile::damerau_levenshtein_str;
///
/// assert_eq!(damerau_levenshtein_str("jump", "jupm"), 1);
/// assert_eq!(damerau_levenshtein_str("the city of perth", "teh city of perht"), 2);
/// ```
pub fn damerau_levenshtein_str(a: &str, b: &str) -> u64 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let distance = damerau_levenshtein(&a_chars, &b_chars);
    tracing::trace!(a, b, distance, "damerau_levenshtein");
    distance
}
