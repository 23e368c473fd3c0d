// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Vector-space model: sparse term vectors and their cosine.
//!
//! A [`TermVector`] maps each distinct token to a count. In frequency mode the count
//! is the number of occurrences; in binary mode it is 1 for every token present, so
//! only the *set* of tokens matters.
//!
//! The cosine runs over the union of both key sets, where a token missing from one
//! side is a zero coordinate there. The union is never built: a missing key adds
//! nothing to the dot product, and each norm only needs its own keys.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

use crate::contracts::check_cosine_range;
use crate::error::{Result, Side, SimilarityError};

/// How repeated tokens are weighted when a vector is built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weighting {
    /// Count every occurrence.
    #[default]
    Frequency,
    /// 1 if the token occurs at all.
    Binary,
}

/// Sparse term vector: token -> non-negative count.
///
/// Immutable once built. Tokens are taken as given; no case folding, stemming or
/// splitting happens here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermVector {
    weighting: Weighting,
    counts: HashMap<String, u64>,
}

impl TermVector {
    /// Build a vector from a token sequence.
    ///
    /// # Example
    /// ```
    /// use simile::{TermVector, Weighting};
    ///
    /// let v = TermVector::build(["perth", "perth", "jasna"], Weighting::Frequency);
    /// assert_eq!(v.get("perth"), 2);
    ///
    /// let b = TermVector::build(["perth", "perth", "jasna"], Weighting::Binary);
    /// assert_eq!(b.get("perth"), 1);
    /// ```
    pub fn build<I, S>(tokens: I, weighting: Weighting) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts: HashMap<String, u64> = HashMap::new();
        for token in tokens {
            let token = token.as_ref();
            match weighting {
                Weighting::Frequency => {
                    if let Some(count) = counts.get_mut(token) {
                        *count += 1;
                    } else {
                        counts.insert(token.to_string(), 1);
                    }
                }
                Weighting::Binary => {
                    if !counts.contains_key(token) {
                        counts.insert(token.to_string(), 1);
                    }
                }
            }
        }
        tracing::trace!(terms = counts.len(), ?weighting, "built term vector");
        Self { weighting, counts }
    }

    pub fn weighting(&self) -> Weighting {
        self.weighting
    }

    /// Count for `token`, 0 when absent.
    pub fn get(&self, token: &str) -> u64 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts (token occurrences in frequency mode, distinct tokens in
    /// binary mode).
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Tokens and counts, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.counts.iter().map(|(token, &count)| (token.as_str(), count))
    }

    /// Dot product over the union of keys.
    ///
    /// Iterates the smaller vector and probes the larger one.
    pub fn dot(&self, other: &TermVector) -> f64 {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .counts
            .iter()
            .filter_map(|(token, &count)| {
                large
                    .counts
                    .get(token)
                    .map(|&other_count| count as f64 * other_count as f64)
            })
            .sum()
    }

    /// Euclidean norm.
    pub fn norm(&self) -> f64 {
        self.counts
            .values()
            .map(|&count| {
                let c = count as f64;
                c * c
            })
            .sum::<f64>()
            .sqrt()
    }

    /// Cosine similarity with `other`. See [`cosine_similarity`].
    pub fn cosine(&self, other: &TermVector) -> Result<f64> {
        cosine_similarity(self, other)
    }

    /// Dense coordinates of both vectors over their sorted key union.
    ///
    /// Returns `(keys, coords_a, coords_b)` with `coords_x[i] = x.get(keys[i])`.
    /// Meant for display and for checking the sparse path; the cosine itself never
    /// builds these.
    pub fn aligned<'a>(
        a: &'a TermVector,
        b: &'a TermVector,
    ) -> (Vec<&'a str>, Vec<u64>, Vec<u64>) {
        let keys: Vec<&str> = a
            .counts
            .keys()
            .chain(b.counts.keys())
            .map(String::as_str)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let coords_a = keys.iter().map(|k| a.get(k)).collect();
        let coords_b = keys.iter().map(|k| b.get(k)).collect();
        (keys, coords_a, coords_b)
    }
}

impl<S: AsRef<str>> FromIterator<S> for TermVector {
    /// Frequency-weighted vector from tokens.
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        TermVector::build(iter, Weighting::Frequency)
    }
}

/// Build a term vector: frequency counts, or presence only when `binary` is set.
///
/// # Example
/// ```
/// use simile::build_term_vector;
///
/// let v = build_term_vector(&["a", "b", "a"], false);
/// assert_eq!(v.get("a"), 2);
/// assert_eq!(build_term_vector(&["a", "b", "a"], true).get("a"), 1);
/// ```
pub fn build_term_vector<I, S>(tokens: I, binary: bool) -> TermVector
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let weighting = if binary {
        Weighting::Binary
    } else {
        Weighting::Frequency
    };
    TermVector::build(tokens, weighting)
}

/// Cosine of the angle between two term vectors: `dot(a, b) / (|a| * |b|)`.
///
/// Always in `[0, 1]`: counts are non-negative, and the quotient is clamped so
/// rounding never lands above 1. Vectors with no common token score exactly 0.
///
/// # Errors
/// [`SimilarityError::EmptyVector`] when either vector has zero magnitude (it was
/// built from no tokens). The left side is reported when both are empty.
///
/// # Example
/// ```
/// use simile::{build_term_vector, cosine_similarity};
///
/// let a = build_term_vector(["perth", "perth", "jasna"], false);
/// let b = build_term_vector(["perth", "jasna", "jasna"], false);
/// assert!((cosine_similarity(&a, &b).unwrap() - 0.8).abs() < 1e-12);
/// ```
pub fn cosine_similarity(a: &TermVector, b: &TermVector) -> Result<f64> {
    let norm_a = a.norm();
    if norm_a == 0.0 {
        tracing::debug!("cosine similarity with an empty left vector");
        return Err(SimilarityError::EmptyVector { side: Side::Left });
    }
    let norm_b = b.norm();
    if norm_b == 0.0 {
        tracing::debug!("cosine similarity with an empty right vector");
        return Err(SimilarityError::EmptyVector { side: Side::Right });
    }

    // A vector against itself can round to 1 + ulp
    let cosine = (a.dot(b) / (norm_a * norm_b)).min(1.0);
    check_cosine_range(cosine);
    Ok(cosine)
}
