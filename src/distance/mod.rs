// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distances, and a word-level alignment score built on top of them.
//!
//! Two distances here: plain Levenshtein (insert, delete, substitute) and
//! Damerau-Levenshtein, which also counts a swap of two neighbours as one edit.
//! Both work on any `&[T]` of comparable elements and have `&str` wrappers that
//! compare Unicode scalar values. The word alignment takes the distance as a
//! parameter through [`DistanceMetric`], so either one (or a caller's own) drives it.

mod damerau;
mod levenshtein;
mod metric;
mod words;

pub use damerau::*;
pub use levenshtein::*;
pub use metric::*;
pub use words::*;
