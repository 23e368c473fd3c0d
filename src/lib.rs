// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! String and text similarity: edit distances, word alignment, cosine.
//!
//! Everything here is a pure function of its inputs. No I/O, no caches, no shared
//! state; every call allocates what it needs and returns a number.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────┐      ┌──────────────────────────┐
//! │          distance/           │      │          vsm.rs          │
//! │ levenshtein  damerau         │      │ TermVector (freq/binary) │
//! │      │          │            │      │ cosine_similarity        │
//! │      └──▶ DistanceMetric ──▶ │      └────────────┬─────────────┘
//! │           word_similarity    │                   │
//! └──────────────┬───────────────┘                   │
//!                ▼                                   ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  contracts.rs (debug-build bounds)    error.rs (typed Err)  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! | Module     | Scores                               | Range       |
//! |------------|--------------------------------------|-------------|
//! | `distance` | `levenshtein`, `damerau_levenshtein` | `0..=max(len)` |
//! | `distance` | `word_similarity`                    | `[0, inf)`, 0 = same words |
//! | `vsm`      | `cosine_similarity`                  | `[0, 1]`, 1 = same direction |
//!
//! # Usage
//!
//! ```
//! use simile::{build_term_vector, cosine_similarity, damerau_levenshtein_str,
//!              levenshtein_str, word_similarity, Metric};
//!
//! assert_eq!(levenshtein_str("maria", "marion"), 2);
//! assert_eq!(damerau_levenshtein_str("jump", "jupm"), 1);
//!
//! let score = word_similarity("Anna Toth", "Toth Ana", Metric::Levenshtein).unwrap();
//! assert_eq!(score, 0.5);
//!
//! let a = build_term_vector("to be or not to be".split_whitespace(), false);
//! let b = build_term_vector("to be is to do".split_whitespace(), false);
//! let cosine = cosine_similarity(&a, &b).unwrap();
//! assert!(cosine > 0.0 && cosine < 1.0);
//! ```

pub mod contracts;
pub mod distance;
mod error;
mod vsm;

pub use distance::{
    damerau_levenshtein, damerau_levenshtein_str, levenshtein, levenshtein_str,
    word_similarity, DistanceMetric, Metric, UnknownMetric,
};
pub use error::{Result, Side, SimilarityError};
pub use vsm::{build_term_vector, cosine_similarity, TermVector, Weighting};
