// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors for the few inputs where a score has no meaning.
//!
//! Edit distances are total: every pair of sequences has one. The two averaged or
//! normalized scores are not. A cosine needs two non-zero vectors, and a word
//! alignment needs at least one word to average over. Rather than hand back NaN
//! and let it leak into a ranking, both return a typed error and let the caller
//! pick the fallback score.

use std::fmt;

/// Result type alias for similarity operations.
pub type Result<T> = std::result::Result<T, SimilarityError>;

/// Which operand of a binary operation an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Error type for similarity computations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimilarityError {
    /// A term vector with zero magnitude was passed to cosine similarity.
    EmptyVector { side: Side },
    /// The input admits no score (e.g. no words on either side of a word alignment).
    InvalidInput { reason: &'static str },
}

impl fmt::Display for SimilarityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimilarityError::EmptyVector { side } => {
                write!(f, "{} term vector has zero magnitude", side)
            }
            SimilarityError::InvalidInput { reason } => {
                write!(f, "invalid input: {}", reason)
            }
        }
    }
}

impl std::error::Error for SimilarityError {}
