// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The seam between the word alignment and whatever distance drives it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{damerau_levenshtein_str, levenshtein_str};

/// A pairwise distance between two words.
///
/// Implemented for every `Fn(&str, &str) -> u64`, so plain functions and closures
/// can be passed wherever a metric is expected. Implementations must accept the
/// empty string: the word alignment pads with it.
///
/// Nothing beyond that is assumed. A user metric need not be symmetric or obey the
/// triangle inequality.
pub trait DistanceMetric {
    fn distance(&self, a: &str, b: &str) -> u64;
}

impl<F> DistanceMetric for F
where
    F: Fn(&str, &str) -> u64,
{
    #[inline]
    fn distance(&self, a: &str, b: &str) -> u64 {
        self(a, b)
    }
}

/// The built-in edit distances, selectable by name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Metric {
    #[default]
    Levenshtein,
    DamerauLevenshtein,
}

impl Metric {
    pub const ALL: [Metric; 2] = [Metric::Levenshtein, Metric::DamerauLevenshtein];

    pub fn name(self) -> &'static str {
        match self {
            Metric::Levenshtein => "levenshtein",
            Metric::DamerauLevenshtein => "damerau-levenshtein",
        }
    }
}

impl DistanceMetric for Metric {
    fn distance(&self, a: &str, b: &str) -> u64 {
        match self {
            Metric::Levenshtein => levenshtein_str(a, b),
            Metric::DamerauLevenshtein => damerau_levenshtein_str(a, b),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for a metric name that matches none of the built-ins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMetric(pub String);

impl fmt::Display for UnknownMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown metric '{}' (expected levenshtein, lev, damerau-levenshtein or damerau)",
            self.0
        )
    }
}

impl std::error::Error for UnknownMetric {}

impl FromStr for Metric {
    type Err = UnknownMetric;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "levenshtein" | "lev" => Ok(Metric::Levenshtein),
            "damerau-levenshtein" | "damerau_levenshtein" | "damerau" | "dl" => {
                Ok(Metric::DamerauLevenshtein)
            }
            _ => Err(UnknownMetric(s.to_string())),
        }
    }
}
