// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the simile command-line interface.
//!
//! Four subcommands, one per score: `distance` for a single edit distance, `words`
//! for the word alignment, `cosine` for two texts as term vectors, and `vector` to
//! look at the term vector of one text. Any text argument written as `@path` is
//! read from that file, and `@-` reads stdin.

pub mod display;

use clap::{ArgAction, Parser, Subcommand};
use simile::Metric;

#[derive(Parser)]
#[command(
    name = "simile",
    about = "Edit distance, word alignment and cosine similarity between texts",
    version
)]
pub struct Cli {
    /// Print results as a JSON object
    #[arg(long, global = true)]
    pub json: bool,

    /// More log output on stderr (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Edit distance between two strings
    Distance {
        /// First string (or @file)
        a: String,

        /// Second string (or @file)
        b: String,

        /// Distance to compute: levenshtein (lev) or damerau-levenshtein (damerau)
        #[arg(short, long, default_value = "levenshtein")]
        metric: Metric,
    },

    /// Mean best-match word distance from B's words to A's words (0 = same words)
    Words {
        /// First text (or @file)
        a: String,

        /// Second text (or @file)
        b: String,

        /// Distance used between single words
        #[arg(short, long, default_value = "levenshtein")]
        metric: Metric,
    },

    /// Cosine similarity of the whitespace-separated tokens of two texts
    Cosine {
        /// First text (or @file)
        a: String,

        /// Second text (or @file)
        b: String,

        /// Count each distinct token once
        #[arg(long)]
        binary: bool,
    },

    /// Show the term vector of a text
    Vector {
        /// Text (or @file)
        text: String,

        /// Count each distinct token once
        #[arg(long)]
        binary: bool,
    },
}
