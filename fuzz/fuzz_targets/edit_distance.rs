// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the two edit distances.
//!
//! Checks the bounds every edit distance must respect, and that allowing
//! transpositions never makes a distance larger.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use simile::{damerau_levenshtein, damerau_levenshtein_str, levenshtein, levenshtein_str};

#[derive(Debug, Arbitrary)]
struct DistanceInput {
    a: String,
    b: String,
}

fuzz_target!(|input: DistanceInput| {
    // Cap lengths to avoid timeouts on the quadratic tables
    let a: String = input.a.chars().take(64).collect();
    let b: String = input.b.chars().take(64).collect();
    let len_a = a.chars().count() as u64;
    let len_b = b.chars().count() as u64;

    let lev = levenshtein_str(&a, &b);
    let dl = damerau_levenshtein_str(&a, &b);

    // INVARIANT 1: length difference <= distance <= longer length
    assert!(len_a.abs_diff(len_b) <= lev, "lev {} below length gap for {:?} / {:?}", lev, a, b);
    assert!(lev <= len_a.max(len_b), "lev {} above longer length for {:?} / {:?}", lev, a, b);

    // INVARIANT 2: Levenshtein is symmetric
    assert_eq!(lev, levenshtein_str(&b, &a), "asymmetric lev for {:?} / {:?}", a, b);

    // INVARIANT 3: transpositions only help
    assert!(dl <= lev, "damerau {} > lev {} for {:?} / {:?}", dl, lev, a, b);

    // INVARIANT 4: zero iff equal
    assert_eq!(lev == 0, a == b);
    assert_eq!(dl == 0, a == b);

    // INVARIANT 5: empty second operand costs one deletion per character
    assert_eq!(damerau_levenshtein_str(&a, ""), len_a);

    // INVARIANT 6: the generic versions agree when compared per char
    let ca: Vec<char> = a.chars().collect();
    let cb: Vec<char> = b.chars().collect();
    assert_eq!(levenshtein(&ca, &cb), lev);
    assert_eq!(damerau_levenshtein(&ca, &cb), dl);
});
