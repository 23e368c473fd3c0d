// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for term vectors and cosine similarity.
//!
//! Token lists come from a small vocabulary so overlaps are common.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use simile::{build_term_vector, cosine_similarity, Side, SimilarityError};

const VOCABULARY: [&str; 8] = ["perth", "jasna", "albert", "parik", "toth", "ana", "a", "é"];

#[derive(Debug, Arbitrary)]
struct VectorInput {
    a: Vec<u8>,
    b: Vec<u8>,
    binary: bool,
}

fn tokens(indices: &[u8]) -> Vec<&'static str> {
    indices
        .iter()
        .take(256)
        .map(|&i| VOCABULARY[usize::from(i) % VOCABULARY.len()])
        .collect()
}

fuzz_target!(|input: VectorInput| {
    let ta = tokens(&input.a);
    let tb = tokens(&input.b);
    let va = build_term_vector(&ta, input.binary);
    let vb = build_term_vector(&tb, input.binary);

    // Binary vectors only hold ones
    if input.binary {
        assert!(va.iter().all(|(_, count)| count == 1));
    } else {
        assert_eq!(va.total(), ta.len() as u64);
    }

    match cosine_similarity(&va, &vb) {
        Ok(cosine) => {
            assert!(!ta.is_empty() && !tb.is_empty());
            assert!((0.0..=1.0).contains(&cosine), "cosine {} out of range", cosine);
            let back = cosine_similarity(&vb, &va).unwrap();
            assert!((cosine - back).abs() < 1e-12, "asymmetric cosine");
        }
        Err(SimilarityError::EmptyVector { side: Side::Left }) => assert!(ta.is_empty()),
        Err(SimilarityError::EmptyVector { side: Side::Right }) => {
            assert!(!ta.is_empty() && tb.is_empty());
        }
        Err(e) => panic!("unexpected error {:?}", e),
    }
});
