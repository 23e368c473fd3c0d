//! Reference oracles for differential testing.
//!
//! Simple, obviously-correct implementations with the full DP table in memory.
//! They serve as ground truth for the row-rolling versions in the crate.

use std::collections::HashMap;

/// Classic Levenshtein edit distance via the full Wagner-Fischer table.
pub fn oracle_levenshtein(s1: &str, s2: &str) -> u64 {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();
    let mut d = vec![vec![0u64; b.len() + 1]; a.len() + 1];

    for i in 0..=a.len() {
        d[i][0] = i as u64;
    }
    for j in 0..=b.len() {
        d[0][j] = j as u64;
    }
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = u64::from(a[i - 1] != b[j - 1]);
            d[i][j] = (d[i - 1][j] + 1) // deletion
                .min(d[i][j - 1] + 1) // insertion
                .min(d[i - 1][j - 1] + cost); // substitution
        }
    }

    d[a.len()][b.len()]
}

/// Optimal string alignment distance via the full table.
///
/// Levenshtein plus one extra case: a swap of two neighbouring characters costs 1.
pub fn oracle_osa(s1: &str, s2: &str) -> u64 {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();
    let mut d = vec![vec![0u64; b.len() + 1]; a.len() + 1];

    for i in 0..=a.len() {
        d[i][0] = i as u64;
    }
    for j in 0..=b.len() {
        d[0][j] = j as u64;
    }
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = u64::from(a[i - 1] != b[j - 1]);
            d[i][j] = (d[i - 1][j] + 1)
                .min(d[i][j - 1] + 1)
                .min(d[i - 1][j - 1] + cost);
            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                d[i][j] = d[i][j].min(d[i - 2][j - 2] + 1);
            }
        }
    }

    d[a.len()][b.len()]
}

/// Word alignment written out directly from its definition.
pub fn oracle_word_similarity(a: &str, b: &str, metric: fn(&str, &str) -> u64) -> Option<f64> {
    let mut wa: Vec<String> = a.split_whitespace().map(String::from).collect();
    let mut wb: Vec<String> = b.split_whitespace().map(String::from).collect();
    while wa.len() < wb.len() {
        wa.push(String::new());
    }
    while wb.len() < wa.len() {
        wb.push(String::new());
    }
    if wa.is_empty() {
        return None;
    }

    let mut total = 0u64;
    for w2 in &wb {
        let mut best = u64::MAX;
        for w1 in &wa {
            best = best.min(metric(w1, w2));
        }
        total += best;
    }
    Some(total as f64 / wa.len() as f64)
}

/// Cosine over an explicitly materialized key union.
pub fn oracle_cosine(a: &[String], b: &[String], binary: bool) -> Option<f64> {
    let count = |tokens: &[String]| {
        let mut m: HashMap<String, f64> = HashMap::new();
        for t in tokens {
            let e = m.entry(t.clone()).or_insert(0.0);
            *e = if binary { 1.0 } else { *e + 1.0 };
        }
        m
    };
    let ma = count(a);
    let mb = count(b);

    let mut union: Vec<&String> = ma.keys().chain(mb.keys()).collect();
    union.sort();
    union.dedup();

    let va: Vec<f64> = union.iter().map(|k| *ma.get(*k).unwrap_or(&0.0)).collect();
    let vb: Vec<f64> = union.iter().map(|k| *mb.get(*k).unwrap_or(&0.0)).collect();
    let dot: f64 = va.iter().zip(&vb).map(|(x, y)| x * y).sum();
    let na = va.iter().map(|x| x * x).sum::<f64>().sqrt();
    let nb = vb.iter().map(|x| x * x).sum::<f64>().sqrt();
    if na == 0.0 || nb == 0.0 {
        return None;
    }
    Some(dot / (na * nb))
}

// =============================================================================
// ORACLE SELF-CHECKS
// =============================================================================

#[test]
fn oracle_levenshtein_known_values() {
    assert_eq!(oracle_levenshtein("kitten", "sitting"), 3);
    assert_eq!(oracle_levenshtein("", "abc"), 3);
}

#[test]
fn oracle_osa_known_values() {
    assert_eq!(oracle_osa("ca", "abc"), 3);
    assert_eq!(oracle_osa("jump", "jupm"), 1);
}
