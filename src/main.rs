// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use tracing_subscriber::EnvFilter;

use simile::{
    build_term_vector, cosine_similarity, word_similarity, DistanceMetric, Metric, Weighting,
};

mod cli;
use cli::display::{
    cosine_value, distance_value, pad_right, row, section_bot, section_top, themed,
    word_score_value, GRAY,
};
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "simile=debug,warn",
        _ => "simile=trace,debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Distance { a, b, metric } => {
            let a = read_input(a)?;
            let b = read_input(b)?;
            print_distance(&a, &b, *metric, cli.json)
        }
        Commands::Words { a, b, metric } => {
            let a = read_input(a)?;
            let b = read_input(b)?;
            print_words(&a, &b, *metric, cli.json)
        }
        Commands::Cosine { a, b, binary } => {
            let a = read_input(a)?;
            let b = read_input(b)?;
            print_cosine(&a, &b, *binary, cli.json)
        }
        Commands::Vector { text, binary } => {
            let text = read_input(text)?;
            print_vector(&text, *binary, cli.json)
        }
    }
}

/// Resolve a text argument: `@path` reads a file, `@-` reads stdin, `@@...` is a
/// literal leading `@`, anything else is the text itself.
fn read_input(arg: &str) -> Result<String> {
    match arg.strip_prefix('@') {
        Some(rest) if rest.starts_with('@') => Ok(rest.to_string()),
        Some("-") => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("failed to read stdin")?;
            Ok(raw)
        }
        Some(path) => {
            tracing::debug!(path, "reading input file");
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path))
        }
        None => Ok(arg.to_string()),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let serialized = serde_json::to_string_pretty(value).context("failed to serialize result")?;
    println!("{}", serialized);
    Ok(())
}

fn print_distance(a: &str, b: &str, metric: Metric, json: bool) -> Result<()> {
    let distance = metric.distance(a, b);

    if json {
        return print_json(&serde_json::json!({
            "metric": metric,
            "a": a,
            "b": b,
            "distance": distance,
        }));
    }

    let longer = a.chars().count().max(b.chars().count());
    println!(
        "{}({:?}, {:?}) = {}",
        metric,
        a,
        b,
        distance_value(distance, longer)
    );
    Ok(())
}

fn print_words(a: &str, b: &str, metric: Metric, json: bool) -> Result<()> {
    let score = word_similarity(a, b, metric).context("word alignment failed")?;

    if json {
        return print_json(&serde_json::json!({
            "metric": metric,
            "a": a,
            "b": b,
            "score": score,
        }));
    }

    println!("words/{}({:?}, {:?}) = {}", metric, a, b, word_score_value(score));
    Ok(())
}

fn print_cosine(a: &str, b: &str, binary: bool, json: bool) -> Result<()> {
    let va = build_term_vector(a.split_whitespace(), binary);
    let vb = build_term_vector(b.split_whitespace(), binary);
    let cosine = cosine_similarity(&va, &vb).context("cosine similarity failed")?;

    if json {
        let shared = va.iter().filter(|(token, _)| vb.get(token) > 0).count();
        return print_json(&serde_json::json!({
            "weighting": va.weighting(),
            "terms_a": va.len(),
            "terms_b": vb.len(),
            "shared": shared,
            "cosine": cosine,
        }));
    }

    println!(
        "cosine/{} ({} vs {} terms) = {}",
        weighting_name(va.weighting()),
        va.len(),
        vb.len(),
        cosine_value(cosine)
    );
    Ok(())
}

#[derive(Serialize)]
struct VectorReport<'a> {
    weighting: Weighting,
    terms: usize,
    total: u64,
    norm: f64,
    counts: BTreeMap<&'a str, u64>,
}

fn print_vector(text: &str, binary: bool, json: bool) -> Result<()> {
    let vector = build_term_vector(text.split_whitespace(), binary);

    if json {
        return print_json(&VectorReport {
            weighting: vector.weighting(),
            terms: vector.len(),
            total: vector.total(),
            norm: vector.norm(),
            counts: vector.iter().collect(),
        });
    }

    // Highest count first, ties alphabetical
    let mut entries: Vec<(&str, u64)> = vector.iter().collect();
    entries.sort_by(|x, y| y.1.cmp(&x.1).then(x.0.cmp(y.0)));

    section_top(&format!(
        "TERM VECTOR ({})",
        weighting_name(vector.weighting())
    ));
    for (token, count) in &entries {
        row(&format!(" {} {:>8}", pad_right(token, 40), count));
    }
    row(&themed(
        GRAY,
        &[],
        &format!(
            " {} terms, {} tokens, norm {:.4}",
            vector.len(),
            vector.total(),
            vector.norm()
        ),
    ));
    section_bot();
    Ok(())
}

fn weighting_name(weighting: Weighting) -> &'static str {
    match weighting {
        Weighting::Frequency => "frequency",
        Weighting::Binary => "binary",
    }
}
