//! Filter and parser benchmarks.
//!
//! # Groups
//!
//! | Group | What it measures |
//! |-------|-----------------|
//! | `filter` | `search::filter` throughput as the store grows from 100 to 10k articles |
//! | `parse` | `content::parse` over the built-in bodies and a long synthetic body |
//!
//! # Viewing results
//!
//! ```sh
//! cargo bench --bench search_bench
//! open target/criterion/report/index.html
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nexora_core::{content, search, Article, ArticleStore};
use std::hint::black_box;

fn corpus(n: usize) -> Vec<Article> {
    let builtin = ArticleStore::builtin();
    let samples = builtin.articles();
    (0..n)
        .map(|i| {
            let mut article = samples[i % samples.len()].clone();
            article.id = format!("{}-{i}", article.id);
            article
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Filter
// ---------------------------------------------------------------------------

fn filter_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");

    for size in [100usize, 1_000, 10_000] {
        let articles = corpus(size);
        group.throughput(Throughput::Elements(size as u64));

        // Roughly one in three articles matches.
        group.bench_with_input(BenchmarkId::new("selective", size), &articles, |b, a| {
            b.iter(|| search::filter(black_box(a), black_box("perplexity")).len())
        });

        group.bench_with_input(BenchmarkId::new("empty_query", size), &articles, |b, a| {
            b.iter(|| search::filter(black_box(a), black_box("")).len())
        });

        group.bench_with_input(BenchmarkId::new("no_match", size), &articles, |b, a| {
            b.iter(|| search::filter(black_box(a), black_box("blockchain")).len())
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Parse
// ---------------------------------------------------------------------------

fn parse_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    let store = ArticleStore::builtin();
    for article in store.articles() {
        group.bench_with_input(
            BenchmarkId::new("builtin", &article.id),
            &article.content,
            |b, body| b.iter(|| content::parse(black_box(body)).len()),
        );
    }

    let long: String = (0..500)
        .map(|i| format!("## Section {i}\nIntro.\n\n- one\n- two\n- three\n\nParagraph {i}.\n\n"))
        .collect();
    group.throughput(Throughput::Bytes(long.len() as u64));
    group.bench_function("synthetic_1500_blocks", |b| {
        b.iter(|| content::parse(black_box(&long)).len())
    });

    group.finish();
}

criterion_group!(benches, filter_bench, parse_bench);
criterion_main!(benches);
