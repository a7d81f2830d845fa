//! Criterion benchmarks for the gladius search engine.
//!
//! Covers the three hot paths:
//! - Text analysis
//! - Index construction
//! - Boolean, phrase and negated query execution

use std::hint::black_box;
use std::sync::Arc;

use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use gladius::analysis::{Analyzer, StandardAnalyzer};
use gladius::config::EngineConfig;
use gladius::document::Document;
use gladius::query::QueryCompiler;
use gladius::search::SearchEngine;

const WORDS: &[&str] = &[
    "search", "engine", "full", "text", "index", "query", "document", "field", "term", "phrase",
    "boolean", "relevance", "score", "analysis", "tokenization", "stemming", "normalization",
    "the", "of", "and", "data", "structure", "performance", "memory", "retrieval", "ranking",
];

/// Generate synthetic documents with a deterministic word distribution.
fn generate_test_documents(count: usize) -> Vec<Document> {
    (0..count)
        .map(|i| {
            let doc_length = 50 + (i % 100); // Variable length documents
            let content: Vec<&str> = (0..doc_length)
                .map(|j| WORDS[(i * 7 + j * 13) % WORDS.len()])
                .collect();
            Document::new(i as i64, format!("Document {i}"), "2024-01-01", content.join(" "))
        })
        .collect()
}

fn build_engine(docs: &[Document]) -> SearchEngine {
    let mut engine = SearchEngine::new(EngineConfig::default()).unwrap();
    engine.add_documents(docs.iter().cloned());
    engine
}

/// Benchmark text analysis and tokenization.
fn bench_text_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_analysis");

    let docs = generate_test_documents(100);
    let plain = StandardAnalyzer::new().unwrap();
    let stemming =
        StandardAnalyzer::from_config(&EngineConfig::default().with_stemming(true).analysis)
            .unwrap();

    group.throughput(Throughput::Elements(docs.len() as u64));
    group.bench_function("analyze_plain", |b| {
        b.iter(|| {
            for doc in &docs {
                black_box(plain.terms(black_box(&doc.content)));
            }
        })
    });
    group.bench_function("analyze_stemming", |b| {
        b.iter(|| {
            for doc in &docs {
                black_box(stemming.terms(black_box(&doc.content)));
            }
        })
    });

    group.finish();
}

/// Benchmark index construction.
fn bench_indexing(c: &mut Criterion) {
    let mut group = c.benchmark_group("indexing");
    group.sample_size(20);

    let docs = generate_test_documents(1000);
    group.throughput(Throughput::Elements(docs.len() as u64));
    group.bench_function("index_1000_documents", |b| {
        b.iter_batched(
            || docs.clone(),
            |docs| {
                let mut engine = SearchEngine::new(EngineConfig::default()).unwrap();
                engine.add_documents(docs);
                black_box(engine)
            },
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

/// Benchmark query compilation and execution.
fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    let docs = generate_test_documents(1000);
    let engine = build_engine(&docs);
    let compiler = QueryCompiler::new(Arc::new(StandardAnalyzer::new().unwrap()));

    group.bench_function("compile_query", |b| {
        b.iter(|| compiler.compile(black_box("(search OR index) AND \"full text\" AND NOT memory")))
    });

    let queries = [
        ("single_term", "retrieval"),
        ("boolean_and_or", "(search OR ranking) AND relevance"),
        ("phrase", "\"full text\""),
        ("negation", "NOT memory"),
        ("mixed", "(search OR index) AND \"full text\" AND NOT memory"),
    ];
    for (name, query) in queries {
        group.bench_function(name, |b| b.iter(|| black_box(engine.search(black_box(query)))));
    }

    group.finish();
}

criterion_group!(benches, bench_text_analysis, bench_indexing, bench_search);
criterion_main!(benches);
