//! Command implementations for the gladius CLI.

use std::path::Path;
use std::time::Instant;

use log::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::EngineConfig;
use crate::document::csv::CsvDocumentLoader;
use crate::error::Result;
use crate::query::format_rpn;
use crate::search::SearchEngine;

/// Execute a CLI command.
pub fn execute_command(args: GladiusArgs) -> Result<()> {
    match &args.command {
        Command::Search(search_args) => search_documents(search_args, &args),
        Command::Explain(explain_args) => explain_query(explain_args, &args),
        Command::Stats(stats_args) => show_stats(stats_args, &args),
    }
}

/// Load the configuration file if one was given; `--stem` forces stemming on.
fn load_config(cli_args: &GladiusArgs, stem: bool) -> Result<EngineConfig> {
    let config = match &cli_args.config {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::default(),
    };
    Ok(if stem { config.with_stemming(true) } else { config })
}

/// Load a CSV collection into a fresh engine.
fn build_engine(path: &Path, config: EngineConfig) -> Result<(SearchEngine, Timings)> {
    let mut timings = Timings::default();

    let start = Instant::now();
    let docs = CsvDocumentLoader::new().load_path(path)?;
    timings.load_ms = elapsed_ms(start);

    let mut engine = SearchEngine::new(config)?;
    let start = Instant::now();
    engine.add_documents(docs);
    timings.index_ms = elapsed_ms(start);

    let stats = engine.stats();
    info!(
        "Indexed {} documents ({} distinct terms) in {}",
        stats.documents,
        stats.terms,
        format_ms(timings.index_ms)
    );

    Ok((engine, timings))
}

/// Load, index and search.
fn search_documents(args: &SearchArgs, cli_args: &GladiusArgs) -> Result<()> {
    let config = load_config(cli_args, args.stem)?;
    let (engine, mut timings) = build_engine(&args.path, config)?;

    let start = Instant::now();
    let response = engine.search_with_diagnostics(&args.query);
    timings.search_ms = elapsed_ms(start);

    let hits = response
        .results
        .iter()
        .take(args.limit)
        .filter_map(|result| {
            let doc = engine.document(result.doc_id)?;
            Some(HitOutput {
                id: doc.id,
                title: doc.title.clone(),
                date: doc.date.clone(),
                score: result.score,
                matched_terms: result.matched_terms.iter().map(ToString::to_string).collect(),
                snippet: engine.snippet(result),
            })
        })
        .collect();

    let output = SearchOutput {
        path: args.path.display().to_string(),
        query: args.query.clone(),
        rpn: format_rpn(&response.rpn),
        documents: engine.stats().documents,
        total_hits: response.results.len(),
        hits,
        diagnostics: response.diagnostics.iter().map(ToString::to_string).collect(),
        timings,
    };
    output_result(&output, cli_args)
}

/// Compile a query and show the result.
fn explain_query(args: &ExplainArgs, cli_args: &GladiusArgs) -> Result<()> {
    let config = load_config(cli_args, args.stem)?;
    let engine = SearchEngine::new(config)?;
    let compiled = engine.compile(&args.query);

    let output = ExplainOutput {
        query: args.query.clone(),
        rpn: compiled.to_string(),
        operands: compiled.operands().map(ToString::to_string).collect(),
        diagnostics: compiled.diagnostics.iter().map(ToString::to_string).collect(),
    };
    output_result(&output, cli_args)
}

/// Load and index a collection, then report its statistics.
fn show_stats(args: &StatsArgs, cli_args: &GladiusArgs) -> Result<()> {
    let config = load_config(cli_args, args.stem)?;
    let stemming = config.analysis.stemming;
    let (engine, timings) = build_engine(&args.path, config)?;
    let stats = engine.stats();

    let output = StatsOutput {
        path: args.path.display().to_string(),
        documents: stats.documents,
        terms: stats.terms,
        tokens: stats.tokens,
        stemming,
        timings,
    };
    output_result(&output, cli_args)
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
