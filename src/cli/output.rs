//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{GladiusArgs, OutputFormat};
use crate::error::Result;

/// Wall-clock timings of the phases of a command, in milliseconds.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Timings {
    pub load_ms: f64,
    pub index_ms: f64,
    pub search_ms: f64,
}

/// One displayed search hit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HitOutput {
    pub id: i64,
    pub title: String,
    pub date: String,
    pub score: f64,
    pub matched_terms: Vec<String>,
    pub snippet: String,
}

/// Result structure for search operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOutput {
    pub path: String,
    pub query: String,
    pub rpn: String,
    pub documents: usize,
    pub total_hits: usize,
    pub hits: Vec<HitOutput>,
    pub diagnostics: Vec<String>,
    pub timings: Timings,
}

/// Result structure for query explanation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplainOutput {
    pub query: String,
    pub rpn: String,
    pub operands: Vec<String>,
    pub diagnostics: Vec<String>,
}

/// Index statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsOutput {
    pub path: String,
    pub documents: usize,
    pub terms: usize,
    pub tokens: usize,
    pub stemming: bool,
    pub timings: Timings,
}

/// Human-readable rendering of a command result.
pub trait HumanOutput {
    fn print_human(&self, args: &GladiusArgs);
}

/// Output a command result in the selected format.
pub fn output_result<T: Serialize + HumanOutput>(result: &T, args: &GladiusArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            result.print_human(args);
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &GladiusArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

impl HumanOutput for SearchOutput {
    fn print_human(&self, args: &GladiusArgs) {
        if args.verbosity() > 0 {
            println!(
                "Loaded {} docs from {} in {}",
                self.documents,
                self.path,
                format_ms(self.timings.load_ms)
            );
            println!(
                "Indexed {} docs in {}",
                self.documents,
                format_ms(self.timings.index_ms)
            );
        }

        if self.query.trim().is_empty() {
            println!("No query provided. Use -q \"your query\"");
            return;
        }

        if args.verbosity() > 1 {
            println!("RPN: {}", self.rpn);
        }
        for diagnostic in &self.diagnostics {
            println!("Note: {diagnostic}");
        }
        if args.verbosity() > 0 {
            println!(
                "Search completed in {}, {} results",
                format_ms(self.timings.search_ms),
                self.total_hits
            );
        }

        for hit in &self.hits {
            println!();
            println!("[{}] {} (score: {:.4})", hit.date, hit.title, hit.score);
            if !hit.snippet.is_empty() {
                println!("{}", hit.snippet);
            }
        }
    }
}

impl HumanOutput for ExplainOutput {
    fn print_human(&self, _args: &GladiusArgs) {
        println!("Query:    {}", self.query);
        println!("RPN:      {}", self.rpn);
        println!("Operands: {}", self.operands.join(", "));
        for diagnostic in &self.diagnostics {
            println!("Note:     {diagnostic}");
        }
    }
}

impl HumanOutput for StatsOutput {
    fn print_human(&self, args: &GladiusArgs) {
        println!("Index Statistics:");
        println!("════════════════");
        println!("Source: {}", self.path);
        println!("Documents: {}", self.documents);
        println!("Distinct terms: {}", self.terms);
        println!("Indexed tokens: {}", self.tokens);
        println!("Stemming: {}", if self.stemming { "on" } else { "off" });

        if args.verbosity() > 1 {
            println!(
                "Loaded in {}, indexed in {}",
                format_ms(self.timings.load_ms),
                format_ms(self.timings.index_ms)
            );
        }
    }
}

/// Format a duration given in milliseconds.
pub fn format_ms(ms: f64) -> String {
    if ms < 1.0 {
        format!("{:.0}µs", ms * 1000.0)
    } else if ms < 1000.0 {
        format!("{ms:.2}ms")
    } else {
        format!("{:.2}s", ms / 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_ms() {
        assert_eq!(format_ms(0.25), "250µs");
        assert_eq!(format_ms(12.345), "12.35ms");
        assert_eq!(format_ms(2500.0), "2.50s");
    }

    #[test]
    fn test_search_output_json_shape() {
        let output = SearchOutput {
            path: "news.csv".into(),
            query: "cats".into(),
            rpn: "cats".into(),
            documents: 2,
            total_hits: 1,
            hits: vec![HitOutput {
                id: 1,
                title: "Cats".into(),
                date: "2024-01-01".into(),
                score: 0.5,
                matched_terms: vec!["cats".into()],
                snippet: "...cats...".into(),
            }],
            diagnostics: Vec::new(),
            timings: Timings::default(),
        };
        let value = serde_json::to_value(&output).unwrap();

        assert_eq!(value["hits"][0]["id"], 1);
        assert_eq!(value["hits"][0]["matched_terms"][0], "cats");
        assert_eq!(value["total_hits"], 1);
    }
}
