use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

/// Outcome of validating one record.
#[derive(Debug, Serialize)]
pub struct RecordOutcome {
    pub index: usize,
    pub valid: bool,
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ValidationReport<'a> {
    pub schema_id: &'static str,
    pub kind: &'a str,
    pub source: &'a str,
    pub valid: bool,
    pub records: Vec<RecordOutcome>,
}

pub const VALIDATION_REPORT_SCHEMA: &str =
    "https://schemas.3leaps.dev/ethshape/cli/v1/validation-report.schema.json";

pub fn print_report(report: &ValidationReport<'_>, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(report),
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["#", "KIND", "RESULT", "ERROR"]);
            for outcome in &report.records {
                table.add_row(vec![
                    outcome.index.to_string(),
                    report.kind.to_string(),
                    verdict(outcome.valid).to_string(),
                    outcome.error.clone().unwrap_or_default(),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for outcome in &report.records {
                match &outcome.error {
                    None => println!("{} #{}: {}", report.kind, outcome.index, verdict(true)),
                    Some(error) => println!(
                        "{} #{}: {} ({error})",
                        report.kind,
                        outcome.index,
                        verdict(false)
                    ),
                }
            }
        }
    }
}

pub fn print_json<T: Serialize>(out: &T) {
    println!(
        "{}",
        serde_json::to_string(out).unwrap_or_else(|_| "{}".to_string())
    );
}

fn verdict(valid: bool) -> &'static str {
    if valid {
        "valid"
    } else {
        "invalid"
    }
}
