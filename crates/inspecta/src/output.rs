//! Output formatting for CLI commands.
//!
//! Provides both human-readable text output (with semantic colors) and
//! JSON output for programmatic use. The `--json` flag selects the mode;
//! colors respect the `NO_COLOR` convention via the `colored` crate.

use crate::domain::{InspectionRecord, InspectionResult, Page};
use colored::Colorize;
use serde::Serialize;

/// Output mode for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text with colors
    Text,
    /// JSON for programmatic use
    Json,
}

impl OutputMode {
    /// Select the mode from the global `--json` flag
    pub fn from_json_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Text }
    }
}

/// Print any serializable value as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Colorize a pass/fail outcome.
fn colorize_result(result: InspectionResult) -> String {
    match result {
        InspectionResult::Pass => result.label().green().to_string(),
        InspectionResult::Fail => result.label().red().bold().to_string(),
    }
}

/// Print one page of records as a compact table.
pub fn print_page(page: &Page<InspectionRecord>) {
    if page.data.is_empty() {
        println!("{}", "No records on this page.".dimmed());
    } else {
        for record in &page.data {
            println!(
                "{}  {}  {}  {}  {}  {}",
                record.id.as_str().cyan(),
                record.order_no,
                record.inspection_type,
                record.material_name,
                colorize_result(record.result),
                record.inspected_on.to_string().dimmed(),
            );
        }
    }

    println!();
    println!(
        "{}",
        format!(
            "page {}/{} · {} matching record(s)",
            page.page, page.total_pages, page.total
        )
        .dimmed()
    );
}

/// Print full details of a single record.
pub fn print_record(record: &InspectionRecord) {
    println!("{}", record.id.as_str().cyan().bold());
    println!("  Order:     {}", record.order_no);
    println!("  Stage:     {}", record.inspection_type);
    println!("  Material:  {} ({})", record.material_name, record.material_code);
    println!("  Result:    {}", colorize_result(record.result));
    println!("  Inspected: {}", record.inspected_on);
}

/// Print a success message to stdout.
pub fn success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Print an error message to stderr.
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}
