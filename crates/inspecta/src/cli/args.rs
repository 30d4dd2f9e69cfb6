//! CLI argument structs for all commands.
//!
//! Each command has its own argument struct with clap derive attributes
//! for parsing and validation.

use clap::Parser;

use super::types::{InspectionResultArg, InspectionTypeArg};

/// Arguments for the `list` command
#[derive(Parser, Debug, Clone)]
pub struct ListArgs {
    /// Filter by inspection stage
    #[arg(short = 't', long = "type", value_enum)]
    pub inspection_type: Option<InspectionTypeArg>,

    /// Page to show (1-based)
    #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    /// Records per page
    #[arg(long, default_value = "10", value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: u32,
}

/// Arguments for the `show` command
#[derive(Parser, Debug, Clone)]
pub struct ShowArgs {
    /// Record ID (e.g., "rec-12")
    pub id: String,
}

/// Arguments for the `update` command
///
/// Only provided fields are changed; everything else is preserved.
#[derive(Parser, Debug, Clone)]
pub struct UpdateArgs {
    /// Record ID (e.g., "rec-12")
    pub id: String,

    /// New work order number
    #[arg(long)]
    pub order_no: Option<String>,

    /// New inspection stage
    #[arg(short = 't', long = "type", value_enum)]
    pub inspection_type: Option<InspectionTypeArg>,

    /// New material code
    #[arg(long)]
    pub material_code: Option<String>,

    /// New material name
    #[arg(long)]
    pub material_name: Option<String>,

    /// New pass/fail outcome
    #[arg(short, long, value_enum)]
    pub result: Option<InspectionResultArg>,

    /// New inspection date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub inspected_on: Option<chrono::NaiveDate>,
}

/// Arguments for the `delete` command
#[derive(Parser, Debug, Clone)]
pub struct DeleteArgs {
    /// Record ID (e.g., "rec-12")
    pub id: String,

    /// Skip the confirmation message
    #[arg(short, long)]
    pub quiet: bool,
}

/// Arguments for the `export` command
#[derive(Parser, Debug, Clone)]
pub struct ExportArgs {
    /// Write JSON to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<std::path::PathBuf>,
}
