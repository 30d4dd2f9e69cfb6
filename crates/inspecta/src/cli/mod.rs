//! CLI argument parsing and command dispatch.
//!
//! This module provides the command-line interface for inspecta using
//! clap's derive API.
//!
//! # Commands
//!
//! - `list`: List records with optional stage filter and pagination
//! - `show`: Show one record in full
//! - `update`: Patch fields of an existing record
//! - `delete`: Remove a record
//! - `export`: Dump all records as JSON
//!
//! # Global Flags
//!
//! - `--json`: Output in JSON format (applies to all commands)
//! - `--config`: Path to the configuration file
//!
//! # Example
//!
//! ```bash
//! inspecta list --type first-piece --page 1 --page-size 5
//! inspecta update rec-12 --result fail
//! inspecta delete rec-12
//! ```

mod args;
mod execute;
mod types;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{DeleteArgs, ExportArgs, ListArgs, ShowArgs, UpdateArgs};
pub use types::{InspectionResultArg, InspectionTypeArg};

use crate::app::App;
use crate::config::CONFIG_FILE_NAME;
use crate::output::OutputMode;

/// Inspecta - quality inspection record management
///
/// Browse, patch, and delete inspection records from a seeded in-memory
/// store. The store is a stand-in for the production backend; the command
/// surface matches the contract the real API will serve.
#[derive(Parser, Debug)]
#[command(name = "inspecta")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format for programmatic use
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to the configuration file
    #[arg(long, global = true, value_name = "FILE", default_value = CONFIG_FILE_NAME)]
    pub config: PathBuf,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List records with optional filters
    ///
    /// Shows one page of records, optionally restricted to a single
    /// inspection stage. Pages are 1-based; asking for a page past the end
    /// shows an empty page.
    List(ListArgs),

    /// Show detailed information about a record
    Show(ShowArgs),

    /// Update an existing record
    ///
    /// Modifies one or more fields of an existing record. Only provided
    /// fields are updated; other fields remain unchanged.
    Update(UpdateArgs),

    /// Delete a record permanently
    Delete(DeleteArgs),

    /// Export all records as JSON
    Export(ExportArgs),
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Execute the parsed command
    pub async fn execute(self) -> Result<()> {
        let output_mode = OutputMode::from_json_flag(self.json);
        let mut app = App::from_config_file(&self.config).await?;

        match &self.command {
            Commands::List(args) => execute::execute_list(&app, args, output_mode).await,
            Commands::Show(args) => execute::execute_show(&app, args, output_mode).await,
            Commands::Update(args) => execute::execute_update(&mut app, args, output_mode).await,
            Commands::Delete(args) => execute::execute_delete(&mut app, args, output_mode).await,
            Commands::Export(args) => execute::execute_export(&app, args).await,
        }
    }
}
