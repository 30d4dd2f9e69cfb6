//! Command execution logic.
//!
//! This module contains the implementation of all CLI commands.

use anyhow::Result;

use super::args::{DeleteArgs, ExportArgs, ListArgs, ShowArgs, UpdateArgs};
use crate::app::App;
use crate::domain::{RecordId, RecordPatch, RecordQuery};
use crate::output::{self, OutputMode};
use crate::store::RecordStore;

/// Execute the list command
pub async fn execute_list(app: &App, args: &ListArgs, output_mode: OutputMode) -> Result<()> {
    let mut query = RecordQuery::page(args.page as usize).with_page_size(args.page_size as usize);
    if let Some(stage) = args.inspection_type {
        query = query.with_type(stage.into());
    }

    let page = app.store().list(&query).await?;

    match output_mode {
        OutputMode::Json => output::print_json(&page)?,
        OutputMode::Text => output::print_page(&page),
    }

    Ok(())
}

/// Execute the show command
pub async fn execute_show(app: &App, args: &ShowArgs, output_mode: OutputMode) -> Result<()> {
    let id = RecordId::new(args.id.as_str());
    let record = app
        .store()
        .get(&id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Record not found: {}", id))?;

    match output_mode {
        OutputMode::Json => output::print_json(&record)?,
        OutputMode::Text => output::print_record(&record),
    }

    Ok(())
}

/// Execute the update command
pub async fn execute_update(app: &mut App, args: &UpdateArgs, output_mode: OutputMode) -> Result<()> {
    let patch = RecordPatch {
        order_no: args.order_no.clone(),
        inspection_type: args.inspection_type.map(Into::into),
        material_code: args.material_code.clone(),
        material_name: args.material_name.clone(),
        result: args.result.map(Into::into),
        inspected_on: args.inspected_on,
    };

    if patch.is_empty() {
        anyhow::bail!("Nothing to update: provide at least one field flag");
    }

    let id = RecordId::new(args.id.as_str());
    let record = app.store_mut().update(&id, patch).await?;

    match output_mode {
        OutputMode::Json => output::print_json(&record)?,
        OutputMode::Text => {
            output::success(&format!("Updated {}", record.id));
            output::print_record(&record);
        }
    }

    Ok(())
}

/// Execute the delete command
pub async fn execute_delete(app: &mut App, args: &DeleteArgs, output_mode: OutputMode) -> Result<()> {
    let id = RecordId::new(args.id.as_str());
    app.store_mut().delete(&id).await?;

    match output_mode {
        OutputMode::Json => output::print_json(&serde_json::json!({ "deleted": id }))?,
        OutputMode::Text => {
            if !args.quiet {
                output::success(&format!("Deleted {}", id));
            }
        }
    }

    Ok(())
}

/// Execute the export command
pub async fn execute_export(app: &App, args: &ExportArgs) -> Result<()> {
    let records = app.store().export_all().await?;
    let json = serde_json::to_string_pretty(&records)?;

    match &args.output {
        Some(path) => {
            tokio::fs::write(path, json).await?;
            output::success(&format!("Exported {} record(s) to {}", records.len(), path.display()));
        }
        None => println!("{}", json),
    }

    Ok(())
}
