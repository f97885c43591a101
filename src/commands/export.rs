//! Data export command.

use crate::db::db::Db;
use crate::libs::export::{ExportData, ExportFormat, Exporter};
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Table to export
    #[arg(short, long, value_enum)]
    data: ExportData,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Output file path (defaults to a date-stamped name in the current directory)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let db = Db::open()?;

    let exporter = Exporter::new(args.format, args.output);
    let path = exporter.export(args.data, &db)?;
    db.close()?;

    msg_success!(Message::ExportCompleted(path.display().to_string()));
    Ok(())
}
