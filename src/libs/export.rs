//! Data export functionality for external analysis and backup.
//!
//! Writes one entity table at a time to CSV or JSON. Files land in the
//! current directory under a date-stamped name unless the caller supplies an
//! output path.

use crate::db::classes::Classes;
use crate::db::db::Db;
use crate::db::equipment::EquipmentStore;
use crate::db::members::Members;
use crate::db::payments::Payments;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::Local;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Supported export output formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values for spreadsheet tools.
    Csv,
    /// Pretty-printed JSON for programmatic processing.
    Json,
}

impl ExportFormat {
    fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Entity tables available for export.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportData {
    /// Members with their membership plans.
    Members,
    /// The class schedule.
    Classes,
    /// Equipment stocked at the gym facilities.
    Equipment,
    /// Payment history with member and plan details.
    Payments,
}

impl ExportData {
    fn name(&self) -> &'static str {
        match self {
            ExportData::Members => "members",
            ExportData::Classes => "classes",
            ExportData::Equipment => "equipment",
            ExportData::Payments => "payments",
        }
    }
}

pub struct Exporter {
    format: ExportFormat,
    output: Option<PathBuf>,
}

impl Exporter {
    pub fn new(format: ExportFormat, output: Option<PathBuf>) -> Self {
        Self { format, output }
    }

    /// Exports the chosen table and returns the path written.
    ///
    /// An empty table is reported as an error rather than producing an
    /// empty file.
    pub fn export(&self, data: ExportData, db: &Db) -> Result<PathBuf> {
        let path = self.output_path(data);
        match data {
            ExportData::Members => self.write_rows(&path, &Members::new(db).get_all_with_plan()?)?,
            ExportData::Classes => self.write_rows(&path, &Classes::new(db).get_all()?)?,
            ExportData::Equipment => self.write_rows(&path, &EquipmentStore::new(db).get_all()?)?,
            ExportData::Payments => self.write_rows(&path, &Payments::new(db).history()?)?,
        }
        Ok(path)
    }

    fn output_path(&self, data: ExportData) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => {
                let date = Local::now().format("%Y-%m-%d");
                PathBuf::from(format!("{}_{}.{}", data.name(), date, self.format.extension()))
            }
        }
    }

    fn write_rows<T: Serialize>(&self, path: &PathBuf, rows: &[T]) -> Result<()> {
        if rows.is_empty() {
            return Err(msg_error_anyhow!(Message::NoExportData));
        }

        match self.format {
            ExportFormat::Csv => {
                let mut writer = csv::Writer::from_path(path)?;
                for row in rows {
                    writer.serialize(row)?;
                }
                writer.flush()?;
            }
            ExportFormat::Json => {
                let mut file = File::create(path)?;
                file.write_all(serde_json::to_string_pretty(rows)?.as_bytes())?;
            }
        }
        Ok(())
    }
}
