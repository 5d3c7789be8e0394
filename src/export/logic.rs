// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::xlsx::export_xlsx;
use crate::models::SheetRow;
use crate::ui::messages::warning;
use std::path::Path;
use tracing::debug;

/// High-level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `rows` to `path` (must be absolute) as `format`.
    ///
    /// An existing file is only replaced with `force` or after the user
    /// confirms. An empty row set writes nothing.
    pub fn export(rows: &[SheetRow], format: ExportFormat, path: &Path, force: bool) -> AppResult<()> {
        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {}",
                path.display()
            )));
        }

        if rows.is_empty() {
            warning("No timesheet rows to export.");
            return Ok(());
        }

        ensure_writable(path, force)?;

        debug!(rows = rows.len(), format = format.as_str(), path = %path.display(), "exporting");

        match format {
            ExportFormat::Csv => export_csv(rows, path),
            ExportFormat::Json => export_json(rows, path),
            ExportFormat::Xlsx => export_xlsx(rows, path),
        }
    }
}
