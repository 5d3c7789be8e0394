// src/export/sink.rs

use crate::errors::AppResult;
use crate::export::{ExportFormat, ExportLogic};
use crate::models::SheetRow;
use std::path::PathBuf;

/// Destination for the timesheet row matrix.
pub trait RowSink {
    fn push(&mut self, rows: &[SheetRow]) -> AppResult<()>;
}

/// Writes rows to a local file in one of the export formats.
#[derive(Debug, Clone)]
pub struct FileSink {
    pub path: PathBuf,
    pub format: ExportFormat,
    pub force: bool,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>, format: ExportFormat) -> Self {
        Self {
            path: path.into(),
            format,
            force: false,
        }
    }

    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }
}

impl RowSink for FileSink {
    fn push(&mut self, rows: &[SheetRow]) -> AppResult<()> {
        ExportLogic::export(rows, self.format, &self.path, self.force)
    }
}

/// Keeps pushed rows in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub rows: Vec<SheetRow>,
}

impl RowSink for MemorySink {
    fn push(&mut self, rows: &[SheetRow]) -> AppResult<()> {
        self.rows.extend_from_slice(rows);
        Ok(())
    }
}
