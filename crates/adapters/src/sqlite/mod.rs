mod queries;

use std::fs;
use std::path::PathBuf;

use gospoil_application::{ApplicationError, ExportLog};
use gospoil_domain::ExportRecord;
use rusqlite::Connection;
use tracing::debug;

use crate::migrations::MIGRATIONS;

/// Append-only log of completed exports. Rows are written, never read back by
/// the application.
#[derive(Debug, Clone)]
pub struct SqliteExportLog {
    path: PathBuf,
}

impl SqliteExportLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn open_connection(&self) -> Result<Connection, ApplicationError> {
        Connection::open(&self.path)
            .map_err(|error| ApplicationError::Persistence(error.to_string()))
    }
}

impl ExportLog for SqliteExportLog {
    fn initialize(&self) -> Result<(), ApplicationError> {
        if self.path.as_os_str().is_empty() {
            return Err(ApplicationError::InvalidInput(
                "export log path must not be empty".to_string(),
            ));
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|error| ApplicationError::Io(error.to_string()))?;
            }
        }

        let conn = self.open_connection()?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")
            .map_err(|error| ApplicationError::Persistence(error.to_string()))?;

        for migration in MIGRATIONS {
            conn.execute_batch(migration)
                .map_err(|error| ApplicationError::Persistence(error.to_string()))?;
        }

        Ok(())
    }

    fn record(&self, record: &ExportRecord) -> Result<(), ApplicationError> {
        let conn = self.open_connection()?;
        let row_id = queries::insert_export(
            &conn,
            record.external_id.as_str(),
            &record.title,
            &record.year,
            &record.summary,
            &record.exported_at_iso(),
        )
        .map_err(|error| ApplicationError::Persistence(error.to_string()))?;
        debug!(row_id, external_id = %record.external_id, "export logged");
        Ok(())
    }
}
