use std::fs::File;
use std::io::Write;
use std::path::Path;

use gospoil_application::{ApplicationError, ExportWriter};

/// Writes export documents as UTF-8 text files.
#[derive(Debug, Default)]
pub struct FsExportWriter;

impl ExportWriter for FsExportWriter {
    fn write_text(&self, path: &Path, text: &str) -> Result<(), ApplicationError> {
        let mut file =
            File::create(path).map_err(|error| ApplicationError::Io(error.to_string()))?;
        file.write_all(text.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|error| ApplicationError::Io(error.to_string()))
    }
}
