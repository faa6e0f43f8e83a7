use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{ExternalId, MovieDetail};

/// Always six fraction digits, zero microseconds included.
const ISO_MICROS: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// One completed export, as kept in the export log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRecord {
    pub external_id: ExternalId,
    pub title: String,
    pub year: String,
    pub summary: String,
    pub exported_at: DateTime<Utc>,
}

impl ExportRecord {
    pub fn new(detail: &MovieDetail, summary: &str, exported_at: DateTime<Utc>) -> Self {
        Self {
            external_id: detail.external_id.clone(),
            title: detail.title.clone(),
            year: detail.year.clone(),
            summary: summary.to_string(),
            exported_at,
        }
    }

    /// Timestamp as stored in the log table (no zone suffix).
    pub fn exported_at_iso(&self) -> String {
        self.exported_at.format(ISO_MICROS).to_string()
    }

    /// Body of the exported text file.
    pub fn render_text(&self) -> String {
        let mut text = format!("Title: {}\n", self.title);
        if !self.year.is_empty() {
            text.push_str(&format!("Year: {}\n", self.year));
        }
        text.push_str("\nSummary:\n");
        text.push_str(&self.summary);
        text.push('\n');
        text.push_str("\nMetadata:\n");
        text.push_str(&format!("IMDb ID: {}\n", self.external_id));
        text.push_str(&format!("Exported at: {}Z\n", self.exported_at_iso()));
        text
    }
}

pub fn default_export_file_name(title: &str) -> String {
    format!("{title}.txt")
}
