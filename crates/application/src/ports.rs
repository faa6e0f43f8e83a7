use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use gospoil_domain::{
    DecodedPoster, ExportRecord, ExternalId, MovieDetail, SearchQuery, SearchResult,
    SummaryBounds,
};

use crate::ApplicationError;

pub trait MetadataSource {
    /// Fails softly: any transport or API failure yields no results.
    fn search(&self, query: &SearchQuery) -> Vec<SearchResult>;

    fn get_detail(&self, external_id: &ExternalId) -> Result<MovieDetail, ApplicationError>;
}

pub trait PosterStore {
    fn ensure_cache_dir(&self) -> Result<(), ApplicationError>;

    /// Local path of the poster, downloading it on a cache miss. `None` when
    /// there is no poster URL or the download failed.
    fn fetch_poster(&self, url: &str, title: &str) -> Option<PathBuf>;
}

pub trait SummarizationEngine: Send + Sync {
    fn summarize(&self, text: &str, bounds: SummaryBounds) -> Result<String, ApplicationError>;
}

pub trait EngineFactory: Send + Sync {
    fn acquire(&self) -> Result<Arc<dyn SummarizationEngine>, ApplicationError>;
}

pub trait ExportLog {
    fn initialize(&self) -> Result<(), ApplicationError>;

    fn record(&self, record: &ExportRecord) -> Result<(), ApplicationError>;
}

pub trait ExportWriter {
    fn write_text(&self, path: &Path, text: &str) -> Result<(), ApplicationError>;
}

pub trait UserPrompt {
    fn confirm(&self, title: &str, message: &str) -> bool;

    fn choose_save_path(&self, default_file_name: &str) -> Option<PathBuf>;
}

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

pub trait PosterCatalog {
    fn list_posters(&self) -> Result<Vec<PathBuf>, ApplicationError>;
}

pub trait PosterDecoder {
    fn decode_poster(
        &self,
        path: &Path,
        max_width: u32,
        max_height: u32,
    ) -> Result<DecodedPoster, ApplicationError>;
}
