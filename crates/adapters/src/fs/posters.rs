use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use gospoil_application::{ApplicationError, PosterStore};
use gospoil_domain::{is_missing_poster_url, poster_file_name};
use tracing::{debug, warn};

use crate::http::HttpTransport;

const POSTER_TIMEOUT: Duration = Duration::from_secs(12);

/// Poster files cached on disk under a sanitized-title key. A cached file is
/// never refreshed.
pub struct CachedPosterStore {
    transport: Arc<dyn HttpTransport>,
    cache_dir: PathBuf,
}

impl CachedPosterStore {
    pub fn new(transport: Arc<dyn HttpTransport>, cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            transport,
            cache_dir: cache_dir.into(),
        }
    }

    fn download(&self, url: &str, path: &Path) -> Result<(), ApplicationError> {
        let bytes = self.transport.get_bytes(url, POSTER_TIMEOUT)?;
        fs::write(path, bytes).map_err(|error| ApplicationError::Io(error.to_string()))
    }
}

impl PosterStore for CachedPosterStore {
    fn ensure_cache_dir(&self) -> Result<(), ApplicationError> {
        fs::create_dir_all(&self.cache_dir).map_err(|error| ApplicationError::Io(error.to_string()))
    }

    fn fetch_poster(&self, url: &str, title: &str) -> Option<PathBuf> {
        if is_missing_poster_url(url) {
            return None;
        }

        let path = self.cache_dir.join(poster_file_name(url, title));
        if path.exists() {
            debug!(path = %path.display(), "poster cache hit");
            return Some(path);
        }

        match self.download(url, &path) {
            Ok(()) => Some(path),
            Err(error) => {
                warn!(%error, url, "poster download failed");
                None
            }
        }
    }
}
