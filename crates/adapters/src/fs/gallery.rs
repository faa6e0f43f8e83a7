use std::path::{Path, PathBuf};

use gospoil_application::{ApplicationError, PosterCatalog};
use walkdir::WalkDir;

const POSTER_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "gif"];

/// Lists the posters already sitting in the cache directory.
#[derive(Debug, Clone)]
pub struct WalkdirPosterCatalog {
    cache_dir: PathBuf,
}

impl WalkdirPosterCatalog {
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
        }
    }
}

impl PosterCatalog for WalkdirPosterCatalog {
    fn list_posters(&self) -> Result<Vec<PathBuf>, ApplicationError> {
        if !self.cache_dir.is_dir() {
            return Err(ApplicationError::InvalidInput(format!(
                "poster cache does not exist or is not a directory: {}",
                self.cache_dir.display()
            )));
        }

        let mut posters = Vec::new();
        for entry in WalkDir::new(&self.cache_dir)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(Result::ok)
        {
            if entry.file_type().is_file() && is_poster_file(entry.path()) {
                posters.push(entry.into_path());
            }
        }
        Ok(posters)
    }
}

fn is_poster_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| POSTER_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn lists_image_files_sorted_by_name() {
        let dir = TempDir::new().expect("tempdir");
        fs::write(dir.path().join("Inception.jpg"), b"x").expect("write");
        fs::write(dir.path().join("Heat.PNG"), b"x").expect("write");
        fs::write(dir.path().join("notes.txt"), b"x").expect("write");
        fs::create_dir(dir.path().join("nested")).expect("dir");
        fs::write(dir.path().join("nested").join("Alien.jpg"), b"x").expect("write");

        let posters = WalkdirPosterCatalog::new(dir.path())
            .list_posters()
            .expect("list");
        assert_eq!(
            posters,
            vec![dir.path().join("Heat.PNG"), dir.path().join("Inception.jpg")]
        );
    }

    #[test]
    fn missing_cache_dir_is_rejected() {
        let dir = TempDir::new().expect("tempdir");
        let catalog = WalkdirPosterCatalog::new(dir.path().join("absent"));
        assert!(matches!(
            catalog.list_posters(),
            Err(ApplicationError::InvalidInput(_))
        ));
    }
}
