//! Optional presentation assets read from `ASSETS_DIR` at startup.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

pub const STYLESHEET_FILE: &str = "styles.css";
pub const CARD_TEMPLATE_FILE: &str = "job_card.html";

/// Reads named files from a single directory.
#[derive(Debug, Clone)]
pub struct AssetLoader {
    dir: PathBuf,
}

impl AssetLoader {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Returns the file's contents, or `None` if it is missing, unreadable, or blank.
    pub async fn load(&self, name: &str) -> Option<String> {
        match self.read(name).await {
            AssetRead::Loaded(text) => Some(text),
            AssetRead::Blank(path) => {
                debug!("Asset {} is empty", path.display());
                None
            }
            AssetRead::Unavailable(path, e) => {
                debug!("Asset {} unavailable: {e}", path.display());
                None
            }
        }
    }

    /// Loads the stylesheet, logging its absence once.
    pub async fn load_stylesheet(&self) -> Option<String> {
        match self.read(STYLESHEET_FILE).await {
            AssetRead::Loaded(css) => Some(css),
            AssetRead::Blank(path) => {
                warn!("CSS file is empty: {}", path.display());
                None
            }
            AssetRead::Unavailable(path, e) => {
                warn!("CSS file not found: {} ({e})", path.display());
                None
            }
        }
    }

    async fn read(&self, name: &str) -> AssetRead {
        let path = self.dir.join(name);
        match tokio::fs::read_to_string(&path).await {
            Ok(text) if !text.trim().is_empty() => AssetRead::Loaded(text),
            Ok(_) => AssetRead::Blank(path),
            Err(e) => AssetRead::Unavailable(path, e),
        }
    }
}

#[derive(Debug)]
enum AssetRead {
    Loaded(String),
    Blank(PathBuf),
    Unavailable(PathBuf, std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_present_file() {
        let dir = tempfile::tempdir().unwrap();
        let template = "<div>JOB_TITLE_PLACEHOLDER</div>";
        std::fs::write(dir.path().join(CARD_TEMPLATE_FILE), template).unwrap();

        let loader = AssetLoader::new(dir.path());
        assert_eq!(
            loader.load(CARD_TEMPLATE_FILE).await.as_deref(),
            Some(template)
        );
    }

    #[tokio::test]
    async fn test_missing_and_blank_files_are_absent() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(STYLESHEET_FILE), "  \n\t").unwrap();

        let loader = AssetLoader::new(dir.path());
        assert!(loader.load(CARD_TEMPLATE_FILE).await.is_none());
        assert!(loader.load_stylesheet().await.is_none());
    }

    #[tokio::test]
    async fn test_blank_file_is_told_apart_from_missing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(STYLESHEET_FILE), "\n   \n").unwrap();

        let loader = AssetLoader::new(dir.path());
        assert!(matches!(
            loader.read(STYLESHEET_FILE).await,
            AssetRead::Blank(path) if path.ends_with(STYLESHEET_FILE)
        ));
        assert!(matches!(
            loader.read(CARD_TEMPLATE_FILE).await,
            AssetRead::Unavailable(_, e) if e.kind() == std::io::ErrorKind::NotFound
        ));
    }

    #[tokio::test]
    async fn test_missing_directory_is_not_fatal() {
        let loader = AssetLoader::new("/definitely/not/a/real/assets/dir");
        assert!(loader.load_stylesheet().await.is_none());
    }
}
