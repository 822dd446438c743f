//! Public disk for uploaded files.
//!
//! Files are stored below a root directory (`STORAGE_PATH`) using forward-slash relative paths such
//! as `company-images/logos/{name}.png`. The same tree is served read-only at `/storage`, so a
//! stored path maps directly to a public URL.

use std::path::{Path, PathBuf};

use dioxus_logger::tracing;

#[derive(Clone, Debug)]
pub struct Storage {
    root: PathBuf,
    base_url: String,
}

impl Storage {
    /// Creates a public disk rooted at `root` whose files are served below `{app_url}/storage`
    pub fn new(root: impl Into<PathBuf>, app_url: &str) -> Self {
        Self {
            root: root.into(),
            base_url: format!("{}/storage", app_url.trim_end_matches('/')),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute location of a stored path
    pub fn path(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }

    /// Public URL of a stored path
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Writes `bytes` to `path`, creating missing directories
    pub async fn put(&self, path: &str, bytes: &[u8]) -> Result<(), std::io::Error> {
        let full_path = self.path(path);

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(full_path, bytes).await
    }

    pub async fn exists(&self, path: &str) -> bool {
        tokio::fs::try_exists(self.path(path))
            .await
            .unwrap_or(false)
    }

    /// Deletes an image and every variation generated next to it.
    ///
    /// Variations share the primary file's stem (`{stem}_sm.png`, `{stem}_thumb.jpg`), so every
    /// file in the same directory whose name starts with the stem is removed.
    ///
    /// # Returns
    /// - `true` - At least one file was deleted
    /// - `false` - Nothing matched, or the directory could not be read (logged)
    pub async fn delete_with_variations(&self, path: &str) -> bool {
        let full_path = self.path(path);

        let (Some(dir), Some(stem)) = (
            full_path.parent(),
            full_path.file_stem().and_then(|stem| stem.to_str()),
        ) else {
            tracing::warn!("Refusing to delete {:?}, path has no file name", path);

            return false;
        };

        let mut entries = match tokio::fs::read_dir(dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return false,
            Err(e) => {
                tracing::error!(
                    "Failed to read {} while deleting variations of {}: {}",
                    dir.display(),
                    path,
                    e
                );

                return false;
            }
        };

        let mut deleted = 0;

        loop {
            let entry = match entries.next_entry().await {
                Ok(Some(entry)) => entry,
                Ok(None) => break,
                Err(e) => {
                    tracing::error!("Failed to list {}: {}", dir.display(), e);
                    break;
                }
            };

            let matches = entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.starts_with(stem));

            if !matches {
                continue;
            }

            match tokio::fs::remove_file(entry.path()).await {
                Ok(()) => deleted += 1,
                Err(e) => tracing::error!("Failed to delete {}: {}", entry.path().display(), e),
            }
        }

        tracing::debug!("Deleted {} file(s) for image {}", deleted, path);

        deleted > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage() -> (tempfile::TempDir, Storage) {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(dir.path(), "http://localhost:8080/");

        (dir, storage)
    }

    #[test]
    fn url_is_rooted_at_storage_prefix() {
        let (_dir, storage) = storage();

        assert_eq!(
            storage.url("company-images/logos/a.png"),
            "http://localhost:8080/storage/company-images/logos/a.png"
        );
    }

    /// Expect the primary and every variation to be removed while other images stay
    #[tokio::test]
    async fn delete_with_variations_removes_matching_files() {
        let (_dir, storage) = storage();

        storage.put("company-images/logos/abc.png", b"a").await.unwrap();
        storage
            .put("company-images/logos/abc_sm.png", b"a")
            .await
            .unwrap();
        storage.put("company-images/logos/xyz.png", b"a").await.unwrap();

        let deleted = storage
            .delete_with_variations("company-images/logos/abc.png")
            .await;

        assert!(deleted);
        assert!(!storage.exists("company-images/logos/abc.png").await);
        assert!(!storage.exists("company-images/logos/abc_sm.png").await);
        assert!(storage.exists("company-images/logos/xyz.png").await);
    }

    /// Expect false when nothing matches, including a missing directory
    #[tokio::test]
    async fn delete_with_variations_reports_nothing_deleted() {
        let (_dir, storage) = storage();

        assert!(
            !storage
                .delete_with_variations("company-images/banners/missing.jpg")
                .await
        );
    }
}
