//! Marker-file version store
//!
//! The marker is a plain text file holding a single version tag. Reads trim
//! surrounding whitespace; writes go to a sibling temporary file that is then
//! renamed over the marker, so a crash never leaves a half-written tag.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;
use wanxiang_application::{LocalStateError, VersionStorePort};
use wanxiang_domain::VersionIdentifier;

/// Version store backed by a marker file such as `version.txt`.
#[derive(Debug, Clone)]
pub struct FileVersionStore {
    path: PathBuf,
}

impl FileVersionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "version".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}

impl VersionStorePort for FileVersionStore {
    fn read(&self) -> Result<VersionIdentifier, LocalStateError> {
        let content = fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => LocalStateError::Missing(self.display_path()),
            _ => LocalStateError::Unreadable {
                path: self.display_path(),
                message: e.to_string(),
            },
        })?;

        let tag = content.trim();
        if tag.is_empty() {
            return Err(LocalStateError::Empty(self.display_path()));
        }
        debug!("Read {} from {}", tag, self.path.display());
        Ok(VersionIdentifier::new(tag))
    }

    fn write(&self, version: &VersionIdentifier) -> Result<(), LocalStateError> {
        let write_failed = |e: io::Error| LocalStateError::WriteFailed {
            path: self.display_path(),
            message: e.to_string(),
        };

        let temp = self.temp_path();
        fs::write(&temp, format!("{}\n", version.as_str().trim())).map_err(write_failed)?;
        fs::rename(&temp, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp);
            write_failed(e)
        })?;
        debug!("Wrote {} to {}", version, self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_trims_whitespace() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("version.txt");
        fs::write(&path, "  v13.0.6\n").unwrap();

        let store = FileVersionStore::new(&path);
        let version = store.read().unwrap();
        assert_eq!(version.as_str(), "v13.0.6");
    }

    #[test]
    fn test_missing_marker() {
        let dir = tempdir().unwrap();
        let store = FileVersionStore::new(dir.path().join("version.txt"));
        assert!(matches!(store.read(), Err(LocalStateError::Missing(_))));
    }

    #[test]
    fn test_empty_marker() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("version.txt");
        fs::write(&path, "\n\n").unwrap();
        let store = FileVersionStore::new(&path);
        assert!(matches!(store.read(), Err(LocalStateError::Empty(_))));
    }

    #[test]
    fn test_directory_is_unreadable() {
        let dir = tempdir().unwrap();
        let store = FileVersionStore::new(dir.path());
        assert!(matches!(
            store.read(),
            Err(LocalStateError::Unreadable { .. })
        ));
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("version.txt");
        fs::write(&path, "v1.0.0").unwrap();

        let store = FileVersionStore::new(&path);
        store.write(&VersionIdentifier::new("v1.1.0")).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "v1.1.0\n");
        assert_eq!(store.read().unwrap(), VersionIdentifier::new("v1.1.0"));
        assert!(!dir.path().join("version.txt.tmp").exists());
    }
}
