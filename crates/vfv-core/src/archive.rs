//! Archival of validated documents.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::ArchiveError;
use crate::models::config::ArchiveConfig;

/// Stores a validated document.
pub trait Archiver {
    /// Store `bytes` under the document's original filename and return
    /// where it ended up.
    fn store(&self, bytes: &[u8], filename: &str) -> Result<PathBuf, ArchiveError>;
}

impl<T: Archiver + ?Sized> Archiver for Box<T> {
    fn store(&self, bytes: &[u8], filename: &str) -> Result<PathBuf, ArchiveError> {
        (**self).store(bytes, filename)
    }
}

/// Flat-file archive: every document lands in one directory.
#[derive(Debug, Clone)]
pub struct DirectoryArchiver {
    dir: PathBuf,
    overwrite: bool,
}

impl DirectoryArchiver {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            overwrite: true,
        }
    }

    pub fn from_config(config: &ArchiveConfig) -> Self {
        Self::new(config.dir.clone()).with_overwrite(config.overwrite)
    }

    /// Set whether an existing archived file may be replaced.
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Archiver for DirectoryArchiver {
    fn store(&self, bytes: &[u8], filename: &str) -> Result<PathBuf, ArchiveError> {
        // Only the last path component is kept, so uploads cannot escape the archive
        let name = Path::new(filename)
            .file_name()
            .ok_or_else(|| ArchiveError::InvalidFilename(filename.to_string()))?;

        fs::create_dir_all(&self.dir).map_err(|source| ArchiveError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let target = self.dir.join(name);
        if !self.overwrite && target.exists() {
            return Err(ArchiveError::AlreadyExists(target));
        }

        fs::write(&target, bytes).map_err(|source| ArchiveError::Io {
            path: target.clone(),
            source,
        })?;

        info!("File saved at {}", target.display());
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_creates_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let archiver = DirectoryArchiver::new(tmp.path().join("validated_files"));

        let path = archiver.store(b"Name,Branch\n", "upload.csv").unwrap();

        assert_eq!(path, tmp.path().join("validated_files").join("upload.csv"));
        assert_eq!(fs::read(&path).unwrap(), b"Name,Branch\n");
    }

    #[test]
    fn test_store_keeps_only_file_name() {
        let tmp = tempfile::tempdir().unwrap();
        let archiver = DirectoryArchiver::new(tmp.path());

        let path = archiver.store(b"x", "../../etc/upload.pdf").unwrap();
        assert_eq!(path, tmp.path().join("upload.pdf"));
    }

    #[test]
    fn test_overwrite_policy() {
        let tmp = tempfile::tempdir().unwrap();

        let archiver = DirectoryArchiver::new(tmp.path());
        archiver.store(b"first", "a.csv").unwrap();
        archiver.store(b"second", "a.csv").unwrap();
        assert_eq!(fs::read(tmp.path().join("a.csv")).unwrap(), b"second");

        let strict = archiver.with_overwrite(false);
        let result = strict.store(b"third", "a.csv");
        assert!(matches!(result, Err(ArchiveError::AlreadyExists(_))));
    }

    #[test]
    fn test_rejects_empty_filename() {
        let tmp = tempfile::tempdir().unwrap();
        let archiver = DirectoryArchiver::new(tmp.path());
        assert!(matches!(archiver.store(b"x", ".."), Err(ArchiveError::InvalidFilename(_))));
    }
}
