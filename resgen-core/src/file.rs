use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

/// Filesystem operations needed to materialize generated files.
///
/// The generator never talks to `std::fs` directly so callers can swap in
/// a different backing store (or a failing one in tests).
pub trait Filesystem {
    /// Check whether anything (file or directory) exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Create `path` and all of its missing ancestors.
    ///
    /// Creating a directory that already exists is not an error.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Write `content` to `path` as a whole, never replacing an existing file.
    ///
    /// Fails with [`io::ErrorKind::AlreadyExists`] when `path` is taken. On any
    /// failure no file is left at `path`.
    fn write_new(&self, path: &Path, content: &str) -> io::Result<()>;
}

/// [`Filesystem`] backed by the local disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskFs;

impl Filesystem for DiskFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn write_new(&self, path: &Path, content: &str) -> io::Result<()> {
        // Stage next to the target so the final step is a same-filesystem rename.
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut staged = NamedTempFile::new_in(dir)?;
        staged.write_all(content.as_bytes())?;
        staged.as_file().sync_all()?;
        staged.persist_noclobber(path).map_err(|e| e.error)?;
        Ok(())
    }
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

/// A file to be generated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if the file exists
    pub fn exists(&self, fs: &dyn Filesystem) -> bool {
        fs.exists(&self.path)
    }

    /// Write the file unless something already occupies its path.
    ///
    /// Parent directories must already exist.
    pub fn write(&self, fs: &dyn Filesystem) -> io::Result<WriteResult> {
        if self.exists(fs) {
            return Ok(WriteResult::Skipped);
        }
        match fs.write_new(&self.path, &self.content) {
            Ok(()) => Ok(WriteResult::Written),
            // Lost a race with another writer after the existence check.
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(WriteResult::Skipped),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_new_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        DiskFs.write_new(&path, "hello").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn test_write_new_refuses_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");
        fs::write(&path, "first").unwrap();

        let err = DiskFs.write_new(&path, "second").unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert_eq!(fs::read_to_string(&path).unwrap(), "first");
    }

    #[test]
    fn test_write_new_leaves_no_staging_files() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");
        fs::write(&path, "first").unwrap();

        let _ = DiskFs.write_new(&path, "second");

        let entries: Vec<_> = fs::read_dir(temp.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_write_new_missing_parent_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing").join("test.txt");

        assert!(DiskFs.write_new(&path, "nested").is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_create_dir_all_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("a").join("b").join("c");

        DiskFs.create_dir_all(&dir).unwrap();
        DiskFs.create_dir_all(&dir).unwrap();

        assert!(dir.is_dir());
    }

    #[test]
    fn test_file_write_creates_new() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("new.txt");

        let file = File::new(&path, "new content");
        let result = file.write(&DiskFs).unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "new content");
    }

    #[test]
    fn test_file_write_skips_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("existing.txt");

        fs::write(&path, "original").unwrap();

        let file = File::new(&path, "should not write");
        let result = file.write(&DiskFs).unwrap();

        assert_eq!(result, WriteResult::Skipped);
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
    }

    #[test]
    fn test_file_exists() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        let file = File::new(&path, "content");
        assert!(!file.exists(&DiskFs));

        fs::write(&path, "content").unwrap();
        assert!(file.exists(&DiskFs));
    }
}
