//! File system abstraction for testability.
//!
//! Folder reveal only needs to resolve relative paths and check that a
//! directory is present, so the seam stays that small.

use std::path::{Path, PathBuf};

/// Result type for file system operations.
pub type FsResult<T> = Result<T, std::io::Error>;

/// Abstraction over the file system queries used by path resolution.
pub trait FileSystem: Send + Sync {
    /// The working directory relative paths are resolved against.
    fn current_dir(&self) -> FsResult<PathBuf>;

    /// Check if a path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;
}

/// Real implementation using `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl StdFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for StdFileSystem {
    fn current_dir(&self) -> FsResult<PathBuf> {
        std::env::current_dir()
    }

    fn is_dir(&self, path: &Path) -> bool {
        std::fs::metadata(path)
            .map(|m| m.is_dir())
            .unwrap_or(false)
    }
}

/// Mock implementation for testing.
#[cfg(test)]
pub use mock::MockFileSystem;

#[cfg(test)]
mod mock {
    use super::*;
    use std::collections::HashSet;
    use std::sync::{Arc, RwLock};

    /// In-memory mock file system for testing.
    #[derive(Debug, Clone)]
    pub struct MockFileSystem {
        cwd: Arc<RwLock<Option<PathBuf>>>,
        dirs: Arc<RwLock<HashSet<PathBuf>>>,
    }

    impl MockFileSystem {
        /// A mock rooted at `/work` with no directories.
        pub fn new() -> Self {
            Self {
                cwd: Arc::new(RwLock::new(Some(PathBuf::from("/work")))),
                dirs: Arc::new(RwLock::new(HashSet::new())),
            }
        }

        /// Pre-populate a directory for testing.
        pub fn with_dir(self, path: impl AsRef<Path>) -> Self {
            self.dirs
                .write()
                .unwrap()
                .insert(path.as_ref().to_path_buf());
            self
        }

        pub fn with_cwd(self, path: impl AsRef<Path>) -> Self {
            *self.cwd.write().unwrap() = Some(path.as_ref().to_path_buf());
            self
        }

        /// Make `current_dir` fail, as it does when the directory was deleted.
        pub fn without_cwd(self) -> Self {
            *self.cwd.write().unwrap() = None;
            self
        }
    }

    impl Default for MockFileSystem {
        fn default() -> Self {
            Self::new()
        }
    }

    impl FileSystem for MockFileSystem {
        fn current_dir(&self) -> FsResult<PathBuf> {
            self.cwd.read().unwrap().clone().ok_or_else(|| {
                std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "Current directory not found",
                )
            })
        }

        fn is_dir(&self, path: &Path) -> bool {
            self.dirs.read().unwrap().contains(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_std_fs_is_dir() {
        let dir = tempdir().unwrap();
        let fs = StdFileSystem::new();
        let file_path = dir.path().join("test.txt");
        std::fs::write(&file_path, "Hello, World!").unwrap();

        assert!(fs.is_dir(dir.path()));
        assert!(!fs.is_dir(&file_path));
        assert!(!fs.is_dir(&dir.path().join("missing")));
    }

    #[test]
    fn test_std_fs_current_dir_is_absolute() {
        let fs = StdFileSystem::new();
        assert!(fs.current_dir().unwrap().is_absolute());
    }

    #[test]
    fn test_mock_fs_with_dir() {
        let fs = MockFileSystem::new().with_dir("/dir");

        assert!(fs.is_dir(Path::new("/dir")));
        assert!(!fs.is_dir(Path::new("/nonexistent")));
    }

    #[test]
    fn test_mock_fs_cwd() {
        let fs = MockFileSystem::new().with_cwd("/home/user");
        assert_eq!(fs.current_dir().unwrap(), PathBuf::from("/home/user"));

        let fs = fs.without_cwd();
        assert!(fs.current_dir().is_err());
    }
}
