//! Shared test utilities and helpers.
//!
//! This module provides common utilities for testing throughout the codebase.

#![allow(dead_code)] // Not every helper is used by every test module

use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary directory holding `dir_name/file_name`.
///
/// Returns the TempDir (which cleans up on drop), the absolute path of the
/// nested directory and the path of the file inside it.
pub fn create_test_tree(dir_name: &str, file_name: &str) -> (TempDir, PathBuf, PathBuf) {
    let temp = TempDir::new().expect("Failed to create temp directory");
    let dir = temp.path().join(dir_name);
    std::fs::create_dir_all(&dir).expect("Failed to create test directory");

    let file = dir.join(file_name);
    std::fs::write(&file, "test").expect("Failed to write test file");

    (temp, dir, file)
}

/// Assert that a result is Ok and return the value.
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// Assert that a result is Err and return the error.
#[macro_export]
macro_rules! assert_err {
    ($result:expr) => {
        match $result {
            Ok(v) => panic!("Expected Err, got Ok: {:?}", v),
            Err(e) => e,
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_test_tree() {
        let (temp, dir, file) = create_test_tree("exists", "file.txt");

        assert!(dir.is_dir());
        assert!(dir.is_absolute());
        assert_eq!(file.parent(), Some(dir.as_path()));
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "test");

        // Cleanup happens automatically when temp goes out of scope
        drop(temp);
        assert!(!dir.exists());
    }

    #[test]
    fn test_assert_macros() {
        let ok: Result<u32, String> = Ok(7);
        assert_eq!(crate::assert_ok!(ok), 7);

        let err: Result<u32, String> = Err("nope".into());
        assert_eq!(crate::assert_err!(err), "nope");
    }
}
