//! Trait abstractions for dependency injection and testability.
//!
//! This module provides trait definitions that abstract over the host: child
//! processes, file system queries and platform detection. This enables:
//! - Unit testing without launching real dialogs or file managers
//! - Posing as any operating system in tests
//! - Clear dependency boundaries

pub mod file_system;
pub mod os;
pub mod process;

pub use file_system::{FileSystem, StdFileSystem};
pub use os::{OsProvider, RealOsProvider};
pub use process::{ProcessOutput, ProcessRunner, ProcessSpec, SystemProcessRunner};

#[cfg(test)]
pub use file_system::MockFileSystem;
#[cfg(test)]
pub use os::MockOsProvider;
#[cfg(test)]
pub use process::MockProcessRunner;
