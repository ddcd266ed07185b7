// Shell integration - one implementation per platform family
//
// The variant is picked once from the detected OS. Platforms this build does
// not cover still get a variant, one whose operations fail without spawning
// anything.

use std::fmt;
use std::sync::Arc;

use super::config::ShellConfig;
use super::error::{Result, ShellError};
use super::windows_shell::WindowsShell;
use crate::traits::{
    FileSystem, OsProvider, ProcessRunner, RealOsProvider, StdFileSystem, SystemProcessRunner,
};

/// Platform families the shell integration dispatches on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    Other(String),
}

impl Platform {
    /// Map an OS name as reported by `std::env::consts::OS`.
    pub fn from_os_name(os: &str) -> Self {
        match os {
            "windows" => Platform::Windows,
            "macos" => Platform::MacOs,
            other => Platform::Other(other.to_string()),
        }
    }

    pub fn detect(provider: &dyn OsProvider) -> Self {
        Self::from_os_name(&provider.os_name())
    }

    pub fn name(&self) -> &str {
        match self {
            Platform::Windows => "windows",
            Platform::MacOs => "macos",
            Platform::Other(name) => name,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Native folder picker and file manager integration.
pub trait ShellIntegration: Send + Sync {
    fn platform(&self) -> Platform;

    /// Show a native folder picker and block until it closes.
    ///
    /// Returns `Ok(None)` when the user cancels or picks nothing.
    fn select_directory(&self, title: &str) -> Result<Option<String>>;

    /// Open the directory containing `file_path` in the file manager.
    ///
    /// Returns once the file manager process is spawned; it is not waited on.
    fn reveal_containing_folder(&self, file_path: &str) -> Result<()>;

    /// Whether both operations can succeed on this variant.
    fn is_supported(&self) -> bool {
        true
    }
}

/// macOS support lives in a separate build variant.
#[derive(Debug, Clone, Copy, Default)]
pub struct MacOsShell;

impl ShellIntegration for MacOsShell {
    fn platform(&self) -> Platform {
        Platform::MacOs
    }

    fn select_directory(&self, _title: &str) -> Result<Option<String>> {
        tracing::warn!("Folder dialog requested on macOS, which this build does not include");
        Err(ShellError::NotImplementedOnThisBuild(self.platform().to_string()))
    }

    fn reveal_containing_folder(&self, _file_path: &str) -> Result<()> {
        tracing::warn!("Folder reveal requested on macOS, which this build does not include");
        Err(ShellError::NotImplementedOnThisBuild(self.platform().to_string()))
    }

    fn is_supported(&self) -> bool {
        false
    }
}

/// Any OS outside the handled set.
#[derive(Debug, Clone)]
pub struct UnsupportedShell {
    os: String,
}

impl UnsupportedShell {
    pub fn new(os: impl Into<String>) -> Self {
        Self { os: os.into() }
    }
}

impl ShellIntegration for UnsupportedShell {
    fn platform(&self) -> Platform {
        Platform::Other(self.os.clone())
    }

    fn select_directory(&self, _title: &str) -> Result<Option<String>> {
        tracing::warn!("Folder dialog requested on unsupported platform {}", self.os);
        Err(ShellError::UnsupportedPlatform(self.os.clone()))
    }

    fn reveal_containing_folder(&self, _file_path: &str) -> Result<()> {
        tracing::warn!("Folder reveal requested on unsupported platform {}", self.os);
        Err(ShellError::UnsupportedPlatform(self.os.clone()))
    }

    fn is_supported(&self) -> bool {
        false
    }
}

/// Build the variant for `platform` on top of the given host seams.
pub fn shell_for_platform(
    platform: Platform,
    config: ShellConfig,
    runner: Arc<dyn ProcessRunner>,
    fs: Arc<dyn FileSystem>,
) -> Box<dyn ShellIntegration> {
    tracing::debug!("Selecting shell integration for {}", platform);
    match platform {
        Platform::Windows => Box::new(WindowsShell::new(config, runner, fs)),
        Platform::MacOs => Box::new(MacOsShell),
        Platform::Other(os) => Box::new(UnsupportedShell::new(os)),
    }
}

/// Build the variant for the OS reported by `provider`, using real processes
/// and the real file system.
pub fn detect_shell(provider: &dyn OsProvider, config: ShellConfig) -> Box<dyn ShellIntegration> {
    shell_for_platform(
        Platform::detect(provider),
        config,
        Arc::new(SystemProcessRunner::new()),
        Arc::new(StdFileSystem::new()),
    )
}

/// Build the variant for the running OS.
pub fn system_shell(config: ShellConfig) -> Box<dyn ShellIntegration> {
    detect_shell(&RealOsProvider::new(), config)
}
