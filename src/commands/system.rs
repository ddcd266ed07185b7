// System commands - native folder picker, reveal in file manager, platform info

use std::sync::{Arc, OnceLock};

use crate::services::config::ShellConfig;
use crate::services::shell::{system_shell, ShellIntegration};
use crate::traits::{OsProvider, RealOsProvider};

/// Shell integration shared by all commands, selected once per process.
static SHELL: OnceLock<Arc<dyn ShellIntegration>> = OnceLock::new();

/// Install the shell integration the commands use.
///
/// Returns `false` if one was already installed (or lazily created by an
/// earlier command); the existing one stays in place.
pub fn install_shell(shell: Arc<dyn ShellIntegration>) -> bool {
    SHELL.set(shell).is_ok()
}

fn shell() -> Arc<dyn ShellIntegration> {
    SHELL
        .get_or_init(|| Arc::from(system_shell(ShellConfig::default())))
        .clone()
}

/// Show the native folder picker. Empty text means nothing was selected.
#[cfg_attr(feature = "tauri", tauri::command)]
pub async fn select_directory(title: String) -> Result<String, String> {
    select_directory_with(shell(), title).await
}

/// Open the folder containing `file_path` in the system file manager
#[cfg_attr(feature = "tauri", tauri::command)]
pub async fn reveal_containing_folder(file_path: String) -> Result<(), String> {
    reveal_containing_folder_with(shell(), file_path)
}

/// Get platform information
#[cfg_attr(feature = "tauri", tauri::command)]
pub fn get_platform_info() -> PlatformInfo {
    platform_info_with(&RealOsProvider::new(), shell().as_ref())
}

pub async fn select_directory_with(
    shell: Arc<dyn ShellIntegration>,
    title: String,
) -> Result<String, String> {
    // The dialog blocks until the user closes it
    tokio::task::spawn_blocking(move || shell.select_directory(&title))
        .await
        .map_err(|e| format!("Task join error: {}", e))?
        .map(Option::unwrap_or_default)
        .map_err(|e| e.to_string())
}

pub fn reveal_containing_folder_with(
    shell: Arc<dyn ShellIntegration>,
    file_path: String,
) -> Result<(), String> {
    shell
        .reveal_containing_folder(&file_path)
        .map_err(|e| e.to_string())
}

pub fn platform_info_with(os: &dyn OsProvider, shell: &dyn ShellIntegration) -> PlatformInfo {
    PlatformInfo {
        os: os.os_name(),
        arch: os.arch(),
        shell_supported: shell.is_supported(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct PlatformInfo {
    pub os: String,
    pub arch: String,
    pub shell_supported: bool,
}
