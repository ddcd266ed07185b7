// Native Bridge - folder picker and reveal-in-file-manager for desktop apps

pub mod commands;
pub mod services;
pub mod traits;

#[cfg(test)]
mod test_utils;

pub use services::config::{ShellConfig, TraversalPolicy};
pub use services::error::{Result, ShellError};
pub use services::shell::{
    detect_shell, shell_for_platform, system_shell, MacOsShell, Platform, ShellIntegration,
    UnsupportedShell,
};
pub use services::windows_shell::WindowsShell;

/// Install the global tracing subscriber.
///
/// Honors `RUST_LOG` and always enables debug output for this crate. Safe to
/// call when the host application already installed a subscriber.
pub fn init_logging() {
    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    if let Ok(directive) = "native_bridge=debug".parse() {
        filter = filter.add_directive(directive);
    }

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_err()
    {
        tracing::debug!("Tracing subscriber already installed");
        return;
    }

    tracing::info!("Starting native shell integration");
}

/// Register the system commands as Tauri IPC handlers.
#[cfg(feature = "tauri")]
pub fn register_commands<R: tauri::Runtime>(builder: tauri::Builder<R>) -> tauri::Builder<R> {
    builder.invoke_handler(tauri::generate_handler![
        commands::system::select_directory,
        commands::system::reveal_containing_folder,
        commands::system::get_platform_info,
    ])
}
