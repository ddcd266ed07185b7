// Windows shell integration - PowerShell folder browser and `start` for reveal

use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::config::ShellConfig;
use super::error::{Result, ShellError};
use super::path_guard::resolve_containing_directory;
use super::shell::{Platform, ShellIntegration};
use crate::traits::{FileSystem, ProcessRunner, ProcessSpec};

/// Folder picker for Windows.
///
/// The title never becomes part of the script: the script reads it from an
/// environment variable of the child process.
pub struct WindowsShell {
    config: ShellConfig,
    powershell: String,
    runner: Arc<dyn ProcessRunner>,
    fs: Arc<dyn FileSystem>,
}

impl WindowsShell {
    pub fn new(config: ShellConfig, runner: Arc<dyn ProcessRunner>, fs: Arc<dyn FileSystem>) -> Self {
        let powershell = resolve_powershell(&config);
        Self {
            config,
            powershell,
            runner,
            fs,
        }
    }

    /// The PowerShell program dialogs are run with.
    pub fn powershell(&self) -> &str {
        &self.powershell
    }

    /// Process that shows the folder browser, titled `title`.
    pub fn dialog_spec(&self, title: &str) -> ProcessSpec {
        ProcessSpec::new(&self.powershell)
            .args([
                "-NoProfile",
                "-NonInteractive",
                "-STA",
                "-WindowStyle",
                "Hidden",
                "-Command",
            ])
            .arg(folder_dialog_script(
                &self.config.title_env_var,
                self.config.cancel_exit_code,
            ))
            .env(&self.config.title_env_var, title)
            .hidden()
    }

    /// Process that opens `dir` in Explorer through `start`.
    ///
    /// cmd does its own parsing of the command line, so the directory is
    /// quoted here and passed through untouched.
    pub fn reveal_spec(&self, dir: &Path) -> Result<ProcessSpec> {
        Ok(ProcessSpec::new(&self.config.reveal_program)
            .args(["/C", "start", ""])
            .raw_arg(quote_for_cmd(dir)?)
            .hidden())
    }
}

impl ShellIntegration for WindowsShell {
    fn platform(&self) -> Platform {
        Platform::Windows
    }

    fn select_directory(&self, title: &str) -> Result<Option<String>> {
        let spec = self.dialog_spec(title);
        tracing::debug!("Opening folder dialog with {}", spec.program);

        let output = self
            .runner
            .run(&spec)
            .map_err(|source| ShellError::ProcessSpawn {
                program: spec.program.clone(),
                source,
            })?;

        if output.code == Some(self.config.cancel_exit_code) {
            tracing::debug!("Folder dialog cancelled");
            return Ok(None);
        }

        if !output.success() {
            tracing::warn!(
                "Folder dialog exited with {:?}: {}",
                output.code,
                output.stderr.trim()
            );
            return Err(ShellError::ProcessExecution {
                program: spec.program,
                code: output.code,
                stderr: output.stderr.trim().to_string(),
            });
        }

        let selected = output.stdout.trim();
        if selected.is_empty() {
            tracing::debug!("Folder dialog closed without a selection");
            return Ok(None);
        }

        tracing::info!("Folder selected: {}", selected);
        Ok(Some(selected.to_string()))
    }

    fn reveal_containing_folder(&self, file_path: &str) -> Result<()> {
        let dir = resolve_containing_directory(
            file_path,
            self.config.traversal_policy,
            self.fs.as_ref(),
        )?;

        let spec = self.reveal_spec(&dir)?;
        self.runner
            .spawn_detached(&spec)
            .map_err(|source| ShellError::ProcessSpawn {
                program: spec.program.clone(),
                source,
            })?;

        tracing::info!("Opened file manager at {}", dir.display());
        Ok(())
    }
}

/// Script for the folder browser.
///
/// Prints the selected path and exits 0, or exits with `cancel_code`.
fn folder_dialog_script(title_env_var: &str, cancel_code: i32) -> String {
    [
        "[Console]::OutputEncoding = [System.Text.Encoding]::UTF8".to_string(),
        "Add-Type -AssemblyName System.Windows.Forms".to_string(),
        "$dialog = New-Object System.Windows.Forms.FolderBrowserDialog".to_string(),
        format!(
            "$dialog.Description = [Environment]::GetEnvironmentVariable('{}')",
            escape_ps_single_quoted(title_env_var)
        ),
        "$dialog.ShowNewFolderButton = $true".to_string(),
        "if ($dialog.ShowDialog() -eq [System.Windows.Forms.DialogResult]::OK) { [Console]::Out.WriteLine($dialog.SelectedPath); exit 0 }".to_string(),
        format!("exit {}", cancel_code),
    ]
    .join("; ")
}

/// Wrap a path in double quotes for cmd.
///
/// Inside quotes cmd leaves `&`, `|`, `^`, `<` and `>` alone, but it still
/// expands `%VAR%` and cannot nest a `"`. Paths holding either, or control
/// characters, are refused.
fn quote_for_cmd(dir: &Path) -> Result<String> {
    let text = dir.to_string_lossy();
    if text.contains(['"', '%']) || text.chars().any(char::is_control) {
        tracing::warn!("Refusing to pass {} to cmd", text);
        return Err(ShellError::UnquotablePath(text.into_owned()));
    }
    Ok(format!("\"{}\"", text))
}

fn escape_ps_single_quoted(s: &str) -> String {
    s.replace('\'', "''")
}

fn find_in_path(program: &str) -> Option<String> {
    which::which(program)
        .ok()
        .map(|p: PathBuf| p.to_string_lossy().to_string())
}

/// Configured override, else `powershell` or `pwsh` on `PATH`, else the bare
/// name and hope it resolves at spawn time.
fn resolve_powershell(config: &ShellConfig) -> String {
    if let Some(program) = config
        .powershell_program
        .as_deref()
        .filter(|p| !p.trim().is_empty())
    {
        return program.to_string();
    }
    find_in_path("powershell")
        .or_else(|| find_in_path("pwsh"))
        .unwrap_or_else(|| "powershell".to_string())
}
