// Error types for native shell integration

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),

    #[error("Not implemented on this build: {0} support ships as a separate variant")]
    NotImplementedOnThisBuild(String),

    #[error("Invalid path: traversal detected in {0}")]
    PathTraversal(String),

    #[error("Invalid directory path {path}: {source}")]
    InvalidDirectory {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid path: {0} cannot be passed to the shell safely")]
    UnquotablePath(String),

    #[error("Directory does not exist: {0}")]
    DirectoryNotFound(String),

    #[error("Failed to start {program}: {source}")]
    ProcessSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {}: {stderr}", describe_code(.code))]
    ProcessExecution {
        program: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

impl ShellError {
    /// Whether this error rejects the caller's path (traversal or unresolvable).
    pub fn is_invalid_path(&self) -> bool {
        matches!(
            self,
            ShellError::PathTraversal(_)
                | ShellError::InvalidDirectory { .. }
                | ShellError::UnquotablePath(_)
        )
    }
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "no status (terminated by signal)".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, ShellError>;
