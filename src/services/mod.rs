// Native shell integration services

pub mod config;
pub mod error;
pub mod path_guard;
pub mod shell;
pub mod windows_shell;
