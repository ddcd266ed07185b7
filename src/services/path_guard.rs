// Path guard - lexical cleaning and traversal checks for folder reveal

use std::path::{Component, Path, PathBuf};

use super::config::TraversalPolicy;
use super::error::{Result, ShellError};
use crate::traits::FileSystem;

/// Lexically clean a path.
///
/// - Drops `.` segments and redundant separators
/// - Resolves `name/..` pairs
/// - Drops `..` directly under a root (`/..` is `/`)
/// - Keeps leading `..` of a relative path, including one right after a
///   bare drive prefix
/// - An empty result becomes `.`
///
/// Nothing is read from disk, so symlinks are not followed.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut out: Vec<Component> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) => {}
                // A bare drive prefix (`C:..`) is relative to that drive's
                // working directory, so the `..` has to stay.
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }

    if out.is_empty() {
        return PathBuf::from(".");
    }
    out.iter().collect()
}

/// Check a cleaned path for a surviving `..` segment: the whole path, a
/// leading segment, an interior segment, or a trailing one.
///
/// Both `/` and `\` count as separators. A leading drive prefix (`C:`) is
/// skipped, so `C:..\x` counts as leading.
pub fn has_cleaned_traversal(cleaned: &str) -> bool {
    let normalized = cleaned.replace('\\', "/");
    let normalized = match normalized.as_bytes() {
        [drive, b':', ..] if drive.is_ascii_alphabetic() => &normalized[2..],
        _ => normalized.as_str(),
    };
    normalized == ".."
        || normalized.starts_with("../")
        || normalized.contains("/../")
        || normalized.ends_with("/..")
}

/// Check the input as written for any `..` segment.
pub fn has_parent_segment(raw: &str) -> bool {
    raw.split(['/', '\\']).any(|segment| segment == "..")
}

/// Directory portion of a cleaned path: `.` for a bare name, a root for itself.
pub fn parent_dir(cleaned: &Path) -> PathBuf {
    match cleaned.parent() {
        Some(parent) if parent.as_os_str().is_empty() => PathBuf::from("."),
        Some(parent) => parent.to_path_buf(),
        None => cleaned.to_path_buf(),
    }
}

/// Turn a file path into the absolute, existing directory that contains it.
///
/// Runs the traversal checks of `policy`, derives the parent directory,
/// resolves it against the working directory and checks it exists. The
/// existence check is advisory: nothing stops the directory from vanishing
/// before the caller uses it.
pub fn resolve_containing_directory(
    file_path: &str,
    policy: TraversalPolicy,
    fs: &dyn FileSystem,
) -> Result<PathBuf> {
    if policy == TraversalPolicy::Strict && has_parent_segment(file_path) {
        tracing::warn!("Rejected path with parent segment: {}", file_path);
        return Err(ShellError::PathTraversal(file_path.to_string()));
    }

    let cleaned = clean_path(Path::new(file_path));
    if has_cleaned_traversal(&cleaned.to_string_lossy()) {
        tracing::warn!(
            "Rejected path escaping its base: {} (cleaned: {})",
            file_path,
            cleaned.display()
        );
        return Err(ShellError::PathTraversal(file_path.to_string()));
    }

    let parent = parent_dir(&cleaned);
    let absolute = if parent.is_absolute() {
        parent
    } else {
        let cwd = fs.current_dir().map_err(|source| ShellError::InvalidDirectory {
            path: parent.display().to_string(),
            source,
        })?;
        clean_path(&cwd.join(&parent))
    };

    if !fs.is_dir(&absolute) {
        return Err(ShellError::DirectoryNotFound(
            absolute.display().to_string(),
        ));
    }

    tracing::debug!("Resolved {} to directory {}", file_path, absolute.display());
    Ok(absolute)
}
