//! Executable discovery for the supported editors.
//!
//! Two strategies, tried in order, first success wins: every `PATH`
//! directory, then whatever the platform itself knows about installed
//! applications (the uninstall registry on Windows, the Spotlight metadata
//! index on macOS). Failures inside a strategy mean "nothing found here",
//! never an abort; only total exhaustion is an error.

#[cfg(target_os = "macos")]
mod macos;
#[cfg(target_os = "windows")]
mod windows;

#[cfg(test)]
mod tests;

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::editor::Editor;
use crate::error::LaunchError;

/// Locate the editor's command file, trying each strategy exactly once.
///
/// # Errors
///
/// Returns [`LaunchError::NotFound`] when every strategy comes up empty.
pub fn find(editor: &dyn Editor) -> Result<PathBuf, LaunchError> {
    path_lookup(editor)
        .or_else(|| platform_discover(editor))
        .ok_or_else(|| LaunchError::NotFound {
            editor: editor.name(),
            stem: editor.cmd_stem(),
        })
}

/// Scan the `PATH` environment variable.
fn path_lookup(editor: &dyn Editor) -> Option<PathBuf> {
    let path_var = std::env::var_os("PATH")?;
    scan_path(editor, &path_var)
}

/// Walk a `PATH`-style value in listed order, directory-major. Split from
/// [`path_lookup`] so tests can supply a synthetic value instead of
/// mutating the process environment.
fn scan_path(editor: &dyn Editor, path_var: &OsStr) -> Option<PathBuf> {
    std::env::split_paths(path_var).find_map(|dir| command_in(editor, &dir))
}

/// Look for the editor's command file directly inside `dir`, trying each
/// candidate extension in order.
fn command_in(editor: &dyn Editor, dir: &Path) -> Option<PathBuf> {
    for ext in candidate_extensions(editor) {
        let candidate = dir.join(format!("{}{ext}", editor.cmd_stem()));
        if is_executable_file(&candidate) {
            return Some(candidate);
        }
    }
    None
}

// Windows installs ship shims like `code.cmd`; everywhere else only the
// bare stem exists.
#[cfg(target_os = "windows")]
fn candidate_extensions(editor: &dyn Editor) -> &'static [&'static str] {
    editor.cmd_extensions()
}

#[cfg(not(target_os = "windows"))]
fn candidate_extensions(_editor: &dyn Editor) -> &'static [&'static str] {
    &[""]
}

/// A regular file with at least one execute bit set.
#[cfg(unix)]
fn is_executable_file(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map_or(false, |metadata| {
            metadata.is_file() && metadata.permissions().mode() & 0o111 != 0
        })
}

/// A regular file; execute permission has no Unix-style mode bits here.
#[cfg(not(unix))]
fn is_executable_file(path: &Path) -> bool {
    path.is_file()
}

#[cfg(target_os = "windows")]
fn platform_discover(editor: &dyn Editor) -> Option<PathBuf> {
    windows::discover(editor)
}

#[cfg(target_os = "macos")]
fn platform_discover(editor: &dyn Editor) -> Option<PathBuf> {
    macos::discover(editor)
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn platform_discover(_editor: &dyn Editor) -> Option<PathBuf> {
    None
}
