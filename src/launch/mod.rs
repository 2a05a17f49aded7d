//! Launch orchestration: from a raw target to a running editor.


use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};
use path_absolutize::Absolutize;

use crate::editor::{Editor, EditorKind, LaunchTarget, Target};
use crate::locate;
use crate::project;

/// Everything needed to start the editor, assembled before any process
/// exists.
#[derive(Debug)]
pub struct Launch {
    /// The discovered editor executable.
    pub program: PathBuf,
    /// Argument list built by the editor adapter.
    pub args: Vec<String>,
    /// What is being opened, for the pre-launch announcement.
    pub opening: PathBuf,
    /// Editor display name, for the announcement.
    pub editor: &'static str,
}

/// Work out what to open and how, without spawning anything.
///
/// Directory targets are offered to the project resolver first; a match
/// replaces the directory as the launch target.
///
/// # Errors
///
/// Discovery exhaustion surfaces as [`crate::LaunchError::NotFound`], a
/// refused option as [`crate::LaunchError::UnsupportedOption`]; both before
/// any process exists.
pub fn plan(kind: EditorKind, name: &str, background: bool) -> Result<Launch> {
    let editor = kind.editor();
    let target = editor.parse_target(name)?;
    let resolved = resolve_target(editor, target);
    let program = locate::find(editor)?;
    finish(editor, resolved, program, background)
}

/// Build the final [`Launch`] once the executable is known. Split from
/// [`plan`] so tests can supply a program without a discoverable install.
fn finish(
    editor: &dyn Editor,
    resolved: LaunchTarget,
    program: PathBuf,
    background: bool,
) -> Result<Launch> {
    let args = editor.build_launch_args(&resolved, background)?;
    Ok(Launch {
        program,
        args,
        opening: resolved.path().to_path_buf(),
        editor: editor.name(),
    })
}

/// Substitute a matching project file for a directory target.
fn resolve_target(editor: &dyn Editor, target: Target) -> LaunchTarget {
    if target.is_dir {
        if let Some(project) = project::resolve(&target.path, editor.project_suffix()) {
            return LaunchTarget::Project(project);
        }
    }
    LaunchTarget::Original(target)
}

/// Choose the editor for `name` when the user did not: the first editor
/// whose project file claims a directory target wins, else `default`.
#[must_use]
pub fn choose_editor(name: &str, default: EditorKind) -> EditorKind {
    let Ok(path) = Path::new(name).absolutize() else {
        return default;
    };
    detect_editor(&path).unwrap_or(default)
}

/// The first editor (in declaration order) with a project file in or next
/// to `path`.
fn detect_editor(path: &Path) -> Option<EditorKind> {
    if !path.is_dir() {
        return None;
    }
    EditorKind::ALL
        .into_iter()
        .find(|kind| project::resolve(path, kind.editor().project_suffix()).is_some())
}

/// Announce the launch on stderr and hand the process over to the editor.
///
/// On Unix the editor's command file replaces this process outright. On
/// Windows the command file runs under `%COMSPEC% /c` (the shims are batch
/// files) and its exit status is forwarded.
///
/// # Errors
///
/// Fails when the handoff itself fails; a successfully started editor's
/// exit status is `Ok` regardless of its value.
pub fn run(launch: &Launch) -> Result<i32> {
    eprintln!("Opening {} with {}", launch.opening.display(), launch.editor);
    hand_off(launch)
}

#[cfg(unix)]
fn hand_off(launch: &Launch) -> Result<i32> {
    use std::os::unix::process::CommandExt;

    // exec only returns on failure
    let err = Command::new(&launch.program).args(&launch.args).exec();
    Err(err).with_context(|| format!("Failed to exec {}", launch.program.display()))
}

#[cfg(windows)]
fn hand_off(launch: &Launch) -> Result<i32> {
    let comspec = std::env::var_os("COMSPEC").context("COMSPEC is not set")?;
    let status = Command::new(comspec)
        .arg("/c")
        .arg(&launch.program)
        .args(&launch.args)
        .status()
        .with_context(|| format!("Failed to run {}", launch.program.display()))?;
    Ok(status.code().unwrap_or(1))
}

#[cfg(not(any(unix, windows)))]
fn hand_off(_launch: &Launch) -> Result<i32> {
    anyhow::bail!("Launching editors is not supported on this platform")
}
