//! Editor discovery through the Spotlight metadata index.
//!
//! Application bundles are found by bundle identifier via `mdfind`; the
//! command file then lives at a fixed path inside the bundle. Any `mdfind`
//! failure (including Spotlight being disabled) is a non-match.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::editor::Editor;

const MDFIND: &str = "/usr/bin/mdfind";

/// Ask Spotlight for the editor's application bundle and resolve the
/// command file inside it. The first result line wins.
pub fn discover(editor: &dyn Editor) -> Option<PathBuf> {
    if !Path::new(MDFIND).is_file() {
        return None;
    }
    let output = Command::new(MDFIND)
        .arg(format!(
            "kMDItemCFBundleIdentifier={}",
            editor.bundle_identifier()
        ))
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let bundle = stdout.lines().next().unwrap_or("").trim();
    if bundle.is_empty() {
        return None;
    }

    let mut bin_dir = PathBuf::from(bundle);
    for part in editor.bundle_bin_dir() {
        bin_dir.push(part);
    }
    super::command_in(editor, &bin_dir)
}
