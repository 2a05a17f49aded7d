//! Project-file resolution for directory targets.
//!
//! Editors keep per-project files next to the code they describe: either
//! inside the directory (`widget/widget.code-workspace`) or as a sibling
//! (`widget.code-workspace` next to `widget/`). Opening the project file is
//! almost always what the user meant when they name the directory.


use std::path::{Path, PathBuf};

use crate::fuzzy::similar;

/// Find the project file belonging to `dir`, if there is one.
///
/// Two passes, first hit wins: the entries of `dir` itself, then the entries
/// of its parent. A candidate must carry the `suffix` extension and a stem
/// fuzzily matching `dir`'s basename. Entries are taken in enumeration
/// order, so with several near-identical candidates in one directory the
/// winner is whichever the OS lists first.
#[must_use]
pub fn resolve(dir: &Path, suffix: &str) -> Option<PathBuf> {
    if !dir.is_dir() {
        return None;
    }
    let name = dir.file_name()?.to_str()?;
    match_in(dir, name, suffix).or_else(|| match_in(dir.parent()?, name, suffix))
}

/// First entry of `search_dir` named like `name` with the `suffix`
/// extension. Unreadable directories and non-UTF-8 entries count as no
/// candidates.
fn match_in(search_dir: &Path, name: &str, suffix: &str) -> Option<PathBuf> {
    for entry in search_dir.read_dir().ok()? {
        let Ok(entry) = entry else { continue };
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some(suffix) {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };
        if similar(name, stem) {
            return Some(path);
        }
    }
    None
}
