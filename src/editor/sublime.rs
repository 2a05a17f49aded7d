//! Sublime Text 3.

use std::ffi::OsStr;

use anyhow::Result;
use once_cell::sync::Lazy;
use regex::Regex;

use super::{path_arg, Editor, LaunchTarget, Target};

/// A target name with an optional trailing `:line[:col]` position.
static POSITION_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([^:]+)(?::\d+(?::\d+)?)?$").unwrap());

/// Sublime Text 3: understands `file:line[:col]` targets, a non-activating
/// background mode, and opens project files with `--project`.
#[derive(Debug, Clone, Copy)]
pub struct SublimeText3;

impl Editor for SublimeText3 {
    fn name(&self) -> &'static str {
        "Sublime Text 3"
    }

    fn cmd_stem(&self) -> &'static str {
        "subl"
    }

    fn cmd_extensions(&self) -> &'static [&'static str] {
        &[""]
    }

    fn project_suffix(&self) -> &'static str {
        "sublime-project"
    }

    fn bundle_identifier(&self) -> &'static str {
        "com.sublimetext.3"
    }

    fn bundle_bin_dir(&self) -> &'static [&'static str] {
        &["Contents", "SharedSupport", "bin"]
    }

    fn supports_background(&self) -> bool {
        true
    }

    fn parse_target(&self, raw: &str) -> Result<Target> {
        // `file.py:42:5` must resolve as `file.py` for filesystem decisions;
        // the editor still receives the positional form for file targets.
        let name = POSITION_SUFFIX
            .captures(raw)
            .and_then(|captures| captures.get(1))
            .map_or(raw, |stripped| stripped.as_str());
        Target::resolve(raw, name)
    }

    fn build_launch_args(&self, resolved: &LaunchTarget, background: bool) -> Result<Vec<String>> {
        let mut args = Vec::new();
        if background {
            args.push("--background".to_owned());
        }
        match resolved {
            LaunchTarget::Project(project) => {
                args.push("--project".to_owned());
                args.push(path_arg(project)?);
            }
            LaunchTarget::Original(target) if is_project_file(target, self.project_suffix()) => {
                args.push("--project".to_owned());
                args.push(path_arg(&target.path)?);
            }
            LaunchTarget::Original(target) if target.is_dir => {
                args.push("--new-window".to_owned());
                args.push(path_arg(&target.path)?);
            }
            LaunchTarget::Original(target) => {
                args.push("--new-window".to_owned());
                args.push(target.argument.clone());
            }
        }
        Ok(args)
    }
}

/// Whether the target itself is one of this editor's project files.
fn is_project_file(target: &Target, suffix: &str) -> bool {
    target.path.extension().and_then(OsStr::to_str) == Some(suffix)
}
