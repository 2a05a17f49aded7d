//! Visual Studio Code.

use anyhow::Result;

use super::{path_arg, Editor, LaunchTarget, RegistryFingerprint};
use crate::error::LaunchError;

/// Visual Studio Code: opens everything in a new window and has no
/// background-launch mode.
#[derive(Debug, Clone, Copy)]
pub struct VisualStudioCode;

impl Editor for VisualStudioCode {
    fn name(&self) -> &'static str {
        "Visual Studio Code"
    }

    fn cmd_stem(&self) -> &'static str {
        "code"
    }

    fn cmd_extensions(&self) -> &'static [&'static str] {
        // The shim on PATH is `code` inside the install's bin directory,
        // but a Windows install ships it as `code.cmd`.
        &["", ".cmd"]
    }

    fn project_suffix(&self) -> &'static str {
        "code-workspace"
    }

    fn registry_fingerprint(&self) -> Option<RegistryFingerprint> {
        Some(RegistryFingerprint {
            publisher: "Microsoft Corporation",
            display_prefix: "Microsoft Visual Studio Code",
            install_subdir: "bin",
        })
    }

    fn bundle_identifier(&self) -> &'static str {
        "com.microsoft.VSCode"
    }

    fn bundle_bin_dir(&self) -> &'static [&'static str] {
        &["Contents", "Resources", "app", "bin"]
    }

    fn build_launch_args(&self, resolved: &LaunchTarget, background: bool) -> Result<Vec<String>> {
        if background {
            return Err(LaunchError::UnsupportedOption {
                editor: self.name(),
                option: "--background",
            }
            .into());
        }
        Ok(vec!["--new-window".to_owned(), path_arg(resolved.path())?])
    }
}
