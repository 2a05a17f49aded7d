//! Editor adapters: everything that differs between supported editors.
//!
//! Each editor contributes its identity (command stem, project-file suffix,
//! install fingerprints) and an argument builder. The rest of the crate
//! talks to [`Editor`] and never branches on a concrete editor.

mod sublime;
mod vscode;


pub use sublime::SublimeText3;
pub use vscode::VisualStudioCode;

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use path_absolutize::Absolutize;

/// The fixed set of supported editors, in auto-detection order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKind {
    /// Visual Studio Code.
    VsCode,
    /// Sublime Text 3.
    SublimeText3,
}

impl EditorKind {
    /// Every supported editor, in auto-detection order.
    pub const ALL: [Self; 2] = [Self::VsCode, Self::SublimeText3];

    /// The adapter implementing this editor's behavior.
    #[must_use]
    pub const fn editor(self) -> &'static dyn Editor {
        match self {
            Self::VsCode => &VisualStudioCode,
            Self::SublimeText3 => &SublimeText3,
        }
    }

    /// Look up an editor by its command stem (`code`, `subl`).
    #[must_use]
    pub fn from_stem(stem: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.editor().cmd_stem() == stem)
    }
}

impl fmt::Display for EditorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.editor().name())
    }
}

/// How an editor shows up in the Windows uninstall registry, and where its
/// command file lives below the recorded install location.
#[derive(Debug, Clone, Copy)]
pub struct RegistryFingerprint {
    /// Exact `Publisher` value the uninstall entry must carry.
    pub publisher: &'static str,
    /// Prefix the `DisplayName` value must start with.
    pub display_prefix: &'static str,
    /// Subdirectory of `InstallLocation` holding the command file.
    pub install_subdir: &'static str,
}

/// A launch target, absolutized and classified once at parse time.
///
/// Adapters never touch the filesystem after this point; every fact they
/// need is captured here or by the project resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Absolute path used for filesystem decisions (any positional suffix
    /// removed).
    pub path: PathBuf,
    /// Absolute form of the raw input, positional suffix intact. This is
    /// what the editor receives for plain file targets.
    pub argument: String,
    /// Whether `path` named a directory when the target was parsed.
    pub is_dir: bool,
}

impl Target {
    /// Absolutize and classify a raw target. `name` is the filesystem-facing
    /// form (an adapter may have removed a `:line[:col]` suffix from `raw`).
    fn resolve(raw: &str, name: &str) -> Result<Self> {
        let path = absolutize(name)?;
        let argument = if raw == name {
            path_arg(&path)?
        } else {
            path_arg(&absolutize(raw)?)?
        };
        Ok(Self {
            is_dir: path.is_dir(),
            path,
            argument,
        })
    }
}

/// What ultimately gets opened: the target as given, or the project file
/// that superseded it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchTarget {
    /// The user's target, kept as-is.
    Original(Target),
    /// A project file found next to or inside a directory target.
    Project(PathBuf),
}

impl LaunchTarget {
    /// The filesystem path of whatever will be opened.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Original(target) => &target.path,
            Self::Project(project) => project,
        }
    }
}

/// The capability surface every supported editor implements.
pub trait Editor {
    /// Human-readable name used in messages.
    fn name(&self) -> &'static str;

    /// Stem of the command file the discovery strategies look for.
    fn cmd_stem(&self) -> &'static str;

    /// Candidate command-file extensions, tried in order on Windows.
    fn cmd_extensions(&self) -> &'static [&'static str];

    /// Extension (without the dot) of this editor's project files.
    fn project_suffix(&self) -> &'static str;

    /// Uninstall-registry fingerprint, for editors installable per-machine
    /// or per-user on Windows.
    fn registry_fingerprint(&self) -> Option<RegistryFingerprint> {
        None
    }

    /// macOS bundle identifier answered by the Spotlight metadata index.
    fn bundle_identifier(&self) -> &'static str;

    /// Components of the command-file directory inside the application
    /// bundle.
    fn bundle_bin_dir(&self) -> &'static [&'static str];

    /// Whether the editor can launch without stealing focus.
    fn supports_background(&self) -> bool {
        false
    }

    /// Parse the raw CLI target into an absolutized [`Target`].
    fn parse_target(&self, raw: &str) -> Result<Target> {
        Target::resolve(raw, raw)
    }

    /// Format the argument list for a resolved launch target.
    ///
    /// Pure formatting over facts captured earlier; refuses options the
    /// editor cannot honor before any process exists.
    fn build_launch_args(&self, resolved: &LaunchTarget, background: bool) -> Result<Vec<String>>;
}

fn absolutize(name: &str) -> Result<PathBuf> {
    Ok(Path::new(name)
        .absolutize()
        .with_context(|| format!("Failed to resolve {name}"))?
        .to_path_buf())
}

/// Convert a path into a launch argument, rejecting non-UTF-8.
fn path_arg(path: &Path) -> Result<String> {
    path.to_str()
        .map(str::to_owned)
        .with_context(|| format!("Path {} contains non-UTF-8 characters", path.display()))
}
