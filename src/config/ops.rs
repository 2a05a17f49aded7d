use anyhow::{Context, Result};
use std::path::PathBuf;

use super::{Config, DEFAULT_TOOL_ENV};
use crate::editor::EditorKind;

impl Config {
    /// Location of the configuration file.
    ///
    /// # Errors
    ///
    /// Fails when the home directory cannot be determined.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".config").join("openit").join("config.toml"))
    }

    /// Load the configuration, or defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Fails when the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        Ok(config)
    }

    /// The editor used when neither a flag nor a project file picks one.
    ///
    /// The `OPEN_PROJECT_DEFAULT_TOOL` environment variable wins over the
    /// config file; Visual Studio Code is the last resort.
    ///
    /// # Errors
    ///
    /// Fails when the configured stem names no known editor; a typo should
    /// not silently open the wrong program.
    pub fn default_editor(&self) -> Result<EditorKind> {
        let env_choice = std::env::var(DEFAULT_TOOL_ENV)
            .ok()
            .filter(|value| !value.is_empty());
        resolve_stem(env_choice.as_deref().or(self.editor.default.as_deref()))
    }
}

/// Map a configured command stem to an editor; `None` means the built-in
/// default.
pub(super) fn resolve_stem(stem: Option<&str>) -> Result<EditorKind> {
    match stem {
        None => Ok(EditorKind::VsCode),
        Some(stem) => EditorKind::from_stem(stem).with_context(|| {
            format!("Unknown default editor {stem:?} (expected one of: code, subl)")
        }),
    }
}
