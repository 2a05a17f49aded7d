//! Launcher configuration: one small TOML file and one environment
//! override.

mod ops;


use serde::{Deserialize, Serialize};

/// Environment variable naming the default editor's command stem. It wins
/// over the config file.
pub const DEFAULT_TOOL_ENV: &str = "OPEN_PROJECT_DEFAULT_TOOL";

/// On-disk configuration, read once at startup from
/// `~/.config/openit/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The `[editor]` table.
    pub editor: EditorConfig,
}

/// Editor selection settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Command stem (`code`, `subl`) of the editor used when neither a
    /// flag nor a project file picks one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}
