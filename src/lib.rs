//! Smart-open files and project workspaces in the right editor.
//!
//! Given a target (default `.`), work out what actually ought to be opened:
//! the target itself, or an editor project file found in or next to a
//! directory target by fuzzy name match. Then find the editor's executable
//! (`PATH` first, then the platform's own install metadata) and hand the
//! process over to it.

pub mod config;
pub mod editor;
pub mod error;
pub mod fuzzy;
pub mod launch;
pub mod locate;
pub mod project;

pub use config::Config;
pub use editor::EditorKind;
pub use error::LaunchError;
