//! The failures worth telling apart at the process boundary.
//!
//! Everything else travels as [`anyhow::Error`] with context attached.

/// Launch failures with a defined exit status.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LaunchError {
    /// No discovery strategy produced an executable for the editor.
    #[error("{stem} for {editor} not found on this system")]
    NotFound {
        /// Editor display name, e.g. `Visual Studio Code`.
        editor: &'static str,
        /// Command stem the strategies were looking for, e.g. `code`.
        stem: &'static str,
    },

    /// The selected editor cannot honor a requested launch option.
    #[error("{editor} does not support {option}")]
    UnsupportedOption {
        /// Editor display name.
        editor: &'static str,
        /// The refused command-line option, e.g. `--background`.
        option: &'static str,
    },
}

impl LaunchError {
    /// Exit status for this failure: `2` for refused options, `1` otherwise.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound { .. } => 1,
            Self::UnsupportedOption { .. } => 2,
        }
    }
}
