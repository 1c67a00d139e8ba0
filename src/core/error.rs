//! Typed errors for the add-include operation
//!
//! Every variant maps to a distinct process exit status.

use std::path::PathBuf;

/// Errors that end an invocation
#[derive(Debug, thiserror::Error)]
pub enum IncludeError {
    #[error("Needs a filename and an include. Use --help for more info.")]
    MissingArguments,

    #[error("Could not read {}", path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unusual include: {0}")]
    InvalidIncludeToken(String),

    #[error("Could not write {}", path.display())]
    FileUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IncludeError {
    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            IncludeError::MissingArguments => 1,
            IncludeError::FileUnreadable { .. } => 2,
            IncludeError::InvalidIncludeToken(_) => 3,
            IncludeError::FileUnwritable { .. } => 4,
        }
    }
}
