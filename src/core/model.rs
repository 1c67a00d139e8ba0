//! Insertion report model
//!
//! Every successful insertion is summarized as an `InsertReport` before
//! rendering output.

use serde::{Deserialize, Serialize};

use crate::directives::text::Newline;

/// Where the insertion offset came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    /// Forced to the start of the file
    Top,
    /// Chosen by the insertion planner
    Planned,
}

/// Summary of one include insertion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertReport {
    /// Path of the modified file, as given on the command line
    pub path: String,

    /// The directive text that was inserted
    pub directive: String,

    /// Byte offset the directive was inserted before
    pub offset: usize,

    /// 1-based line of the inserted directive in the new contents
    pub line: usize,

    /// Newline style used around the directive
    pub newline: Newline,

    pub placement: Placement,

    /// Whether `.h` suffixing was disabled
    pub cpp_style: bool,

    /// Whether the file was left untouched
    #[serde(default)]
    pub dry_run: bool,

    /// xxh3 hash of the new file contents
    pub hash: String,
}
