//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::core::error::IncludeError;
use crate::core::render::{OutputFormat, RenderConfig};
use crate::flows::insert::{run_insert, InsertOptions};

/// addinclude - add an include directive to a C/C++ header or source file.
#[derive(Parser, Debug)]
#[command(name = "addinclude")]
#[command(
    author,
    version,
    about,
    long_about = r#"addinclude places a new #include directive in an existing C or C++ file.

The directive is inserted on its own line after the most related existing
directive: an #include inside the first #ifdef/#ifndef block, else the first
#include, else the first #ifdef/#ifndef, else the top of the file.

Include tokens are expanded unless --nofix is given:
- stdlib          -> #include <stdlib.h>
- '"util"'        -> #include "util.h"
- '<stdio>'       -> #include <stdio.h>
- memory (--cpp)  -> #include <memory>

Examples:
    addinclude file.h '#include <string.h>'
    addinclude --top file.h stdlib
    addinclude file.h '"some.h"'
    addinclude file.cpp memory
"#
)]
pub struct Cli {
    /// C/C++ file to modify.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Include to add (bare name, <name>, "name" or a full directive).
    #[arg(value_name = "INCLUDE", allow_hyphen_values = true)]
    pub include: Option<String>,

    /// Don't change the include text.
    #[arg(
        short,
        long,
        long_help = "Insert INCLUDE exactly as given, without expanding it into a\n\
#include directive or appending .h."
    )]
    pub nofix: bool,

    /// Add the include at the top of the file.
    #[arg(
        short,
        long,
        long_help = "Insert at the very start of the file instead of next to related\n\
directives."
    )]
    pub top: bool,

    /// Don't add .h to the include name.
    #[arg(
        long = "cpp",
        visible_alias = "c++",
        long_help = "C++ style: never append .h (e.g. memory -> #include <memory>).\n\n\
This is implied for files with a C++ extension (.cpp, .cc, .cxx, .hpp, ...)."
    )]
    pub cpp: bool,

    /// Print the resulting file instead of writing it.
    #[arg(
        long,
        long_help = "Print the modified file contents to stdout and leave the file untouched."
    )]
    pub dry_run: bool,

    /// Report format (jsonl/json/md).
    #[arg(
        long,
        default_value = "jsonl",
        value_name = "FORMAT",
        env = "ADDINCLUDE_FORMAT",
        long_help = "Select the output format for the insertion report.\n\n\
Supported values:\n\
- jsonl (default)\n\
- json\n\
- md (markdown)"
    )]
    pub format: String,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(long)]
    pub pretty: bool,

    /// Quiet mode (no report).
    #[arg(
        short,
        long,
        long_help = "Do not print the insertion report. Errors are still written to stderr."
    )]
    pub quiet: bool,

    /// Verbose mode (more diagnostics).
    #[arg(
        short,
        long,
        long_help = "Enable debug diagnostics on stderr, such as the C++ mode decision\n\
and the chosen insertion offset. RUST_LOG overrides this."
    )]
    pub verbose: bool,

    /// Disable colored output (when applicable).
    #[arg(long)]
    pub no_color: bool,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let (Some(file), Some(include)) = (cli.file, cli.include) else {
        return Err(IncludeError::MissingArguments.into());
    };

    let format: OutputFormat = cli.format.parse().unwrap_or_default();
    let render_config = RenderConfig::with_pretty(format, cli.pretty);

    let opts = InsertOptions {
        normalize: !cli.nofix,
        at_top: cli.top,
        cpp_style: cli.cpp,
        dry_run: cli.dry_run,
    };

    run_insert(&file, &include, opts, cli.quiet, render_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from(["addinclude", "-n", "-t", "--c++", "a.h", "vector"]).unwrap();
        assert!(cli.nofix);
        assert!(cli.top);
        assert!(cli.cpp);
        assert_eq!(cli.file, Some(PathBuf::from("a.h")));
        assert_eq!(cli.include.as_deref(), Some("vector"));
    }

    #[test]
    fn test_missing_arguments() {
        let cli = Cli::try_parse_from(["addinclude", "a.h"]).unwrap();
        let err = run(cli).unwrap_err();
        let err = err.downcast_ref::<IncludeError>().unwrap();
        assert_eq!(err.exit_code(), 1);
    }
}
