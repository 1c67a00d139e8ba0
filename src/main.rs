//! addinclude - Add an include directive to a C/C++ file
//!
//! addinclude provides:
//! - Placement of the new include next to related directives
//! - Expansion of short include names into full directives
//! - Newline style preservation (LF / CRLF)

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod core;
mod directives;
mod flows;

use crate::core::error::IncludeError;

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "addinclude=debug"
    } else {
        "addinclude=warn"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = cli::Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }
    init_tracing(cli.verbose);

    if let Err(err) = cli::run(cli) {
        eprintln!("{} {:#}", "error:".red().bold(), err);
        let code = err
            .downcast_ref::<IncludeError>()
            .map(IncludeError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}
