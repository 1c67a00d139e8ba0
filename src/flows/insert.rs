//! Insert flow - add an include directive to a source file
//!
//! read -> plan (or top) -> normalize -> splice -> write back.
//! There is no locking between the read and the write.

use anyhow::Result;
use std::path::Path;
use tracing::debug;

use crate::core::error::IncludeError;
use crate::core::file_io::{read_source, write_source};
use crate::core::model::{InsertReport, Placement};
use crate::core::render::{RenderConfig, Renderer};
use crate::core::util::{hash_bytes, is_cpp_path};
use crate::directives::normalize::normalize;
use crate::directives::plan::{plan, KeywordMask};
use crate::directives::splice::{inserted_line, splice};
use crate::directives::text::{Newline, SourceText};

/// Options for a single insertion
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertOptions {
    /// Expand the include token into a canonical directive
    pub normalize: bool,
    /// Insert at offset 0 instead of planning
    pub at_top: bool,
    /// Never append `.h`
    pub cpp_style: bool,
    /// Compute the result without writing the file
    pub dry_run: bool,
}

/// Result of an insertion
#[derive(Debug, Clone)]
pub struct InsertOutcome {
    /// New file contents
    pub contents: String,
    pub report: InsertReport,
}

/// New contents plus where the directive landed
#[derive(Debug, Clone)]
pub struct PlannedInsert {
    pub contents: String,
    pub offset: usize,
    pub line: usize,
    pub placement: Placement,
    pub newline: Newline,
}

/// Build the new contents for `text` without touching the filesystem
pub fn insert_into(text: &str, directive: &str, at_top: bool) -> PlannedInsert {
    let source = SourceText::new(text);

    let (offset, placement) = if at_top {
        (0, Placement::Top)
    } else {
        (plan(&source), Placement::Planned)
    };

    debug!(
        mask = KeywordMask::of(&source).bits(),
        newline = ?source.newline(),
        offset,
        ?placement,
        "planned insertion"
    );

    PlannedInsert {
        contents: splice(&source, offset, directive),
        offset,
        line: inserted_line(&source, offset),
        placement,
        newline: source.newline(),
    }
}

/// Add `include` to the file at `path`
pub fn add_include(
    path: &Path,
    include: &str,
    opts: InsertOptions,
) -> Result<InsertOutcome, IncludeError> {
    let cpp_style = opts.cpp_style || is_cpp_path(path);
    debug!(cpp_style, "C++ mode");

    let directive = if opts.normalize {
        normalize(include, cpp_style)?
    } else {
        include.to_string()
    };

    let text = read_source(path)?;
    let planned = insert_into(&text, &directive, opts.at_top);
    let contents = planned.contents;

    if opts.dry_run {
        debug!(path = %path.display(), "dry run, file left untouched");
    } else {
        write_source(path, &contents)?;
        debug!(path = %path.display(), bytes = contents.len(), "wrote file");
    }

    let report = InsertReport {
        path: path.display().to_string(),
        directive,
        offset: planned.offset,
        line: planned.line,
        newline: planned.newline,
        placement: planned.placement,
        cpp_style,
        dry_run: opts.dry_run,
        hash: hash_bytes(contents.as_bytes()),
    };

    Ok(InsertOutcome { contents, report })
}

/// Run the add-include command
pub fn run_insert(
    path: &Path,
    include: &str,
    opts: InsertOptions,
    quiet: bool,
    render_config: RenderConfig,
) -> Result<()> {
    let outcome = add_include(path, include, opts)?;

    if opts.dry_run {
        print!("{}", outcome.contents);
    } else if !quiet {
        let renderer = Renderer::with_config(render_config);
        println!("{}", renderer.render(&[outcome.report]));
    }

    Ok(())
}
