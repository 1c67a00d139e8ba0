//! Renderer module
//!
//! Renders insertion reports to different output formats: jsonl, json, md

use crate::core::model::{InsertReport, Placement};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Jsonl,
    Json,
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jsonl" => Ok(OutputFormat::Jsonl),
            "json" => Ok(OutputFormat::Json),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl RenderConfig {
    /// Create a new render config with pretty option
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Renderer for insertion reports
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    /// Create a new renderer with render config
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render reports to a string
    pub fn render(&self, reports: &[InsertReport]) -> String {
        match self.config.format {
            OutputFormat::Jsonl => self.render_jsonl(reports),
            OutputFormat::Json => self.render_json(reports),
            OutputFormat::Markdown => self.render_markdown(reports),
        }
    }

    /// Render as JSON Lines (one JSON object per line)
    fn render_jsonl(&self, reports: &[InsertReport]) -> String {
        reports
            .iter()
            .filter_map(|report| {
                if self.config.pretty {
                    serde_json::to_string_pretty(report).ok()
                } else {
                    serde_json::to_string(report).ok()
                }
            })
            .collect::<Vec<_>>()
            .join(if self.config.pretty { "\n\n" } else { "\n" })
    }

    /// Render as a single JSON array
    fn render_json(&self, reports: &[InsertReport]) -> String {
        if self.config.pretty {
            serde_json::to_string_pretty(reports).unwrap_or_else(|_| "[]".to_string())
        } else {
            serde_json::to_string(reports).unwrap_or_else(|_| "[]".to_string())
        }
    }

    /// Render as Markdown
    fn render_markdown(&self, reports: &[InsertReport]) -> String {
        let mut output = String::new();

        for report in reports {
            output.push_str(&format!("### `{}`", report.path));
            output.push_str(&format!(
                " (line {}, byte {})\n",
                report.line, report.offset
            ));

            output.push_str("\n```c\n");
            output.push_str(&report.directive);
            output.push_str("\n```\n\n");

            let placement = match report.placement {
                Placement::Top => "top of file",
                Placement::Planned => "after related directive",
            };
            output.push_str(&format!("- placement: {}\n", placement));
            output.push_str(&format!("- newline: {:?}\n", report.newline));
            if report.cpp_style {
                output.push_str("- C++ style\n");
            }
            if report.dry_run {
                output.push_str("\n> File was not modified (dry run)\n");
            }
            output.push('\n');
        }

        output
    }
}
