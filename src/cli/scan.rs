use std::path::PathBuf;

use serde::Serialize;

use crate::config::{ExplainConfig, OutputFormat};
use crate::error::Result;
use crate::scan::{annotate_with_report, render_inline, Annotation, ScanReport};

const STDIN_SOURCE: &str = "<stdin>";

/// One annotation with its location, as written in JSON mode.
#[derive(Debug, Serialize)]
struct ScanHit<'a> {
    source: &'a str,
    line: usize,
    #[serde(flatten)]
    annotation: &'a Annotation,
}

/// Execute the `scan` command over `files`, or stdin when empty.
pub fn execute(files: &[PathBuf], config: &ExplainConfig) -> Result<bool> {
    let mut total = ScanReport::default();

    if files.is_empty() {
        let content = std::io::read_to_string(std::io::stdin())?;
        total.merge(print_source(STDIN_SOURCE, &content, config)?);
    }

    for path in files {
        let source = path.display().to_string();
        if config.is_excluded(&source) {
            tracing::info!(source = %source, "skipping excluded source");
            continue;
        }
        let content = std::fs::read_to_string(path)?;
        total.merge(print_source(&source, &content, config)?);
    }

    let summary = format!(
        "{} expression(s) translated, {} rejected",
        total.translated, total.rejected
    );
    if config.format == OutputFormat::Text && !config.show_inline {
        println!("\n{}", summary);
    } else {
        eprintln!("{}", summary);
    }

    Ok(true)
}

fn print_source(source: &str, content: &str, config: &ExplainConfig) -> Result<ScanReport> {
    let (lines, report) = scan_source(source, content, config)?;
    for line in lines {
        println!("{}", line);
    }
    Ok(report)
}

/// Annotate `content` line by line and format the output lines.
pub fn scan_source(
    source: &str,
    content: &str,
    config: &ExplainConfig,
) -> Result<(Vec<String>, ScanReport)> {
    let mut output = Vec::new();
    let mut report = ScanReport::default();

    for (index, line) in content.lines().enumerate() {
        let (segments, line_report) = annotate_with_report(line);
        report.merge(line_report);

        if config.show_inline && config.format == OutputFormat::Text {
            output.push(render_inline(&segments));
            continue;
        }

        for annotation in segments.iter().filter_map(|s| s.annotation()) {
            let line = index + 1;
            let formatted = match config.format {
                OutputFormat::Json => serde_json::to_string(&ScanHit {
                    source,
                    line,
                    annotation,
                })?,
                OutputFormat::Text => format!(
                    "{}:{}: {} => {}",
                    source, line, annotation.display, annotation.translation
                ),
            };
            output.push(formatted);
        }
    }

    Ok((output, report))
}
