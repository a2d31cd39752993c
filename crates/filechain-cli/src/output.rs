//! Rendering of dispatch reports (text and JSON).

use colored::Colorize;
use filechain_core::{DispatchReport, Outcome};

/// Render the report as human-readable notification lines.
///
/// One block per dispatched path: the submission line, then either the
/// recognition line or the skip line, then a blank separator.
pub fn render_text(report: &DispatchReport, with_summary: bool) {
    for record in &report.records {
        println!("file {} submitted to the chain", record.path.display());
        match record.outcome {
            Outcome::Recognized(kind) => println!(
                "{} file recognized as {} and will be processed accordingly",
                "->".green(),
                kind.tag().green().bold()
            ),
            Outcome::Unrecognized => println!(
                "{} file was not recognized by any handler and was skipped",
                "!!!".yellow()
            ),
        }
        println!();
    }

    if with_summary {
        println!(
            "{}: {} recognized, {} skipped",
            "summary".bold(),
            report.summary.recognized,
            report.summary.skipped
        );
    }
}

/// Render the report as pretty-printed JSON on stdout.
pub fn render_json(report: &DispatchReport) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
