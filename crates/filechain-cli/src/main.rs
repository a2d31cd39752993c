//! filechain - route file paths through a chain of extension handlers.
//!
//! Each path is submitted to the head of the canonical
//! `xml -> json -> csv -> txt` chain and walks it until a handler claims
//! it or the chain is exhausted. With no arguments the reference demo
//! list is dispatched.

mod input;
mod output;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use filechain_core::{DispatchReport, HandlerChain, dispatch_all};
use tracing_subscriber::EnvFilter;

/// The reference demo list dispatched when no paths are given.
const DEMO_FILES: &[&str] = &[
    "xxx.json", "yyy.svc", "yyy.csv", "zzz.txt", "aaa.xml", "bbb.log", "ccc.json", "ddd",
];

#[derive(Parser, Debug)]
#[command(name = "filechain", version)]
#[command(about = "Route file paths through a chain of extension handlers")]
struct Cli {
    /// Paths to dispatch; defaults to the built-in demo list
    paths: Vec<PathBuf>,

    /// Read additional paths from a file, one per line ('#' starts a comment)
    #[arg(long, value_name = "FILE")]
    files_from: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: Format,

    /// Suppress the trailing summary line in text output
    #[arg(long)]
    no_summary: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("error: {err:#}");
        std::process::exit(2);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut paths = cli.paths;
    if let Some(list) = &cli.files_from {
        let listed = input::read_path_list(list)
            .with_context(|| format!("reading path list {}", list.display()))?;
        tracing::debug!(count = listed.len(), list = %list.display(), "loaded path list");
        paths.extend(listed);
    }
    if paths.is_empty() {
        paths = DEMO_FILES.iter().map(PathBuf::from).collect();
    }

    let chain = HandlerChain::with_defaults();
    tracing::debug!(handlers = chain.len(), paths = paths.len(), "dispatching");

    let report = DispatchReport::new(dispatch_all(&chain, paths));

    match cli.format {
        Format::Text => output::render_text(&report, !cli.no_summary),
        Format::Json => output::render_json(&report)?,
    }

    Ok(())
}
