//! Driver: resolve the input path, run the extractor, write the document.

use std::{
    collections::BTreeMap,
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use colored::Colorize;

use super::args::Arguments;
use crate::{
    config,
    document::{ResultDocument, write_document},
    scanner::scan_css_files,
    tokens::{self, TokenRecord},
};

/// Outcome of a successful run, consumed by the reporter.
#[derive(Debug)]
pub struct RunSummary {
    pub output: PathBuf,
    pub files_analyzed: usize,
    pub skipped_count: usize,
}

pub fn run(args: Arguments) -> Result<RunSummary> {
    let cwd = env::current_dir().context("Failed to resolve current directory")?;
    let config = config::load_config(&cwd)?;

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(&config.output));

    // Config patterns first, then command-line additions
    let mut ignores = config.ignores;
    ignores.extend(args.ignore);

    let (document, files_analyzed, skipped_count) = if args.path.is_file() {
        let record = analyze_file(&args.path, args.verbose)?;
        (ResultDocument::File(record), 1, 0)
    } else if args.path.is_dir() {
        let scan = scan_css_files(&args.path, &ignores, args.verbose);
        let mut records = BTreeMap::new();
        for file in &scan.files {
            let record = analyze_file(file, args.verbose)?;
            records.insert(file.to_string_lossy().into_owned(), record);
        }
        let count = records.len();
        (
            ResultDocument::Directory(records),
            count,
            scan.skipped_count,
        )
    } else {
        bail!("{} is not a valid file or directory", args.path.display());
    };

    write_document(&output, &document)?;

    Ok(RunSummary {
        output,
        files_analyzed,
        skipped_count,
    })
}

fn analyze_file(path: &Path, verbose: bool) -> Result<TokenRecord> {
    if verbose {
        eprintln!("{}", format!("Analyzing {}", path.display()).dimmed());
    }
    let css = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    Ok(tokens::analyze(&css))
}
