use std::io::{self, BufRead, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use stringmop::{FuzzExtractions, MatchOptions, NormalizeOptions, fuzz_replace_with, normalize_with};
use tracing::{info, info_span};

use crate::cli::{NormalizeArgs, OutputFormatArg, ReplaceArgs};
use stringmop_cli::input::load_strings;
use stringmop_cli::output::{print_table, write_csv, write_json};

pub fn run_normalize(args: &NormalizeArgs) -> Result<()> {
    let options = NormalizeOptions::new()
        .with_uppercase(args.uppercase)
        .with_collapse_whitespace(!args.keep_whitespace);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.inputs.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("read stdin")?;
            writeln!(out, "{}", normalize_with(&line, &options)).context("write stdout")?;
        }
    } else {
        for input in &args.inputs {
            writeln!(out, "{}", normalize_with(input, &options)).context("write stdout")?;
        }
    }
    Ok(())
}

pub fn run_replace(args: &ReplaceArgs) -> Result<FuzzExtractions> {
    let span = info_span!("replace", sources = %args.sources.display());
    let _guard = span.enter();

    let options = MatchOptions::new()
        .with_score_cutoff(args.cutoff)
        .with_scorer(args.scorer.into());
    options.validate().context("invalid --cutoff")?;

    let sources = load_strings(&args.sources).context("load sources")?;
    let candidates = load_strings(&args.candidates).context("load candidates")?;

    let started = Instant::now();
    let result = fuzz_replace_with(&sources, &candidates, &options);
    info!(
        sources = sources.len(),
        candidates = candidates.len(),
        matched = result.matched_count(),
        elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        "replacement complete"
    );
    Ok(result)
}

pub fn print_result(result: &FuzzExtractions, format: OutputFormatArg) -> Result<()> {
    match format {
        OutputFormatArg::Table => {
            print_table(result);
            Ok(())
        }
        OutputFormatArg::Json => write_json(result, io::stdout().lock()),
        OutputFormatArg::Csv => write_csv(result, io::stdout().lock()),
    }
}
