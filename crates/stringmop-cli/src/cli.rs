//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use stringmop::{DEFAULT_SCORE_CUTOFF, ScorerKind};

#[derive(Parser)]
#[command(
    name = "stringmop",
    version,
    about = "Normalize strings and fuzzy-replace them with their closest candidate",
    long_about = "Normalize free text (case, whitespace, ASCII transliteration) and\n\
                  replace each source string with the most similar candidate above\n\
                  a score cutoff."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the normalized form of each input string.
    Normalize(NormalizeArgs),

    /// Replace source strings with their best-matching candidate.
    Replace(ReplaceArgs),
}

#[derive(Parser)]
pub struct NormalizeArgs {
    /// Strings to normalize. Reads one string per stdin line when omitted.
    #[arg(value_name = "TEXT")]
    pub inputs: Vec<String>,

    /// Fold to uppercase instead of lowercase.
    #[arg(long = "uppercase")]
    pub uppercase: bool,

    /// Keep interior whitespace runs as they are (ends are still stripped).
    #[arg(long = "keep-whitespace")]
    pub keep_whitespace: bool,
}

#[derive(Parser)]
pub struct ReplaceArgs {
    /// File with the strings to match (.json array, .csv first column, or one per line).
    #[arg(long = "sources", value_name = "PATH")]
    pub sources: PathBuf,

    /// File with the replacement candidates, same formats as --sources.
    #[arg(long = "candidates", value_name = "PATH")]
    pub candidates: PathBuf,

    /// Minimum similarity (0-100) for a candidate to be accepted.
    #[arg(long = "cutoff", default_value_t = DEFAULT_SCORE_CUTOFF)]
    pub cutoff: f64,

    /// Similarity algorithm.
    #[arg(long = "scorer", value_enum, default_value = "wratio")]
    pub scorer: ScorerArg,

    /// Output format for the results.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

/// CLI scorer choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum ScorerArg {
    #[value(name = "wratio")]
    WRatio,
    Ratio,
    Levenshtein,
    JaroWinkler,
}

impl From<ScorerArg> for ScorerKind {
    fn from(arg: ScorerArg) -> Self {
        match arg {
            ScorerArg::WRatio => ScorerKind::WRatio,
            ScorerArg::Ratio => ScorerKind::Ratio,
            ScorerArg::Levenshtein => ScorerKind::Levenshtein,
            ScorerArg::JaroWinkler => ScorerKind::JaroWinkler,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
    Csv,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replace_args(extra: &[&str]) -> ReplaceArgs {
        let mut argv = vec!["stringmop", "replace", "--sources", "s.txt", "--candidates", "c.txt"];
        argv.extend_from_slice(extra);
        match Cli::try_parse_from(argv).unwrap().command {
            Command::Replace(args) => args,
            Command::Normalize(_) => panic!("expected replace"),
        }
    }

    #[test]
    fn scorer_defaults_to_wratio() {
        let args = replace_args(&[]);
        assert_eq!(ScorerKind::from(args.scorer), ScorerKind::WRatio);
        assert_eq!(args.cutoff, DEFAULT_SCORE_CUTOFF);
    }

    #[test]
    fn scorer_accepts_other_algorithms() {
        let args = replace_args(&["--scorer", "ratio"]);
        assert_eq!(ScorerKind::from(args.scorer), ScorerKind::Ratio);
        let args = replace_args(&["--scorer", "jaro-winkler"]);
        assert_eq!(ScorerKind::from(args.scorer), ScorerKind::JaroWinkler);
    }
}
