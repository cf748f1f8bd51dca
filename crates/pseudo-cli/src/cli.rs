//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use pseudo_model::{AnonymizationMode, ColumnSpec, Engine, Locale, SafeStrategy};

#[derive(Parser)]
#[command(
    name = "pseudonymize",
    version,
    about = "Replace sensitive columns of a table with consistent synthetic values",
    long_about = "Replace sensitive columns of a CSV or Parquet table with synthetic values.\n\n\
                  Equal originals always receive equal replacements within a column.\n\
                  Safe mode additionally guarantees that distinct originals stay distinct."
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

    /// Allow original cell values in debug logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Anonymize a table and write the result.
    Anonymize(AnonymizeArgs),

    /// Write a synthetic demo dataset.
    Generate(GenerateArgs),

    /// List the supported semantic types and their classifier keywords.
    Types,
}

#[derive(Parser)]
pub struct AnonymizeArgs {
    /// Input table (.csv, .parquet, .pq or .gzip).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output table (default: <INPUT_STEM>_pseudo.<EXT> next to the input).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Substitution mode.
    #[arg(long = "mode", value_enum)]
    pub mode: Option<ModeArg>,

    /// How safe mode draws distinct values.
    #[arg(long = "strategy", value_enum)]
    pub strategy: Option<StrategyArg>,

    /// Execution engine.
    #[arg(long = "engine", value_enum)]
    pub engine: Option<EngineArg>,

    /// Draws per new value before streaming safe mode gives up (default
    /// 10000). 0 samples without limit, which never stops on an exhausted
    /// generator.
    #[arg(long = "max-retries", value_name = "N")]
    pub max_retries: Option<usize>,

    /// Row partitions for the partitioned engine.
    #[arg(long = "partitions", value_name = "N")]
    pub partitions: Option<usize>,

    /// Locale of generated values (en, fr_FR, de_DE, pt_BR, zh_CN, ja_JP).
    #[arg(long = "language", value_name = "LOCALE")]
    pub language: Option<Locale>,

    /// Seed for reproducible output.
    #[arg(long = "seed", value_name = "N")]
    pub seed: Option<u64>,

    /// Anonymize COL as TYPE instead of classifying column names. Repeatable.
    #[arg(long = "column", value_name = "COL=TYPE")]
    pub columns: Vec<ColumnSpec>,

    /// TOML file with run options; flags take precedence.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Anonymize and report without writing the output table.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Number of rows.
    #[arg(long = "rows", default_value_t = 1000)]
    pub rows: usize,

    /// Output table (.csv or .parquet).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: PathBuf,

    /// Seed for reproducible output.
    #[arg(long = "seed", value_name = "N")]
    pub seed: Option<u64>,

    /// Locale of generated values.
    #[arg(long = "language", value_name = "LOCALE", default_value = "en")]
    pub language: Locale,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Fast,
    Safe,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum StrategyArg {
    Streaming,
    Indexed,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum EngineArg {
    Local,
    Partitioned,
}

impl From<ModeArg> for AnonymizationMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Fast => AnonymizationMode::Fast,
            ModeArg::Safe => AnonymizationMode::Safe,
        }
    }
}

impl From<StrategyArg> for SafeStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Streaming => SafeStrategy::Streaming,
            StrategyArg::Indexed => SafeStrategy::Indexed,
        }
    }
}

impl From<EngineArg> for Engine {
    fn from(arg: EngineArg) -> Self {
        match arg {
            EngineArg::Local => Engine::Local,
            EngineArg::Partitioned => Engine::Partitioned,
        }
    }
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
