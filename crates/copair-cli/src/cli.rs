//! CLI argument definitions for the drug pair finder.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{ColorChoice, Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;

use crate::logging::{LogConfig, LogFormat};

/// Minimum number of co-administered instances a pair needs by default.
pub const DEFAULT_MINIMUM_OCCURRENCES: u64 = 25;

#[derive(Parser)]
#[command(
    name = "copair",
    version,
    about = "Find drug pairs co-administered to the same patient on the same date",
    long_about = "Scan a delimited log of drug administrations and report every\n\
                  unordered pair of drugs given to the same patient on the same\n\
                  date in at least a minimum number of administration instances."
)]
pub struct Cli {
    /// Input administration log (patient_id,date,drug_name per line).
    #[arg(long = "in", value_name = "PATH")]
    pub input: PathBuf,

    /// Output file for qualifying pairs (default: <PATH>.min<N>.pairs).
    #[arg(long = "out", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Minimum number of administration instances a pair must appear in.
    #[arg(long = "min", value_name = "N", default_value_t = DEFAULT_MINIMUM_OCCURRENCES)]
    pub min_occurrence: u64,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Build logging configuration from CLI flags with consistent precedence:
    /// `--log-level` beats `-v`/`-q`, and `RUST_LOG` only applies when
    /// neither was given.
    pub fn log_config(&self) -> LogConfig {
        let mut config = LogConfig {
            level_filter: self.verbosity.tracing_level_filter(),
            ..LogConfig::default()
        };
        config.use_env_filter = !(self.verbosity.is_present() || self.log_level.is_some());
        if let Some(level) = self.log_level {
            config.level_filter = match level {
                LogLevelArg::Error => LevelFilter::ERROR,
                LogLevelArg::Warn => LevelFilter::WARN,
                LogLevelArg::Info => LevelFilter::INFO,
                LogLevelArg::Debug => LevelFilter::DEBUG,
                LogLevelArg::Trace => LevelFilter::TRACE,
            };
        }
        config.format = match self.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        };
        config.log_file = self.log_file.clone();
        config.with_ansi = match self.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.log_file.is_none() && io::stderr().is_terminal(),
        };
        config
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
