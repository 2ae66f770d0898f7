// std imports
use std::path::PathBuf;

// third-party imports
use clap::{Parser, ValueEnum};

// local imports
use crate::settings::OutputFormat;

// ---

/// Parses Scheme-like source text and prints its syntax tree.
#[derive(Parser, Debug)]
#[clap(version)]
pub struct Opt {
    /// Print the token stream instead of the syntax tree.
    #[arg(short, long)]
    pub tokens: bool,

    /// Syntax tree output format [default: from configuration].
    #[arg(short, long, env = "SLICEP_OUTPUT_FORMAT", overrides_with = "output_format")]
    #[arg(value_enum)]
    pub output_format: Option<OutputFormat>,

    /// Color output options.
    #[arg(long, default_value = "auto", env = "SLICEP_COLOR", overrides_with = "color")]
    #[arg(value_enum)]
    pub color: ColorOption,

    /// Configuration file path, may be specified multiple times, use empty value or '-' to skip the default one.
    #[arg(long, env = "SLICEP_CONFIG", num_args = 1)]
    pub config: Vec<String>,

    /// Files to process, '-' or no files means standard input.
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

impl Opt {
    /// Returns configuration files to load and whether the default one should be skipped.
    pub fn config_files(&self) -> (&[String], bool) {
        let (offset, no_default) = self
            .config
            .iter()
            .rposition(|x| x.is_empty() || x == "-")
            .map(|x| (x + 1, true))
            .unwrap_or_default();
        (&self.config[offset..], no_default)
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorOption {
    Auto,
    Always,
    Never,
}
