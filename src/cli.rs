//! Command-line argument parsing
//!
//! Flags given here override the matching `config.toml` values.

use clap::Parser;
use std::path::PathBuf;

/// Edit CSV and other delimited text in the terminal
#[derive(Parser, Debug)]
#[command(name = "csvpad", version, about = "Edit CSV and other delimited text")]
pub struct CliArgs {
    /// Delimited file to open (.csv, .tsv or .txt)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Export comma separated output to this path and exit ("-" for stdout)
    #[arg(short = 'o', long, value_name = "OUT")]
    pub output: Option<PathBuf>,

    /// Data rows shown per page
    #[arg(long, value_name = "N")]
    pub rows_per_page: Option<usize>,

    /// Largest input accepted, in bytes
    #[arg(long, value_name = "N")]
    pub max_bytes: Option<u64>,

    /// Reject records whose field count differs from the header
    #[arg(long)]
    pub strict: bool,

    /// Read settings from this file instead of the user config dir
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl CliArgs {
    /// True when `--output -` asks for stdout.
    pub fn output_is_stdout(&self) -> bool {
        self.output
            .as_deref()
            .is_some_and(|path| path.as_os_str() == "-")
    }
}
