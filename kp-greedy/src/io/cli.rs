use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

/// Solve every dataset in a directory with the value-density greedy heuristic and report the outcome
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Directory with one dataset per regular file
    #[arg(short, long, value_name = "FOLDER")]
    pub data_dir: PathBuf,
    /// Destination of the CSV report
    #[arg(short, long, value_name = "FILE", default_value = "greedy_results.csv")]
    pub report_file: PathBuf,
    /// JSON batch configuration, defaults are used when omitted
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    /// Verbosity of the log on stderr
    #[arg(short, long, value_name = "LEVEL", default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,
}
