use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use kp_core::entities::Dataset;
use kp_core::io::ext_repr::ExtDataset;
use log::{LevelFilter, info};
use tempfile::NamedTempFile;

use crate::EPOCH;
use crate::config::BenchConfig;
use crate::report::Report;

pub mod cli;

pub fn read_dataset(path: &Path) -> Result<Dataset> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("could not read dataset file: {}", path.display()))?;
    let ext_dataset = text
        .parse::<ExtDataset>()
        .with_context(|| format!("could not parse dataset file: {}", path.display()))?;
    Ok(kp_core::io::import(&ext_dataset))
}

pub fn read_config(path: &Path) -> Result<BenchConfig> {
    let file = File::open(path)
        .with_context(|| format!("could not open config file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).context("incorrect config file format")
}

/// Writes the report as CSV.
/// The rows go to a temporary file next to `path` which only replaces `path` once it is complete,
/// a failed write never leaves a partial report behind.
pub fn write_report(report: &Report, path: &Path) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let tmp_file = NamedTempFile::new_in(dir)
        .with_context(|| format!("could not create report file in: {}", dir.display()))?;

    let mut writer = BufWriter::new(tmp_file);
    let tmp_file = report
        .write_csv(&mut writer)
        .and_then(|_| writer.into_inner().map_err(|e| e.into_error()))
        .with_context(|| format!("could not write report file: {}", path.display()))?;
    tmp_file
        .persist(path)
        .with_context(|| format!("could not move report into place: {}", path.display()))?;

    info!(
        "[IO] report written to {:?}",
        fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
    );
    Ok(())
}

/// Installs a logger on stderr, stdout is reserved for the report.
/// Lines are stamped with the time since [`EPOCH`] and the emitting thread.
pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            let elapsed = EPOCH.elapsed();
            let secs = elapsed.as_secs();
            out.finish(format_args!(
                "{:>5} +{}:{:02}:{:02}.{:03} [{}] {}",
                record.level(),
                secs / 3600,
                (secs / 60) % 60,
                secs % 60,
                elapsed.subsec_millis(),
                std::thread::current().name().unwrap_or("-"),
                message
            ))
        })
        .level(level_filter)
        .chain(std::io::stderr())
        .apply()
        .context("could not install logger")?;
    info!("[IO] run started at {}", jiff::Timestamp::now());
    Ok(())
}
