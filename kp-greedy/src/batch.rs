use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use itertools::Itertools;
use log::{error, info};
use rayon::ThreadPoolBuilder;
use rayon::prelude::*;
use thousands::Separable;

use crate::config::BenchConfig;
use crate::io;
use crate::report::{DatasetResult, Report};
use crate::runner;

/// Lists the regular files directly inside `dir`.
/// Failing to read the directory is fatal for the whole batch.
pub fn enumerate_sources(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut sources = vec![];
    for entry in fs::read_dir(dir)
        .with_context(|| format!("could not open data directory: {}", dir.display()))?
    {
        let entry =
            entry.with_context(|| format!("could not read data directory: {}", dir.display()))?;
        let path = entry.path();
        if path.is_file() {
            sources.push(path);
        }
    }
    info!(
        "[BATCH] found {} datasets in {}",
        sources.len(),
        dir.display()
    );
    Ok(sources.into_iter().sorted().collect_vec())
}

/// Runs every source independently and collects the results into a [`Report`].
pub fn run_batch(sources: &[PathBuf], config: &BenchConfig) -> Result<Report> {
    let start = Instant::now();

    let results: Vec<DatasetResult> = match config.parallel {
        false => sources.iter().map(|s| runner::run(s)).collect(),
        true => {
            let pool = ThreadPoolBuilder::new()
                .num_threads(config.n_workers.unwrap_or(0))
                .thread_name(|i| format!("worker-{i}"))
                .build()
                .context("could not build worker pool")?;
            info!(
                "[BATCH] solving on a pool of {} workers",
                pool.current_num_threads()
            );
            pool.install(|| sources.par_iter().map(|s| runner::run(s)).collect())
        }
    };

    let report = Report::new(results);

    info!(
        "[BATCH] solved {} datasets in {:.3}s, total value {}",
        report.len(),
        start.elapsed().as_secs_f64(),
        report.total_value().separate_with_commas()
    );

    Ok(report)
}

/// Full batch: enumerate `data_dir`, solve every dataset, print the summary to `console` and write the CSV report.
/// If the data directory cannot be enumerated nothing is solved, printed or written.
pub fn benchmark<W: Write>(
    data_dir: &Path,
    report_file: &Path,
    config: &BenchConfig,
    console: &mut W,
) -> Result<Report> {
    let sources = enumerate_sources(data_dir).inspect_err(|e| {
        error!("[BATCH] aborting, no report written: {e:#}");
    })?;

    let report = run_batch(&sources, config)?;

    report
        .render(console)
        .and_then(|_| console.flush())
        .context("could not print summary")?;

    io::write_report(&report, report_file)?;

    Ok(report)
}
