use std::io;
use std::io::Write;

use itertools::Itertools;
use kp_core::entities::Solution;

pub const CSV_HEADER: &str = "Filename,Max Value,Total Weight,Items Selected,Execution Time (s)";

/// Outcome of solving a single dataset
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetResult {
    /// Identifies the dataset, usually its path
    pub source: String,
    pub max_value: u128,
    pub total_weight: u64,
    pub n_selected: usize,
    /// Seconds spent loading and solving the dataset
    pub exec_time: f64,
}

impl DatasetResult {
    pub fn new(source: String, solution: &Solution, exec_time: f64) -> Self {
        Self {
            source,
            max_value: solution.total_value,
            total_weight: solution.total_weight,
            n_selected: solution.n_selected(),
            exec_time,
        }
    }

    /// Result of a dataset that could not be loaded or contains no items
    pub fn zero(source: String) -> Self {
        Self {
            source,
            max_value: 0,
            total_weight: 0,
            n_selected: 0,
            exec_time: 0.0,
        }
    }
}

/// All results of a batch, sorted by source.
#[derive(Debug, Clone, Default)]
pub struct Report {
    results: Vec<DatasetResult>,
}

impl Report {
    /// Sorts the results by source, regardless of the order in which they were produced.
    pub fn new(results: Vec<DatasetResult>) -> Self {
        let results = results
            .into_iter()
            .sorted_by(|a, b| a.source.cmp(&b.source))
            .collect_vec();
        Self { results }
    }

    pub fn results(&self) -> &[DatasetResult] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Mean execution time in seconds, zero for an empty report
    pub fn avg_exec_time(&self) -> f64 {
        match self.results.len() {
            0 => 0.0,
            n => self.results.iter().map(|r| r.exec_time).sum::<f64>() / n as f64,
        }
    }

    pub fn total_value(&self) -> u128 {
        self.results.iter().map(|r| r.max_value).sum()
    }

    /// Tab separated summary for the console, followed by the aggregates
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.is_empty() {
            return writeln!(out, "No results to display");
        }
        for r in &self.results {
            writeln!(
                out,
                "{}\t{}\t{}\t{}\t{:.3}",
                r.source, r.max_value, r.total_weight, r.n_selected, r.exec_time
            )?;
        }
        writeln!(out, "Average time: {:.3}s", self.avg_exec_time())?;
        writeln!(out, "Total value: {}", self.total_value())?;
        writeln!(out, "Processed files: {}", self.len())
    }

    /// Header and one row per result, without aggregates
    pub fn write_csv<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{CSV_HEADER}")?;
        for r in &self.results {
            writeln!(
                out,
                "{},{},{},{},{:.3}",
                r.source, r.max_value, r.total_weight, r.n_selected, r.exec_time
            )?;
        }
        Ok(())
    }
}
