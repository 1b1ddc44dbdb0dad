use crate::error::BenchError;
use chrono::{DateTime, Local};
use matrix_bench_report::csv::csv_header;
use std::fs::{create_dir_all, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Append-only CSV results file, named after the run start time so runs never
/// collide. The header row is written exactly once, on creation.
pub struct ResultsWriter {
    path: PathBuf,
    file: File,
}

impl ResultsWriter {
    pub fn create(output_dir: &Path, started_at: &DateTime<Local>) -> Result<Self, BenchError> {
        create_dir_all(output_dir)?;
        let path = output_dir.join(format!("{}.csv", started_at.format("%Y%m%d%H%M%S")));
        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        writeln!(file, "{}", csv_header())?;
        info!("Results file: {}", path.display());
        Ok(Self { path, file })
    }

    /// Appends one data row. Rows are synced to disk immediately, a crash of
    /// a later invocation must not lose completed results.
    pub fn append(&mut self, row: &str) -> Result<(), BenchError> {
        writeln!(self.file, "{row}")?;
        self.file.sync_all()?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
