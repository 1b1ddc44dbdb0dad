use crate::error::BenchError;
use crate::results::ResultsWriter;
use chrono::{DateTime, Local};
use std::path::Path;

/// Run-wide state built once at startup and passed into the driver by
/// reference, nothing here lives in ambient globals.
pub struct RunContext {
    pub started_at: DateTime<Local>,
    pub results: ResultsWriter,
}

impl RunContext {
    pub fn new(output_dir: &Path) -> Result<Self, BenchError> {
        let started_at = Local::now();
        let results = ResultsWriter::create(output_dir, &started_at)?;
        Ok(Self {
            started_at,
            results,
        })
    }
}
