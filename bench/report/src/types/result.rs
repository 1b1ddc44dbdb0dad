use crate::operation_kind::OperationKind;
use crate::operation_metrics::OperationMetrics;
use crate::utils::round_float;
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Result record of a single YCSB invocation against one
/// (database, node count, workload, thread count) combination.
///
/// The record is mutated only by the stdout reader of its owning invocation;
/// once the process has exited and the reader is joined it is serialized and
/// never touched again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BenchmarkResult {
    /// Timestamp when the invocation started
    pub timestamp: NaiveDateTime,

    /// Benchmarked database name
    pub database: String,

    /// YCSB workload identifier
    pub workload: String,

    /// Number of database nodes in the stack
    pub node_count: u32,

    /// Requested client thread count (before shard alignment)
    pub thread_count: u32,

    /// Nominal benchmark duration in seconds
    #[serde(serialize_with = "round_float")]
    pub duration_secs: f64,

    /// Overall throughput in operations per second
    #[serde(serialize_with = "round_float")]
    pub throughput: f64,

    pub read: OperationMetrics,
    pub insert: OperationMetrics,
    pub update: OperationMetrics,
    pub scan: OperationMetrics,
    pub read_modify_write: OperationMetrics,
}

impl BenchmarkResult {
    pub fn new(
        database: &str,
        workload: &str,
        node_count: u32,
        thread_count: u32,
        duration_secs: f64,
    ) -> Self {
        Self {
            timestamp: Local::now().naive_local(),
            database: database.to_owned(),
            workload: workload.to_owned(),
            node_count,
            thread_count,
            duration_secs,
            ..Default::default()
        }
    }

    pub fn operation(&self, kind: OperationKind) -> &OperationMetrics {
        match kind {
            OperationKind::Read => &self.read,
            OperationKind::Insert => &self.insert,
            OperationKind::Update => &self.update,
            OperationKind::Scan => &self.scan,
            OperationKind::ReadModifyWrite => &self.read_modify_write,
        }
    }

    pub fn operation_mut(&mut self, kind: OperationKind) -> &mut OperationMetrics {
        match kind {
            OperationKind::Read => &mut self.read,
            OperationKind::Insert => &mut self.insert,
            OperationKind::Update => &mut self.update,
            OperationKind::Scan => &mut self.scan,
            OperationKind::ReadModifyWrite => &mut self.read_modify_write,
        }
    }

    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
