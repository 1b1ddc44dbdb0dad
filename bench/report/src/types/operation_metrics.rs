use crate::utils::round_float;
use serde::{Deserialize, Serialize};

/// Per-operation-kind metrics scraped from the YCSB output. Every field stays
/// at 0.0 until the corresponding metric line is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct OperationMetrics {
    #[serde(serialize_with = "round_float")]
    pub operations: f64,
    #[serde(serialize_with = "round_float")]
    pub avg_latency_us: f64,
    #[serde(serialize_with = "round_float")]
    pub min_latency_us: f64,
    #[serde(serialize_with = "round_float")]
    pub max_latency_us: f64,
    #[serde(serialize_with = "round_float")]
    pub p95_latency_us: f64,
    #[serde(serialize_with = "round_float")]
    pub p99_latency_us: f64,
}
