pub mod operation_kind;
pub mod operation_metrics;
pub mod result;
