use colored::{ColoredString, Colorize};
use tracing::info;

use crate::result::BenchmarkResult;

impl BenchmarkResult {
    pub fn print_summary(&self) {
        info!("{}\n", self.formatted_string());
    }

    pub fn formatted_string(&self) -> ColoredString {
        let throughput = format!("{:.2}", self.throughput);
        let read_avg = format!("{:.2}", self.read.avg_latency_us);
        let update_avg = format!("{:.2}", self.update.avg_latency_us);
        let read_p99 = format!("{:.2}", self.read.p99_latency_us);
        let update_p99 = format!("{:.2}", self.update.p99_latency_us);

        format!(
            "Results: {} on {} nodes, workload {}, {} threads: throughput: {} ops/s, \
            read avg latency: {} us, read p99 latency: {} us, \
            update avg latency: {} us, update p99 latency: {} us",
            self.database,
            self.node_count,
            self.workload,
            self.thread_count,
            throughput,
            read_avg,
            read_p99,
            update_avg,
            update_p99,
        )
        .green()
    }
}
