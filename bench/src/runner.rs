use crate::args::MatrixBenchArgs;
use crate::context::RunContext;
use crate::data::{clear_data, restore_data};
use crate::error::BenchError;
use crate::stack::{start_stack, stop_stack};
use crate::ycsb::run_workload;
use matrix_bench_report::result::BenchmarkResult;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{error, info, warn};

/// Drives the benchmark matrix: one stack lifecycle per database/node-count
/// pair, one YCSB invocation per workload/thread-count pair within it.
/// Invocations are strictly sequential, any collaborator failure terminates
/// the whole run after best-effort cleanup.
pub struct BenchmarkRunner {
    args: MatrixBenchArgs,
}

impl BenchmarkRunner {
    pub fn new(args: MatrixBenchArgs) -> Self {
        Self { args }
    }

    pub async fn run(&self, ctx: &mut RunContext) -> Result<(), BenchError> {
        for database in &self.args.databases {
            for &node_count in &self.args.node_counts {
                self.run_stack(ctx, database, node_count).await?;
            }
        }
        Ok(())
    }

    async fn run_stack(
        &self,
        ctx: &mut RunContext,
        database: &str,
        node_count: u32,
    ) -> Result<(), BenchError> {
        if let Err(e) = restore_data(&self.args, database, node_count).await {
            self.cleanup(database, node_count, false).await;
            return Err(e);
        }
        if let Err(e) = start_stack(&self.args, database, node_count).await {
            self.cleanup(database, node_count, true).await;
            return Err(e);
        }

        for workload in &self.args.workloads {
            for &thread_count in &self.args.thread_counts {
                info!(
                    "Database: {database}, nodes: {node_count}, workload: {workload}, \
                    threads: {thread_count}"
                );

                let result =
                    match run_workload(&self.args, database, node_count, workload, thread_count)
                        .await
                    {
                        Ok(result) => result,
                        Err(e) => {
                            self.cleanup(database, node_count, true).await;
                            return Err(e);
                        }
                    };

                if let Err(e) = self.record(ctx, &result) {
                    self.cleanup(database, node_count, true).await;
                    return Err(e);
                }

                sleep(Duration::from_secs(self.args.cooldown_time)).await;
            }
        }

        stop_stack(&self.args, database, node_count).await?;
        clear_data(&self.args, database).await?;
        Ok(())
    }

    fn record(&self, ctx: &mut RunContext, result: &BenchmarkResult) -> Result<(), BenchError> {
        match result.to_pretty_json() {
            Ok(json) => info!("{json}"),
            Err(e) => warn!("Cannot render result as JSON: {e}"),
        }
        result.print_summary();
        ctx.results.append(&result.to_csv_row())
    }

    /// Best-effort teardown on the failure path, its own failures are only
    /// logged.
    async fn cleanup(&self, database: &str, node_count: u32, stop: bool) {
        if stop {
            if let Err(e) = stop_stack(&self.args, database, node_count).await {
                error!("Cannot stop stack during cleanup: {e}");
            }
        }
        if let Err(e) = clear_data(&self.args, database).await {
            error!("Cannot clear data during cleanup: {e}");
        }
    }
}
