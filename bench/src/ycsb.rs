use crate::args::MatrixBenchArgs;
use crate::error::BenchError;
use matrix_bench_report::parser::apply_line;
use matrix_bench_report::result::BenchmarkResult;
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;
use tracing::{info, warn};

/// Shard factor for databases that align client concurrency with internal
/// partitioning. CockroachDB deployed on 3 nodes runs 3 shards.
pub fn shard_factor(database: &str, node_count: u32) -> Option<u32> {
    match (database, node_count) {
        ("cockroachdb", 3) => Some(3),
        _ => None,
    }
}

/// Thread count actually passed to YCSB. A requested count that is not evenly
/// divisible by the shard factor is rejected before anything is spawned.
pub fn aligned_thread_count(
    database: &str,
    node_count: u32,
    thread_count: u32,
) -> Result<u32, BenchError> {
    match shard_factor(database, node_count) {
        Some(factor) if thread_count % factor != 0 => Err(BenchError::UnalignedThreadCount {
            thread_count,
            shard_factor: factor,
            database: database.to_owned(),
            node_count,
        }),
        Some(factor) => Ok(thread_count / factor),
        None => Ok(thread_count),
    }
}

/// Runs one YCSB invocation and returns its captured result record.
///
/// A background task reads the piped stdout line by line, echoes every raw
/// line and feeds the parser. The task owns the result record for the whole
/// invocation, so there is exactly one writer and no locking. It is joined
/// only after the process has exited - process exit does not imply that all
/// output has been consumed.
pub async fn run_workload(
    args: &MatrixBenchArgs,
    database: &str,
    node_count: u32,
    workload: &str,
    thread_count: u32,
) -> Result<BenchmarkResult, BenchError> {
    info!("Running workload...");

    let threads = aligned_thread_count(database, node_count, thread_count)?;
    let ycsb_bin = args.ycsb_home.join("bin").join("ycsb");

    let mut command = Command::new(&ycsb_bin);
    command
        .args(["run", "jdbc", "-P"])
        .arg(args.workload_file(workload))
        .arg("-P")
        .arg(args.properties_file(database, node_count))
        .args(["-p", &format!("recordcount={}", args.record_count)])
        .args(["-p", &format!("operationcount={}", args.operation_count)])
        .args(["-p", &format!("maxexecutiontime={}", args.max_execution_time)])
        .args(["-threads", &threads.to_string()])
        .current_dir(&args.ycsb_home)
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit());

    let description = format!("ycsb run {database} workload{workload}");
    let mut child = command
        .spawn()
        .map_err(|e| BenchError::CannotSpawnCommand(description.clone(), e))?;
    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| BenchError::CannotCaptureStdout(description.clone()))?;

    let mut result = BenchmarkResult::new(
        database,
        workload,
        node_count,
        thread_count,
        args.max_execution_time as f64,
    );

    let reader = tokio::spawn(async move {
        let mut lines = BufReader::new(stdout).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    println!("{line}");
                    apply_line(&mut result, &line);
                }
                Ok(None) => break,
                Err(e) => {
                    warn!("Stopped reading YCSB output, remaining lines are lost: {e}");
                    break;
                }
            }
        }
        result
    });

    let status = child.wait().await?;

    // Drain the reader fully before touching the result.
    let result = reader
        .await
        .map_err(|e| BenchError::ReaderTaskFailed(description.clone(), e))?;

    if !status.success() {
        return Err(BenchError::CommandFailed(description, status));
    }

    info!("DONE.");
    Ok(result)
}
