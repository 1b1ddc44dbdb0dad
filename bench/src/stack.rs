use crate::args::MatrixBenchArgs;
use crate::command::run_checked;
use crate::error::BenchError;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::sleep;
use tracing::info;

fn stack_name(database: &str, node_count: u32) -> String {
    format!("{database}_n{node_count}")
}

/// Deploys the docker stack for a database/node-count pair and waits for it
/// to settle.
pub async fn start_stack(
    args: &MatrixBenchArgs,
    database: &str,
    node_count: u32,
) -> Result<(), BenchError> {
    info!("Deploying stack...");

    let compose_file = args.compose_file(database, node_count);
    run_checked(
        "docker stack up",
        Command::new("docker")
            .args(["stack", "up", "--compose-file"])
            .arg(&compose_file)
            .arg(stack_name(database, node_count)),
    )
    .await?;

    sleep(Duration::from_secs(args.stack_settle_time)).await;
    info!("DONE.");
    Ok(())
}

/// Removes the docker stack and waits for its services to wind down.
pub async fn stop_stack(
    args: &MatrixBenchArgs,
    database: &str,
    node_count: u32,
) -> Result<(), BenchError> {
    info!("Removing stack...");

    run_checked(
        "docker stack rm",
        Command::new("docker")
            .args(["stack", "rm"])
            .arg(stack_name(database, node_count)),
    )
    .await?;

    sleep(Duration::from_secs(args.stack_teardown_time)).await;
    info!("DONE.");
    Ok(())
}
