use crate::args::MatrixBenchArgs;
use crate::command::run_checked;
use crate::error::BenchError;
use tokio::process::Command;
use tracing::info;

/// Restores the database volume from its snapshot directory on every swarm
/// node, via an ansible ad-hoc shell command.
pub async fn restore_data(
    args: &MatrixBenchArgs,
    database: &str,
    node_count: u32,
) -> Result<(), BenchError> {
    info!("Restoring data...");

    let volume = args.volumes_root.join(database);
    let snapshot = args.snapshot_name.replace("{nodes}", &node_count.to_string());
    let copy = format!(
        "cp -a {volume}/{snapshot} {volume}/data",
        volume = volume.display()
    );

    run_checked(
        "ansible restore data",
        Command::new("ansible")
            .arg(&args.ansible_pattern)
            .args(["--become", "-m", "shell", "-a"])
            .arg(&copy),
    )
    .await?;

    info!("DONE.");
    Ok(())
}

/// Removes the database volume data directory on every swarm node.
pub async fn clear_data(args: &MatrixBenchArgs, database: &str) -> Result<(), BenchError> {
    info!("Cleaning data...");

    let data_dir = args.volumes_root.join(database).join("data");
    let removal = format!("state=absent path={}", data_dir.display());

    run_checked(
        "ansible clear data",
        Command::new("ansible")
            .arg(&args.ansible_pattern)
            .args(["--become", "-m", "file", "-a"])
            .arg(&removal),
    )
    .await?;

    info!("DONE.");
    Ok(())
}
