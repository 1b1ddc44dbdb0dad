use crate::error::BenchError;
use tokio::process::Command;

/// Runs an external collaborator command to completion, inheriting its output
/// streams. A spawn failure or a non-zero exit status is an error, there are
/// no retries.
pub async fn run_checked(description: &str, command: &mut Command) -> Result<(), BenchError> {
    let status = command
        .status()
        .await
        .map_err(|e| BenchError::CannotSpawnCommand(description.to_owned(), e))?;

    if !status.success() {
        return Err(BenchError::CommandFailed(description.to_owned(), status));
    }

    Ok(())
}
