use std::process::ExitStatus;
use thiserror::Error;
use tokio::io;
use tokio::task::JoinError;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("IO error")]
    IoError(#[from] io::Error),
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Cannot spawn command: {0}")]
    CannotSpawnCommand(String, #[source] io::Error),
    #[error("Command '{0}' exited with {1}")]
    CommandFailed(String, ExitStatus),
    #[error("Cannot capture stdout of command: {0}")]
    CannotCaptureStdout(String),
    #[error("Stdout reader failed for command: {0}")]
    ReaderTaskFailed(String, #[source] JoinError),
    #[error(
        "Thread count {thread_count} is not divisible by shard factor {shard_factor} \
        for {database} on {node_count} nodes"
    )]
    UnalignedThreadCount {
        thread_count: u32,
        shard_factor: u32,
        database: String,
        node_count: u32,
    },
}
