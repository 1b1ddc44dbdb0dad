mod args;
mod command;
mod context;
mod data;
mod error;
mod results;
mod runner;
mod stack;
mod ycsb;

use crate::args::MatrixBenchArgs;
use crate::context::RunContext;
use crate::error::BenchError;
use crate::runner::BenchmarkRunner;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), BenchError> {
    let args = MatrixBenchArgs::parse();
    args.validate();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut ctx = RunContext::new(&args.output_dir)?;
    info!(
        "Starting the benchmark matrix (run started at {})...",
        ctx.started_at.format("%Y-%m-%d %H:%M:%S")
    );

    let runner = BenchmarkRunner::new(args);
    runner.run(&mut ctx).await?;

    info!("Finished the benchmark matrix.");
    Ok(())
}
