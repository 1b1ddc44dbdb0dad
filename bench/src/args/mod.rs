pub mod defaults;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use defaults::*;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct MatrixBenchArgs {
    /// Databases to benchmark
    #[arg(long, value_delimiter = ',', default_value = DEFAULT_DATABASES)]
    pub databases: Vec<String>,

    /// Node counts to deploy per database
    #[arg(long, value_delimiter = ',', default_value = DEFAULT_NODE_COUNTS)]
    pub node_counts: Vec<u32>,

    /// YCSB workload identifiers to run against every stack
    #[arg(long, value_delimiter = ',', default_value = DEFAULT_WORKLOADS)]
    pub workloads: Vec<String>,

    /// Client thread counts to run every workload with
    #[arg(long, value_delimiter = ',', default_value = DEFAULT_THREAD_COUNTS)]
    pub thread_counts: Vec<u32>,

    /// YCSB installation directory
    #[arg(long, short = 'y', value_parser = validate_ycsb_home)]
    pub ycsb_home: PathBuf,

    /// Directory with YCSB workload property files
    #[arg(long, default_value = DEFAULT_WORKLOADS_DIR)]
    pub workloads_dir: PathBuf,

    /// Directory with per-database-and-node-count YCSB connection properties
    #[arg(long, default_value = DEFAULT_CONFIGS_DIR)]
    pub configs_dir: PathBuf,

    /// Directory with docker stack compose files
    #[arg(long, default_value = DEFAULT_STACKS_DIR)]
    pub stacks_dir: PathBuf,

    /// Output directory for the CSV results file
    #[arg(long, short = 'o', default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// YCSB record count
    #[arg(long, default_value_t = DEFAULT_RECORD_COUNT)]
    pub record_count: u64,

    /// YCSB operation count
    #[arg(long, default_value_t = DEFAULT_OPERATION_COUNT)]
    pub operation_count: u64,

    /// Maximum execution time passed to YCSB, in seconds
    #[arg(long, default_value_t = DEFAULT_MAX_EXECUTION_TIME_SECS)]
    pub max_execution_time: u64,

    /// Time to wait after deploying a stack, in seconds
    #[arg(long, default_value_t = DEFAULT_STACK_SETTLE_TIME_SECS)]
    pub stack_settle_time: u64,

    /// Time to wait after removing a stack, in seconds
    #[arg(long, default_value_t = DEFAULT_STACK_TEARDOWN_TIME_SECS)]
    pub stack_teardown_time: u64,

    /// Time to wait between workload invocations, in seconds
    #[arg(long, default_value_t = DEFAULT_COOLDOWN_TIME_SECS)]
    pub cooldown_time: u64,

    /// Ansible host pattern of the swarm nodes
    #[arg(long, default_value = DEFAULT_ANSIBLE_PATTERN)]
    pub ansible_pattern: String,

    /// Root directory of the database volumes on the swarm nodes
    #[arg(long, default_value = DEFAULT_VOLUMES_ROOT)]
    pub volumes_root: PathBuf,

    /// Data snapshot directory name, `{nodes}` is replaced with the node count
    #[arg(long, default_value = DEFAULT_SNAPSHOT_NAME)]
    pub snapshot_name: String,
}

fn validate_ycsb_home(v: &str) -> Result<PathBuf, String> {
    if Path::new(v).exists() {
        Ok(PathBuf::from(v))
    } else {
        Err(format!("Provided YCSB home '{v}' does not exist."))
    }
}

impl MatrixBenchArgs {
    pub fn validate(&self) {
        if let Some(message) = self.validation_error() {
            MatrixBenchArgs::command()
                .error(ErrorKind::InvalidValue, message)
                .exit();
        }
    }

    fn validation_error(&self) -> Option<&'static str> {
        if self.databases.is_empty()
            || self.node_counts.is_empty()
            || self.workloads.is_empty()
            || self.thread_counts.is_empty()
        {
            return Some(
                "databases, node-counts, workloads and thread-counts must all be non-empty",
            );
        }

        if self.databases.iter().any(|d| d.is_empty())
            || self.workloads.iter().any(|w| w.is_empty())
        {
            return Some("database and workload identifiers must not be empty");
        }

        None
    }

    /// Compose file of the stack for a database/node-count pair.
    pub fn compose_file(&self, database: &str, node_count: u32) -> PathBuf {
        self.stacks_dir.join(format!("{database}-n{node_count}.yml"))
    }

    /// YCSB connection properties file for a database/node-count pair.
    pub fn properties_file(&self, database: &str, node_count: u32) -> PathBuf {
        self.configs_dir
            .join(format!("{database}-n{node_count}.properties"))
    }

    /// Workload property file for a workload identifier.
    pub fn workload_file(&self, workload: &str) -> PathBuf {
        self.workloads_dir.join(format!("workload{workload}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> MatrixBenchArgs {
        let ycsb_home = std::env::temp_dir();
        MatrixBenchArgs::parse_from([
            "matrix-bench",
            "--ycsb-home",
            ycsb_home.to_str().unwrap(),
        ])
    }

    #[test]
    fn should_accept_the_default_matrix() {
        assert_eq!(args().validation_error(), None);
    }

    #[test]
    fn should_reject_an_empty_databases_axis() {
        let mut args = args();
        args.databases.clear();
        assert!(args.validation_error().is_some());
    }

    #[test]
    fn should_reject_an_empty_thread_counts_axis() {
        let mut args = args();
        args.thread_counts.clear();
        assert!(args.validation_error().is_some());
    }

    #[test]
    fn should_reject_an_empty_workload_identifier() {
        let mut args = args();
        args.workloads = vec!["a".to_owned(), String::new()];
        assert_eq!(
            args.validation_error(),
            Some("database and workload identifiers must not be empty")
        );
    }

    #[test]
    fn should_reject_a_nonexistent_ycsb_home() {
        let result = validate_ycsb_home("/definitely/not/a/ycsb/install");
        assert!(result.is_err());
    }

    #[test]
    fn should_accept_an_existing_ycsb_home() {
        let dir = std::env::temp_dir();
        assert_eq!(
            validate_ycsb_home(dir.to_str().unwrap()).unwrap(),
            dir
        );
    }
}
