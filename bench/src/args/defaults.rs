pub const DEFAULT_DATABASES: &str = "cockroachdb";
pub const DEFAULT_NODE_COUNTS: &str = "3";
pub const DEFAULT_WORKLOADS: &str = "a,b,c,d,f";
pub const DEFAULT_THREAD_COUNTS: &str = "3,9,15,21,27,33,39,45";

pub const DEFAULT_WORKLOADS_DIR: &str = "workloads";
pub const DEFAULT_CONFIGS_DIR: &str = "configs";
pub const DEFAULT_STACKS_DIR: &str = "stacks";
pub const DEFAULT_OUTPUT_DIR: &str = "results";

pub const DEFAULT_RECORD_COUNT: u64 = 5_000_000;
pub const DEFAULT_OPERATION_COUNT: u64 = 5_000_000;
pub const DEFAULT_MAX_EXECUTION_TIME_SECS: u64 = 60;

pub const DEFAULT_STACK_SETTLE_TIME_SECS: u64 = 30;
pub const DEFAULT_STACK_TEARDOWN_TIME_SECS: u64 = 10;
pub const DEFAULT_COOLDOWN_TIME_SECS: u64 = 60;

pub const DEFAULT_ANSIBLE_PATTERN: &str = "swarm";
pub const DEFAULT_VOLUMES_ROOT: &str = "/volumes";
pub const DEFAULT_SNAPSHOT_NAME: &str = "data-template-ycsb-n{nodes}-rc5M";
