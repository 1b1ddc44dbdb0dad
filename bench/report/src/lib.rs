pub mod csv;
pub mod parser;
pub mod prints;
mod types;
pub mod utils;

pub use types::operation_kind;
pub use types::operation_metrics;
pub use types::result;
