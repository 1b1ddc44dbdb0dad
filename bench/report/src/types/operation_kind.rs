use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Categories of database operations YCSB reports metrics for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum OperationKind {
    #[display("Read")]
    #[serde(rename = "read")]
    Read,
    #[display("Insert")]
    #[serde(rename = "insert")]
    Insert,
    #[display("Update")]
    #[serde(rename = "update")]
    Update,
    #[display("Scan")]
    #[serde(rename = "scan")]
    Scan,
    #[display("Read-Modify-Write")]
    #[serde(rename = "read_modify_write")]
    ReadModifyWrite,
}

impl OperationKind {
    /// All kinds in CSV column order.
    pub const ALL: [OperationKind; 5] = [
        OperationKind::Read,
        OperationKind::Insert,
        OperationKind::Update,
        OperationKind::Scan,
        OperationKind::ReadModifyWrite,
    ];

    /// Leading tag of a YCSB metric line reporting this operation.
    pub fn tag(&self) -> &'static str {
        match self {
            OperationKind::Read => "[READ]",
            OperationKind::Insert => "[INSERT]",
            OperationKind::Update => "[UPDATE]",
            OperationKind::Scan => "[SCAN]",
            OperationKind::ReadModifyWrite => "[READ-MODIFY-WRITE]",
        }
    }

    /// Column name prefix in the CSV header.
    pub fn csv_prefix(&self) -> &'static str {
        match self {
            OperationKind::Read => "read",
            OperationKind::Insert => "insert",
            OperationKind::Update => "update",
            OperationKind::Scan => "scan",
            OperationKind::ReadModifyWrite => "rmw",
        }
    }
}
