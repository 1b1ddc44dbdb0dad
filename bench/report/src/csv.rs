use crate::operation_kind::OperationKind;
use crate::operation_metrics::OperationMetrics;
use crate::result::BenchmarkResult;

/// Timestamp format of the first CSV column.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const METRIC_COLUMNS: [&str; 6] = [
    "operations",
    "avg_latency_us",
    "min_latency_us",
    "max_latency_us",
    "p95_latency_us",
    "p99_latency_us",
];

/// Header row matching the column order of [`BenchmarkResult::to_csv_row`].
///
/// The two must stay structurally in sync, see the lockstep test below.
pub fn csv_header() -> String {
    let mut columns: Vec<String> = [
        "timestamp",
        "database",
        "workload",
        "nodes",
        "threads",
        "duration",
        "throughput",
    ]
    .iter()
    .map(|c| c.to_string())
    .collect();

    for kind in OperationKind::ALL {
        for column in METRIC_COLUMNS {
            columns.push(format!("{}_{}", kind.csv_prefix(), column));
        }
    }

    columns.join(",")
}

impl BenchmarkResult {
    /// Flat CSV row: identity fields, throughput, then the six metric fields
    /// of each operation kind in the order READ, INSERT, UPDATE, SCAN,
    /// READ-MODIFY-WRITE. Floats use fixed decimal notation.
    pub fn to_csv_row(&self) -> String {
        let mut fields = vec![
            self.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            quote_field(&self.database),
            quote_field(&self.workload),
            self.node_count.to_string(),
            self.thread_count.to_string(),
            format!("{:.6}", self.duration_secs),
            format!("{:.6}", self.throughput),
        ];

        for kind in OperationKind::ALL {
            fields.extend(self.operation(kind).csv_fields());
        }

        fields.join(",")
    }
}

impl OperationMetrics {
    fn csv_fields(&self) -> [String; 6] {
        [
            format!("{:.6}", self.operations),
            format!("{:.6}", self.avg_latency_us),
            format!("{:.6}", self.min_latency_us),
            format!("{:.6}", self.max_latency_us),
            format!("{:.6}", self.p95_latency_us),
            format!("{:.6}", self.p99_latency_us),
        ]
    }
}

/// Minimal CSV quoting: plain identifiers pass through untouched, a field
/// containing a comma, quote or newline is quoted with embedded quotes
/// doubled.
fn quote_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn result() -> BenchmarkResult {
        let mut r = BenchmarkResult::new("cockroachdb", "a", 3, 39, 60.0);
        r.timestamp = NaiveDate::from_ymd_opt(2019, 5, 12)
            .unwrap()
            .and_hms_opt(14, 30, 5)
            .unwrap();
        r.throughput = 4821.0;
        r.read.operations = 100.0;
        r.read.avg_latency_us = 123.45;
        r.scan.p99_latency_us = 9000.125;
        r
    }

    #[test]
    fn header_and_row_field_counts_match() {
        let row = result().to_csv_row();
        assert_eq!(
            csv_header().split(',').count(),
            row.split(',').count()
        );
        // 7 identity/aggregate columns + 5 operations * 6 metrics
        assert_eq!(csv_header().split(',').count(), 37);
    }

    #[test]
    fn identity_fields_round_trip_through_the_row() {
        let r = result();
        let row = r.to_csv_row();
        let fields: Vec<&str> = row.split(',').collect();

        assert_eq!(fields[0], "2019-05-12 14:30:05");
        assert_eq!(fields[1], "cockroachdb");
        assert_eq!(fields[2], "a");
        assert_eq!(fields[3], "3");
        assert_eq!(fields[4], "39");
    }

    #[test]
    fn floats_render_in_fixed_notation() {
        let mut r = result();
        r.throughput = 1234567890.5;
        let row = r.to_csv_row();
        let fields: Vec<&str> = row.split(',').collect();

        assert_eq!(fields[6], "1234567890.500000");
        assert!(!fields[6].contains(['e', 'E']));
    }

    #[test]
    fn operation_metrics_land_in_fixed_kind_order() {
        let r = result();
        let row = r.to_csv_row();
        let fields: Vec<&str> = row.split(',').collect();

        // read block starts right after the 7 leading columns
        assert_eq!(fields[7], "100.000000");
        assert_eq!(fields[8], "123.450000");
        // scan is the 4th block, p99 is its last column
        assert_eq!(fields[7 + 3 * 6 + 5], "9000.125000");
    }

    #[test]
    fn header_columns_carry_operation_prefixes_in_order() {
        let header = csv_header();
        let columns: Vec<&str> = header.split(',').collect();

        assert_eq!(columns[7], "read_operations");
        assert_eq!(columns[13], "insert_operations");
        assert_eq!(columns[19], "update_operations");
        assert_eq!(columns[25], "scan_operations");
        assert_eq!(columns[31], "rmw_operations");
        assert_eq!(columns[36], "rmw_p99_latency_us");
    }

    #[test]
    fn comma_bearing_identifier_gets_quoted() {
        let mut r = result();
        r.workload = "custom,mix".to_owned();
        let row = r.to_csv_row();
        assert!(row.contains("\"custom,mix\""));
    }

    #[test]
    fn quote_field_passes_plain_identifiers_through() {
        assert_eq!(quote_field("postgres"), "postgres");
        assert_eq!(quote_field("a \"b\""), "\"a \"\"b\"\"\"");
    }
}
