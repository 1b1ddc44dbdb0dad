use crate::operation_kind::OperationKind;
use crate::operation_metrics::OperationMetrics;
use crate::result::BenchmarkResult;
use tracing::warn;

const THROUGHPUT_TAG: &str = "[OVERALL], Throughput(ops/sec)";

/// Position of the value field in a `", "`-delimited YCSB metric line.
const VALUE_FIELD_INDEX: usize = 2;

/// Classification of a single YCSB output line by its leading tag.
///
/// Checked in fixed order: overall throughput before the per-operation tags,
/// since only one can match a given line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Throughput,
    Operation(OperationKind),
    Unrecognized,
}

impl LineKind {
    pub fn classify(line: &str) -> Self {
        if line.starts_with(THROUGHPUT_TAG) {
            return LineKind::Throughput;
        }
        for kind in OperationKind::ALL {
            if line.starts_with(kind.tag()) {
                return LineKind::Operation(kind);
            }
        }
        LineKind::Unrecognized
    }
}

/// Metric field reported by a per-operation line, matched by substring
/// containment in the listed order, first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricField {
    Operations,
    AvgLatency,
    MinLatency,
    MaxLatency,
    P95Latency,
    P99Latency,
}

impl MetricField {
    pub fn classify(line: &str) -> Option<Self> {
        if line.contains("Operations") {
            Some(MetricField::Operations)
        } else if line.contains("AverageLatency(us)") {
            Some(MetricField::AvgLatency)
        } else if line.contains("MinLatency(us)") {
            Some(MetricField::MinLatency)
        } else if line.contains("MaxLatency(us)") {
            Some(MetricField::MaxLatency)
        } else if line.contains("95thPercentileLatency(us)") {
            Some(MetricField::P95Latency)
        } else if line.contains("99thPercentileLatency(us)") {
            Some(MetricField::P99Latency)
        } else {
            None
        }
    }

    fn set(self, metrics: &mut OperationMetrics, value: f64) {
        match self {
            MetricField::Operations => metrics.operations = value,
            MetricField::AvgLatency => metrics.avg_latency_us = value,
            MetricField::MinLatency => metrics.min_latency_us = value,
            MetricField::MaxLatency => metrics.max_latency_us = value,
            MetricField::P95Latency => metrics.p95_latency_us = value,
            MetricField::P99Latency => metrics.p99_latency_us = value,
        }
    }
}

/// Applies one line of YCSB stdout to the result record, updating at most one
/// field in place.
///
/// Lines not starting with `[` are status noise and leave the record
/// untouched. A value that cannot be parsed as a float is reported as a
/// warning and substituted with 0.0, the line is never a hard error - YCSB is
/// a best-effort data source.
pub fn apply_line(result: &mut BenchmarkResult, line: &str) {
    if !line.starts_with('[') {
        return;
    }

    let value = parse_value(line);
    match LineKind::classify(line) {
        LineKind::Throughput => result.throughput = value,
        LineKind::Operation(kind) => {
            if let Some(field) = MetricField::classify(line) {
                field.set(result.operation_mut(kind), value);
            }
        }
        LineKind::Unrecognized => {}
    }
}

fn parse_value(line: &str) -> f64 {
    let Some(raw) = line.split(", ").nth(VALUE_FIELD_INDEX) else {
        warn!("Metric line has no value field, substituting 0.0 (line: '{line}')");
        return 0.0;
    };

    let raw = raw.trim();
    raw.parse().unwrap_or_else(|_| {
        warn!("Cannot convert metric value to float, substituting 0.0 (line: '{line}', value: '{raw}')");
        0.0
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result() -> BenchmarkResult {
        BenchmarkResult::new("cockroachdb", "a", 3, 39, 60.0)
    }

    #[test]
    fn should_classify_throughput_line_before_operation_tags() {
        assert_eq!(
            LineKind::classify("[OVERALL], Throughput(ops/sec), 4821.0"),
            LineKind::Throughput
        );
        assert_eq!(
            LineKind::classify("[OVERALL], RunTime(ms), 60000.0"),
            LineKind::Unrecognized
        );
    }

    #[test]
    fn should_classify_every_operation_tag() {
        for kind in OperationKind::ALL {
            let line = format!("{}, Operations, 100", kind.tag());
            assert_eq!(LineKind::classify(&line), LineKind::Operation(kind));
        }
    }

    #[test]
    fn should_not_confuse_read_with_read_modify_write() {
        assert_eq!(
            LineKind::classify("[READ-MODIFY-WRITE], Operations, 5"),
            LineKind::Operation(OperationKind::ReadModifyWrite)
        );
    }

    #[test]
    fn should_classify_metric_fields() {
        assert_eq!(
            MetricField::classify("[READ], Operations, 100"),
            Some(MetricField::Operations)
        );
        assert_eq!(
            MetricField::classify("[READ], AverageLatency(us), 1.0"),
            Some(MetricField::AvgLatency)
        );
        assert_eq!(
            MetricField::classify("[READ], MinLatency(us), 1.0"),
            Some(MetricField::MinLatency)
        );
        assert_eq!(
            MetricField::classify("[READ], MaxLatency(us), 1.0"),
            Some(MetricField::MaxLatency)
        );
        assert_eq!(
            MetricField::classify("[READ], 95thPercentileLatency(us), 1.0"),
            Some(MetricField::P95Latency)
        );
        assert_eq!(
            MetricField::classify("[READ], 99thPercentileLatency(us), 1.0"),
            Some(MetricField::P99Latency)
        );
        assert_eq!(MetricField::classify("[READ], Return=OK, 100"), None);
    }

    #[test]
    fn should_set_read_average_latency_and_nothing_else() {
        let mut r = result();
        let before = r.clone();
        apply_line(&mut r, "[READ], AverageLatency(us), 123.45");

        assert_eq!(r.read.avg_latency_us, 123.45);

        let mut expected = before;
        expected.read.avg_latency_us = 123.45;
        assert_eq!(r, expected);
    }

    #[test]
    fn should_set_overall_throughput() {
        let mut r = result();
        apply_line(&mut r, "[OVERALL], Throughput(ops/sec), 4821.0");
        assert_eq!(r.throughput, 4821.0);
    }

    #[test]
    fn should_dispatch_to_each_operation_record() {
        let mut r = result();
        apply_line(&mut r, "[READ], Operations, 100");
        apply_line(&mut r, "[INSERT], Operations, 200");
        apply_line(&mut r, "[UPDATE], Operations, 300");
        apply_line(&mut r, "[SCAN], Operations, 400");
        apply_line(&mut r, "[READ-MODIFY-WRITE], Operations, 500");

        assert_eq!(r.read.operations, 100.0);
        assert_eq!(r.insert.operations, 200.0);
        assert_eq!(r.update.operations, 300.0);
        assert_eq!(r.scan.operations, 400.0);
        assert_eq!(r.read_modify_write.operations, 500.0);
    }

    #[test]
    fn should_ignore_lines_not_starting_with_bracket() {
        let mut r = result();
        let before = r.clone();
        apply_line(&mut r, "Loading workload...");
        apply_line(&mut r, "DBWrapper: report latency for each error is false");
        apply_line(&mut r, "");
        assert_eq!(r, before);
    }

    #[test]
    fn should_substitute_zero_for_non_numeric_value() {
        let mut r = result();
        // Seed a non-zero value to prove the field is overwritten with 0.0,
        // not merely skipped.
        r.read.min_latency_us = 777.0;
        apply_line(&mut r, "[READ], MinLatency(us), n/a");
        assert_eq!(r.read.min_latency_us, 0.0);
    }

    #[test]
    fn should_substitute_zero_for_missing_value_field() {
        let mut r = result();
        apply_line(&mut r, "[READ], Operations");
        assert_eq!(r.read.operations, 0.0);
    }

    #[test]
    fn should_trim_spaces_around_value() {
        let mut r = result();
        apply_line(&mut r, "[UPDATE], MaxLatency(us),  9876.5 ");
        assert_eq!(r.update.max_latency_us, 9876.5);
    }

    #[test]
    fn should_drop_unrecognized_metric_of_known_operation() {
        let mut r = result();
        let before = r.clone();
        apply_line(&mut r, "[READ], Return=OK, 100");
        assert_eq!(r, before);
    }

    #[test]
    fn should_drop_unrecognized_tags() {
        let mut r = result();
        let before = r.clone();
        apply_line(&mut r, "[CLEANUP], Operations, 2");
        apply_line(&mut r, "[GC], Time(ms), 30");
        assert_eq!(r, before);
    }
}
