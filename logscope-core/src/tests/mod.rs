mod counter_tests;

use crate::record::LogRecord;

/// Builds a combined-format line from field values.
pub(crate) fn log_line(
    addr: &str,
    timestamp: &str,
    method: &str,
    path: &str,
    status: u16,
    size: u64,
    agent: &str,
) -> String {
    format!(r#"{addr} - - [{timestamp}] "{method} {path} HTTP/1.1" {status} {size} "-" "{agent}""#)
}

pub(crate) fn record(timestamp: &str, method: &str, path: &str) -> LogRecord {
    crate::parse::parse_line(&log_line("93.180.71.3", timestamp, method, path, 200, 490, "UA"))
        .unwrap()
}
