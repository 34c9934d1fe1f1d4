use crate::error::AnalyzeError;
use crate::record::{LogRecord, Request};
use chrono::DateTime;
use once_cell::sync::Lazy;
use regex::Regex;

/// NCSA combined log format:
/// `%h - %u [%t] "%r" %>s %b "%{Referer}i" "%{User-agent}i"`
static LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^(\S+) - (\S+) \[([^\]]+)\] "([^"]*)" (\d+) (\d+) "([^"]*)" "([^"]*)"$"#)
        .expect("log line grammar is a valid regex")
});

const TIME_FORMAT: &str = "%d/%b/%Y:%H:%M:%S %z";

/// Decomposes one raw line into a [`LogRecord`].
///
/// Every field of the grammar is mandatory, including the three
/// sub-fields of the quoted request. Any deviation fails with
/// [`AnalyzeError::MalformedLine`] carrying the offending line.
pub fn parse_line(line: &str) -> Result<LogRecord, AnalyzeError> {
    let captures = LINE_RE
        .captures(line)
        .ok_or_else(|| AnalyzeError::malformed(line, "line does not match the combined format"))?;

    let timestamp = DateTime::parse_from_str(&captures[3], TIME_FORMAT)
        .map_err(|e| AnalyzeError::malformed(line, format!("bad timestamp: {e}")))?;

    let mut request_parts = captures[4].split(' ');
    let (method, path, protocol) = match (
        request_parts.next(),
        request_parts.next(),
        request_parts.next(),
        request_parts.next(),
    ) {
        (Some(m), Some(p), Some(v), None) if !m.is_empty() => {
            (m.to_string(), p.to_string(), v.to_string())
        }
        _ => {
            return Err(AnalyzeError::malformed(
                line,
                "request must be \"<METHOD> <path> <protocol>\"",
            ));
        }
    };

    let status: u16 = captures[5]
        .parse()
        .map_err(|e| AnalyzeError::malformed(line, format!("bad status: {e}")))?;
    if !(100..=599).contains(&status) {
        return Err(AnalyzeError::malformed(
            line,
            format!("status {status} out of range 100-599"),
        ));
    }

    let body_size: u64 = captures[6]
        .parse()
        .map_err(|e| AnalyzeError::malformed(line, format!("bad body size: {e}")))?;

    Ok(LogRecord {
        remote_address: captures[1].to_string(),
        remote_user: captures[2].to_string(),
        timestamp,
        request: Request {
            method,
            path,
            protocol,
        },
        status,
        body_size,
        referer: captures[7].to_string(),
        user_agent: captures[8].to_string(),
    })
}
