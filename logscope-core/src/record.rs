use chrono::{DateTime, FixedOffset};

/// One parsed access-log request, NCSA combined format.
///
/// Records are built per line and folded into the aggregates immediately;
/// nothing downstream holds on to them.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub remote_address: String,
    /// Authenticated user, `-` when absent.
    pub remote_user: String,
    /// Server local time, fixed-offset aware.
    pub timestamp: DateTime<FixedOffset>,
    pub request: Request,
    pub status: u16,
    pub body_size: u64,
    pub referer: String,
    pub user_agent: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: String,
    pub path: String,
    pub protocol: String,
}

impl LogRecord {
    /// Aggregation key for resource popularity: the last `/`-delimited
    /// segment of the request path, `/`-prefixed.
    pub fn resource_key(&self) -> String {
        let basename = self.request.path.rsplit('/').next().unwrap_or("");
        format!("/{basename}")
    }
}
