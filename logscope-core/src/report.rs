use chrono::NaiveDate;

/// Immutable aggregate statistics for one engine run.
///
/// Every ranked list is sorted by descending count with first-seen order
/// breaking ties. A run that matches zero records produces no `Report` at
/// all (the engine returns `Ok(None)`), so consumers never see empty
/// aggregates.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Source names, in processing order.
    pub sources: Vec<String>,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
    pub request_count: u64,
    pub average_body_size: f64,
    pub p95_body_size: f64,
    /// `/`-prefixed request-path basename -> count.
    pub resources: Vec<(String, u64)>,
    pub status_codes: Vec<(u16, u64)>,
    /// Hour of day (0-23) -> count.
    pub hours: Vec<(u32, u64)>,
    /// At most the five highest-ranked client addresses.
    pub top_remote_addresses: Vec<(String, u64)>,
}
