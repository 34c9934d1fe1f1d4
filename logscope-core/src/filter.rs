use crate::error::AnalyzeError;
use crate::record::LogRecord;
use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use std::str::FromStr;

/// Closed set of record attributes available for pattern filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Method,
    Agent,
    Referer,
    RemoteAddress,
    RemoteUser,
    HttpVersion,
}

impl FromStr for FilterField {
    type Err = AnalyzeError;

    /// Case-insensitive; any name outside the closed set is a
    /// configuration error, raised before the run starts.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "method" => Ok(Self::Method),
            "agent" => Ok(Self::Agent),
            "referer" => Ok(Self::Referer),
            "remote_address" => Ok(Self::RemoteAddress),
            "remote_user" => Ok(Self::RemoteUser),
            "http_version" => Ok(Self::HttpVersion),
            _ => Err(AnalyzeError::UnsupportedField {
                name: s.to_string(),
            }),
        }
    }
}

/// A pre-compiled whole-string match against one record attribute.
///
/// The pattern must be anchored (`^…$`); compilation from the user's
/// glob syntax is the CLI layer's job.
#[derive(Debug, Clone)]
pub struct FieldMatcher {
    field: FilterField,
    pattern: Regex,
}

impl FieldMatcher {
    pub fn new(field: FilterField, pattern: Regex) -> Self {
        Self { field, pattern }
    }

    fn matches(&self, record: &LogRecord) -> bool {
        let value = match self.field {
            FilterField::Method => &record.request.method,
            FilterField::Agent => &record.user_agent,
            FilterField::Referer => &record.referer,
            FilterField::RemoteAddress => &record.remote_address,
            FilterField::RemoteUser => &record.remote_user,
            FilterField::HttpVersion => &record.request.protocol,
        };
        self.pattern.is_match(value)
    }
}

/// Predicate combining an inclusive date window and an optional
/// single-field pattern match. Both checks must pass.
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    matcher: Option<FieldMatcher>,
}

impl RecordFilter {
    pub fn new(
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        matcher: Option<FieldMatcher>,
    ) -> Self {
        Self { from, to, matcher }
    }

    pub fn from_date(&self) -> Option<NaiveDate> {
        self.from
    }

    pub fn to_date(&self) -> Option<NaiveDate> {
        self.to
    }

    pub fn passes(&self, record: &LogRecord) -> bool {
        self.check_date(record) && self.check_field(record)
    }

    /// Window bounds are dates; the record passes from start-of-day of
    /// `from` through 23:59:59 of `to`, both inclusive. Comparison is on
    /// the record's naive local time, matching the server-local window.
    fn check_date(&self, record: &LogRecord) -> bool {
        let current = record.timestamp.naive_local();

        if let Some(from) = self.from {
            if current < from.and_time(NaiveTime::MIN) {
                return false;
            }
        }
        if let Some(to) = self.to {
            let end_of_day = NaiveTime::from_hms_opt(23, 59, 59).unwrap();
            if current > to.and_time(end_of_day) {
                return false;
            }
        }

        true
    }

    fn check_field(&self, record: &LogRecord) -> bool {
        match &self.matcher {
            Some(matcher) => matcher.matches(record),
            None => true,
        }
    }
}
