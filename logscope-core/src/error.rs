use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyzeError {
    // Parsing
    #[error("malformed log line ({reason}): {line}")]
    MalformedLine { line: String, reason: String },

    // Filter configuration
    #[error("filtering by '{name}' field is not supported")]
    UnsupportedField { name: String },

    #[error("invalid filter pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    // Source access
    #[error("glob pattern error: {pattern}: {source}")]
    Glob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("failed to read source {name}: {source}")]
    ReadSource {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl AnalyzeError {
    pub fn malformed(line: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedLine {
            line: line.into(),
            reason: reason.into(),
        }
    }

    pub fn read_source(name: impl Into<String>, source: std::io::Error) -> Self {
        Self::ReadSource {
            name: name.into(),
            source,
        }
    }
}
