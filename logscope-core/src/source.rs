use crate::error::AnalyzeError;
use glob::glob;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use tracing::debug;

/// One named line stream. The iterator is single-pass and
/// non-restartable; the engine consumes it exactly once.
pub struct LogSource {
    pub name: String,
    pub lines: Box<dyn Iterator<Item = io::Result<String>>>,
}

impl std::fmt::Debug for LogSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogSource")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl LogSource {
    pub fn new(
        name: impl Into<String>,
        lines: impl Iterator<Item = io::Result<String>> + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            lines: Box::new(lines),
        }
    }

    /// A source backed by in-memory lines. Mostly useful in tests.
    pub fn from_lines<I, S>(name: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        I::IntoIter: 'static,
        S: Into<String> + 'static,
    {
        Self::new(name, lines.into_iter().map(|l| Ok(l.into())))
    }
}

/// Resolves a location string into zero or more named line streams.
pub trait SourceProvider {
    fn resolve(&self, location: &str) -> Result<Vec<LogSource>, AnalyzeError>;
}

/// Expands a filesystem glob pattern; each matching file becomes one
/// source named after its file name, read lazily line by line.
pub struct LocalGlobProvider;

impl SourceProvider for LocalGlobProvider {
    fn resolve(&self, location: &str) -> Result<Vec<LogSource>, AnalyzeError> {
        let mut paths: Vec<_> = glob(location)
            .map_err(|e| AnalyzeError::Glob {
                pattern: location.to_string(),
                source: e,
            })?
            .filter_map(Result::ok)
            .filter(|p| p.is_file())
            .collect();
        paths.sort();

        debug!(pattern = location, files = paths.len(), "resolved local sources");

        let mut sources = Vec::with_capacity(paths.len());
        for path in paths {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.to_string_lossy().into_owned());
            let file = File::open(&path)
                .map_err(|e| AnalyzeError::read_source(path.to_string_lossy(), e))?;
            sources.push(LogSource::new(name, BufReader::new(file).lines()));
        }
        Ok(sources)
    }
}

/// Fetches a single remote log over HTTP; the whole body is one source
/// named after the URL.
pub struct HttpProvider;

impl SourceProvider for HttpProvider {
    fn resolve(&self, location: &str) -> Result<Vec<LogSource>, AnalyzeError> {
        let fetch = |url: &str| -> Result<String, reqwest::Error> {
            reqwest::blocking::get(url)?.error_for_status()?.text()
        };

        let body = fetch(location).map_err(|e| AnalyzeError::Fetch {
            url: location.to_string(),
            source: e,
        })?;

        debug!(url = location, bytes = body.len(), "fetched remote source");

        let lines: Vec<String> = body.lines().map(str::to_string).collect();
        Ok(vec![LogSource::from_lines(location, lines)])
    }
}

/// Dispatches a location string to the matching provider: URLs go over
/// HTTP, anything else is treated as a local glob pattern.
pub fn resolve_sources(location: &str) -> Result<Vec<LogSource>, AnalyzeError> {
    if location.starts_with("http://") || location.starts_with("https://") {
        HttpProvider.resolve(location)
    } else {
        LocalGlobProvider.resolve(location)
    }
}
