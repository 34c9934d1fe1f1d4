use crate::counter::OrderedCounter;
use crate::error::AnalyzeError;
use crate::filter::RecordFilter;
use crate::parse::parse_line;
use crate::report::Report;
use crate::sketch::QuantileSketch;
use crate::source::LogSource;
use chrono::Timelike;
use tracing::{debug, warn};

const P95: f64 = 0.95;
const RELATIVE_ACCURACY: f64 = 0.01;
const REMOTE_ADDRESS_LIMIT: usize = 5;

/// What to do when a line does not match the log grammar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MalformedLinePolicy {
    /// Abort the whole run on the first malformed line; no partial
    /// report is ever produced.
    #[default]
    Abort,
    /// Skip the line, count it, and keep going.
    Skip,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EngineOptions {
    pub on_malformed: MalformedLinePolicy,
}

/// Single-pass aggregation over one or more log sources.
///
/// Sources are processed strictly in arrival order and each line stream
/// is consumed exactly once. All accumulators live inside `run`, so an
/// engine carries no state across invocations; it is not meant to be
/// shared across threads mid-run.
pub struct AggregationEngine {
    filter: RecordFilter,
    options: EngineOptions,
}

impl AggregationEngine {
    pub fn new(filter: RecordFilter) -> Self {
        Self::with_options(filter, EngineOptions::default())
    }

    pub fn with_options(filter: RecordFilter, options: EngineOptions) -> Self {
        Self { filter, options }
    }

    /// Parses, filters and folds every line of every source, then ranks
    /// the accumulated counts into a [`Report`].
    ///
    /// Returns `Ok(None)` when no record survives the filter, which is
    /// an informational outcome, not an error. Read failures and (under
    /// [`MalformedLinePolicy::Abort`]) malformed lines abort the run.
    pub fn run(
        &self,
        sources: impl IntoIterator<Item = LogSource>,
    ) -> Result<Option<Report>, AnalyzeError> {
        let mut source_names = Vec::new();
        let mut request_count: u64 = 0;
        let mut body_size_sum: u64 = 0;
        let mut skipped_lines: u64 = 0;
        let mut sketch = QuantileSketch::new(RELATIVE_ACCURACY);
        let mut resources = OrderedCounter::new();
        let mut status_codes = OrderedCounter::new();
        let mut hours = OrderedCounter::new();
        let mut remote_addresses = OrderedCounter::new();

        for source in sources {
            source_names.push(source.name.clone());

            for line in source.lines {
                let line = line.map_err(|e| AnalyzeError::read_source(source.name.as_str(), e))?;

                let record = match parse_line(&line) {
                    Ok(record) => record,
                    Err(e) => match self.options.on_malformed {
                        MalformedLinePolicy::Abort => return Err(e),
                        MalformedLinePolicy::Skip => {
                            skipped_lines += 1;
                            warn!(source = %source.name, error = %e, "skipping malformed line");
                            continue;
                        }
                    },
                };

                if !self.filter.passes(&record) {
                    continue;
                }

                sketch.accept(record.body_size);
                request_count += 1;
                body_size_sum += record.body_size;
                resources.increment(record.resource_key());
                status_codes.increment(record.status);
                hours.increment(record.timestamp.hour());
                remote_addresses.increment(record.remote_address);
            }

            debug!(source = %source.name, matched = request_count, "source drained");
        }

        if skipped_lines > 0 {
            warn!(skipped_lines, "malformed lines were skipped");
        }

        if request_count == 0 {
            return Ok(None);
        }

        // request_count > 0 guarantees the sketch is non-empty.
        let p95_body_size = sketch.quantile(P95).unwrap_or(0.0);

        Ok(Some(Report {
            sources: source_names,
            from_date: self.filter.from_date(),
            to_date: self.filter.to_date(),
            request_count,
            average_body_size: body_size_sum as f64 / request_count as f64,
            p95_body_size,
            resources: resources.into_ranked(),
            status_codes: status_codes.into_ranked(),
            hours: hours.into_ranked(),
            top_remote_addresses: remote_addresses.into_top(REMOTE_ADDRESS_LIMIT),
        }))
    }
}
