mod pattern;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use logscope_core::engine::{AggregationEngine, EngineOptions, MalformedLinePolicy};
use logscope_core::filter::{FieldMatcher, FilterField, RecordFilter};
use logscope_core::render::{AsciiDocRenderer, MarkdownRenderer, ReportRenderer};
use logscope_core::source::resolve_sources;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug)]
#[command(
    name = "logscope",
    version,
    about = "Aggregate traffic statistics from NCSA access logs"
)]
struct Cli {
    /// Glob pattern for local log files, or an http(s) URL
    #[arg(long)]
    path: String,

    /// Earliest date to include (YYYY-MM-DD)
    #[arg(long)]
    from: Option<NaiveDate>,

    /// Latest date to include (YYYY-MM-DD)
    #[arg(long)]
    to: Option<NaiveDate>,

    /// Report format
    #[arg(long, value_enum, default_value = "adoc")]
    format: Format,

    /// Record attribute for additional filtering
    #[arg(long = "filter-field", requires = "filter_value")]
    filter_field: Option<String>,

    /// Glob-like pattern the attribute must match in full
    #[arg(long = "filter-value", requires = "filter_field")]
    filter_value: Option<String>,

    /// Where the report goes
    #[arg(long, value_enum, default_value = "console")]
    output: Output,

    /// What to do with lines that do not match the log grammar
    #[arg(long = "on-malformed", value_enum, default_value = "abort")]
    on_malformed: OnMalformed,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Markdown,
    Adoc,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Output {
    Console,
    File,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OnMalformed {
    Abort,
    Skip,
}

impl From<OnMalformed> for MalformedLinePolicy {
    fn from(value: OnMalformed) -> Self {
        match value {
            OnMalformed::Abort => Self::Abort,
            OnMalformed::Skip => Self::Skip,
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Logs go to stderr so the rendered report on stdout stays clean.
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    run(Cli::parse())
}

fn run(cli: Cli) -> Result<()> {
    // Filter configuration errors surface before any record is processed.
    let matcher = match (&cli.filter_field, &cli.filter_value) {
        (Some(field), Some(value)) => {
            let field: FilterField = field.parse()?;
            let regex = pattern::glob_to_regex(value)?;
            Some(FieldMatcher::new(field, regex))
        }
        _ => None,
    };
    let filter = RecordFilter::new(cli.from, cli.to, matcher);

    let sources = resolve_sources(&cli.path)?;
    if sources.is_empty() {
        println!("No log sources found at '{}'.", cli.path);
        return Ok(());
    }

    let options = EngineOptions {
        on_malformed: cli.on_malformed.into(),
    };
    let engine = AggregationEngine::with_options(filter, options);

    let Some(report) = engine.run(sources)? else {
        println!("No log records matched the given filters.");
        return Ok(());
    };

    let rendered = match cli.format {
        Format::Markdown => MarkdownRenderer.render(&report),
        Format::Adoc => AsciiDocRenderer.render(&report),
    };

    match cli.output {
        Output::Console => print!("{rendered}"),
        Output::File => {
            let path = match cli.format {
                Format::Markdown => "log-report.md",
                Format::Adoc => "log-report.adoc",
            };
            std::fs::write(path, &rendered).with_context(|| format!("failed to write {path}"))?;
            info!(path, "report written");
        }
    }

    Ok(())
}
