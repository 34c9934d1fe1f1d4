use logscope_core::engine::AggregationEngine;
use logscope_core::error::AnalyzeError;
use logscope_core::filter::{FieldMatcher, FilterField, RecordFilter};
use logscope_core::render::{AsciiDocRenderer, MarkdownRenderer, ReportRenderer};
use logscope_core::source::resolve_sources;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::{TempDir, tempdir};

const DAY_ONE: &str = "\
93.180.71.3 - - [17/May/2015:08:05:32 +0000] \"GET /downloads/product_1 HTTP/1.1\" 304 0 \"-\" \"Debian APT-HTTP/1.3\"
217.168.17.5 - - [17/May/2015:08:05:34 +0000] \"GET /downloads/product_1 HTTP/1.1\" 200 490 \"-\" \"Debian APT-HTTP/1.3\"
217.168.17.5 - - [17/May/2015:09:12:01 +0000] \"GET /downloads/product_2 HTTP/1.1\" 200 3318 \"-\" \"curl/7.38.0\"
";

const DAY_TWO: &str = "\
80.91.33.133 - - [18/May/2015:14:05:00 +0000] \"GET /downloads/product_1 HTTP/1.1\" 304 0 \"-\" \"Debian APT-HTTP/1.3\"
";

fn write_logs(dir: &TempDir) -> String {
    fs::write(dir.path().join("access-1.log"), DAY_ONE).unwrap();
    fs::write(dir.path().join("access-2.log"), DAY_TWO).unwrap();
    dir.path().join("*.log").to_string_lossy().into_owned()
}

fn pattern_for(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[test]
fn aggregates_multiple_files_into_one_report() {
    // Arrange
    let dir = tempdir().unwrap();
    let pattern = write_logs(&dir);

    // Act
    let sources = resolve_sources(&pattern).unwrap();
    let report = AggregationEngine::new(RecordFilter::default())
        .run(sources)
        .unwrap()
        .unwrap();

    // Assert
    assert_eq!(report.sources, vec!["access-1.log", "access-2.log"]);
    assert_eq!(report.request_count, 4);
    assert_eq!(report.average_body_size, 952.0);
    assert_eq!(
        report.resources,
        vec![("/product_1".to_string(), 3), ("/product_2".to_string(), 1)]
    );
    assert_eq!(report.status_codes, vec![(304, 2), (200, 2)]);
    assert_eq!(report.hours, vec![(8, 2), (9, 1), (14, 1)]);
}

#[test]
fn date_window_restricts_the_report() {
    // Arrange
    let dir = tempdir().unwrap();
    let pattern = write_logs(&dir);
    let filter = RecordFilter::new(
        Some("2015-05-18".parse().unwrap()),
        Some("2015-05-18".parse().unwrap()),
        None,
    );

    // Act
    let sources = resolve_sources(&pattern).unwrap();
    let report = AggregationEngine::new(filter)
        .run(sources)
        .unwrap()
        .unwrap();

    // Assert: only the day-two file contributes records, but both files
    // were still processed.
    assert_eq!(report.sources.len(), 2);
    assert_eq!(report.request_count, 1);
    assert_eq!(
        report.top_remote_addresses,
        vec![("80.91.33.133".to_string(), 1)]
    );
}

#[test]
fn agent_filter_selects_matching_records_across_files() {
    // Arrange
    let dir = tempdir().unwrap();
    let pattern = write_logs(&dir);
    let matcher = FieldMatcher::new(
        FilterField::Agent,
        regex_for_glob("Debian*"),
    );
    let filter = RecordFilter::new(None, None, Some(matcher));

    // Act
    let sources = resolve_sources(&pattern).unwrap();
    let report = AggregationEngine::new(filter)
        .run(sources)
        .unwrap()
        .unwrap();

    // Assert
    assert_eq!(report.request_count, 3);
    assert_eq!(report.resources, vec![("/product_1".to_string(), 3)]);
}

#[test]
fn filtering_everything_out_produces_no_report() {
    // Arrange
    let dir = tempdir().unwrap();
    let pattern = write_logs(&dir);
    let matcher = FieldMatcher::new(FilterField::Method, regex_for_glob("DELETE"));
    let filter = RecordFilter::new(None, None, Some(matcher));

    // Act
    let sources = resolve_sources(&pattern).unwrap();
    let outcome = AggregationEngine::new(filter).run(sources).unwrap();

    // Assert
    assert!(outcome.is_none());
}

#[test]
fn a_malformed_file_aborts_the_run() {
    // Arrange
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("good.log"), DAY_ONE).unwrap();
    fs::write(
        dir.path().join("mixed.log"),
        format!("{DAY_TWO}this line is not a log record\n"),
    )
    .unwrap();

    // Act
    let sources = resolve_sources(&pattern_for(&dir.path().join("*.log"))).unwrap();
    let err = AggregationEngine::new(RecordFilter::default())
        .run(sources)
        .unwrap_err();

    // Assert
    assert!(matches!(err, AnalyzeError::MalformedLine { .. }));
}

#[test]
fn markdown_and_asciidoc_render_the_same_report() {
    // Arrange
    let dir = tempdir().unwrap();
    let pattern = write_logs(&dir);
    let sources = resolve_sources(&pattern).unwrap();
    let report = AggregationEngine::new(RecordFilter::default())
        .run(sources)
        .unwrap()
        .unwrap();

    // Act
    let markdown = MarkdownRenderer.render(&report);
    let asciidoc = AsciiDocRenderer.render(&report);

    // Assert
    assert!(markdown.contains("|File(s)|access-1.log, access-2.log|"));
    assert!(markdown.contains("|Requests|4|"));
    assert!(markdown.contains("|/product_1|3|"));
    assert!(asciidoc.contains("==== General information"));
    assert!(asciidoc.contains("^|304 ^|Not Modified >|2 "));
}

// Mirrors the CLI's glob-to-regex compilation for filter values.
fn regex_for_glob(glob: &str) -> regex::Regex {
    let mut pattern = String::from("^");
    for c in glob.chars() {
        match c {
            '*' => pattern.push_str(".*"),
            '?' => pattern.push('.'),
            '.' => pattern.push_str("\\."),
            other => pattern.push(other),
        }
    }
    pattern.push('$');
    regex::Regex::new(&pattern).unwrap()
}
