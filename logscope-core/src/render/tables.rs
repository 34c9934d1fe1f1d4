use crate::render::status::status_name;
use crate::report::Report;
use chrono::NaiveDate;

fn date_cell(date: Option<NaiveDate>) -> String {
    date.map(|d| d.to_string()).unwrap_or_else(|| "-".into())
}

pub(super) fn general_info(report: &Report) -> Vec<Vec<String>> {
    vec![
        vec!["Metric".into(), "Value".into()],
        vec!["File(s)".into(), report.sources.join(", ")],
        vec!["From date".into(), date_cell(report.from_date)],
        vec!["To date".into(), date_cell(report.to_date)],
        vec!["Requests".into(), report.request_count.to_string()],
        vec![
            "Average body size".into(),
            (report.average_body_size as u64).to_string(),
        ],
        vec![
            "95p body size".into(),
            (report.p95_body_size as u64).to_string(),
        ],
    ]
}

pub(super) fn resources(report: &Report) -> Vec<Vec<String>> {
    let mut table = vec![vec!["Resource".into(), "Count".into()]];
    for (resource, count) in &report.resources {
        table.push(vec![resource.clone(), count.to_string()]);
    }
    table
}

pub(super) fn response_codes(report: &Report) -> Vec<Vec<String>> {
    let mut table = vec![vec!["Code".into(), "Name".into(), "Total".into()]];
    for (code, count) in &report.status_codes {
        table.push(vec![
            code.to_string(),
            status_name(*code).to_string(),
            count.to_string(),
        ]);
    }
    table
}

pub(super) fn requests_per_hour(report: &Report) -> Vec<Vec<String>> {
    let mut table = vec![vec!["Hours".into(), "Count".into()]];
    for (hour, count) in &report.hours {
        table.push(vec![
            format!("{hour:02}:00 - {hour:02}:59"),
            count.to_string(),
        ]);
    }
    table
}

pub(super) fn remote_addresses(report: &Report) -> Vec<Vec<String>> {
    let mut table = vec![vec!["Address".into(), "Count".into()]];
    for (address, count) in &report.top_remote_addresses {
        table.push(vec![address.clone(), count.to_string()]);
    }
    table
}
