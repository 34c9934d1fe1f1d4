//! Text renderers for [`Report`].
//!
//! A renderer only supplies the title and table primitives; the section
//! layout is fixed and shared. Two concrete formats exist: Markdown and
//! AsciiDoc.

mod asciidoc;
mod markdown;
mod status;
mod tables;

pub use asciidoc::AsciiDocRenderer;
pub use markdown::MarkdownRenderer;
pub use status::status_name;

use crate::report::Report;

pub trait ReportRenderer {
    fn format_title(&self, title: &str) -> String;

    /// First row of `table` is the column header.
    fn format_table(&self, table: &[Vec<String>]) -> String;

    fn render(&self, report: &Report) -> String {
        let sections = [
            ("General information", tables::general_info(report)),
            ("Requested resources", tables::resources(report)),
            ("Response codes", tables::response_codes(report)),
            ("Requests per hour", tables::requests_per_hour(report)),
            ("Top remote addresses", tables::remote_addresses(report)),
        ];

        let mut out = String::new();
        for (title, table) in sections {
            out.push_str(&self.format_title(title));
            out.push_str(&self.format_table(&table));
        }
        out
    }
}
