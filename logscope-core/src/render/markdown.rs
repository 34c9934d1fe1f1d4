use crate::render::ReportRenderer;

const SEPARATOR_WIDTH: usize = 10;

/// Pipe-table Markdown output.
pub struct MarkdownRenderer;

impl ReportRenderer for MarkdownRenderer {
    fn format_title(&self, title: &str) -> String {
        format!("#### {title}\n")
    }

    fn format_table(&self, table: &[Vec<String>]) -> String {
        let mut out = String::new();

        let Some(header) = table.first() else {
            return out;
        };

        push_row(&mut out, header);
        let separator: Vec<String> = header
            .iter()
            .map(|_| format!(":{}:", "-".repeat(SEPARATOR_WIDTH)))
            .collect();
        push_row(&mut out, &separator);

        for row in &table[1..] {
            push_row(&mut out, row);
        }

        out.push('\n');
        out
    }
}

fn push_row(out: &mut String, cells: &[String]) {
    for cell in cells {
        out.push('|');
        out.push_str(cell);
    }
    out.push_str("|\n");
}
