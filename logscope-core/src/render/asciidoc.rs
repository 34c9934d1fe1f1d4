use crate::render::ReportRenderer;

const TABLE_FENCE: &str = "|===";

/// AsciiDoc output: `====` titles, `|===`-fenced tables, cells centered
/// except the last column which is right-aligned.
pub struct AsciiDocRenderer;

impl ReportRenderer for AsciiDocRenderer {
    fn format_title(&self, title: &str) -> String {
        format!("==== {title}\n")
    }

    fn format_table(&self, table: &[Vec<String>]) -> String {
        let mut out = String::new();
        out.push_str(TABLE_FENCE);
        out.push('\n');

        for row in table {
            let width = row.len();
            for (i, cell) in row.iter().enumerate() {
                let alignment = if i == width - 1 { ">|" } else { "^|" };
                out.push_str(alignment);
                out.push_str(cell);
                out.push(' ');
            }
            out.push('\n');
        }

        out.push_str(TABLE_FENCE);
        out.push('\n');
        out
    }
}
