use logscope_core::error::AnalyzeError;
use regex::Regex;

/// Compiles a glob-like filter value into an anchored regex.
///
/// `*` matches any run of characters, `?` a single character; dots and
/// backslashes are escaped. The result is wrapped in `^…$` so the filter
/// performs a whole-string match, never a substring search.
pub fn glob_to_regex(glob: &str) -> Result<Regex, AnalyzeError> {
    let mut regex = String::with_capacity(glob.len() + 2);
    regex.push('^');
    for c in glob.chars() {
        match c {
            '*' => regex.push_str(".*"),
            '?' => regex.push('.'),
            '.' => regex.push_str("\\."),
            '\\' => regex.push_str("\\\\"),
            other => regex.push(other),
        }
    }
    regex.push('$');

    Regex::new(&regex).map_err(|e| AnalyzeError::Pattern {
        pattern: glob.to_string(),
        source: e,
    })
}
