//! Rendering of path buckets into the supported output encodings

use crate::types::OutputFormat;

/// Render an ordered sequence of paths in the requested format.
///
/// `csv` and `space_delimited` produce an empty string for an empty
/// sequence, `json` produces `[]`.
pub fn format_paths<S: AsRef<str>>(paths: &[S], format: OutputFormat) -> String {
    match format {
        OutputFormat::Csv => join(paths, ","),
        OutputFormat::SpaceDelimited => join(paths, " "),
        OutputFormat::Json => format_json(paths),
    }
}

fn join<S: AsRef<str>>(paths: &[S], separator: &str) -> String {
    let mut result = String::new();
    for (i, path) in paths.iter().enumerate() {
        if i > 0 {
            result.push_str(separator);
        }
        result.push_str(path.as_ref());
    }
    result
}

fn format_json<S: AsRef<str>>(paths: &[S]) -> String {
    let values: Vec<&str> = paths.iter().map(|path| path.as_ref()).collect();
    serde_json::Value::from(values).to_string()
}
