//! Writing classification results

use anyhow::{Context, Result};
use changecalc_classify::ClassificationResult;
use changecalc_core::EmitMode;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

/// Serialize a result in the requested emit mode, newline terminated
pub fn render(result: &ClassificationResult, mode: EmitMode) -> Result<String> {
    match mode {
        EmitMode::Json => {
            let mut content = serde_json::to_string_pretty(result)
                .context("Failed to serialize classification result")?;
            content.push('\n');
            Ok(content)
        }
        EmitMode::KeyValue => {
            let mut content = String::new();
            for (name, value) in result.entries() {
                content.push_str(name);
                content.push('=');
                content.push_str(value);
                content.push('\n');
            }
            Ok(content)
        }
    }
}

/// Write rendered output to a file, or stdout when no path is given
pub fn write_output(content: &str, path: Option<&Path>, append: bool) -> Result<()> {
    match path {
        Some(path) => {
            let mut file = OpenOptions::new()
                .create(true)
                .write(true)
                .append(append)
                .truncate(!append)
                .open(path)
                .with_context(|| format!("Failed to open output file {}", path.display()))?;
            file.write_all(content.as_bytes())
                .with_context(|| format!("Failed to write output file {}", path.display()))?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
