//! Partitioning of changed files into status buckets

use crate::error::{ClassifyError, ClassifyResult};
use crate::formatter::format_paths;
use crate::types::{ChangeStatus, ChangedFileRecord, OutputFormat};
use serde::Serialize;

/// Unformatted path buckets, each in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Buckets {
    pub added: Vec<String>,
    pub modified: Vec<String>,
    pub removed: Vec<String>,
    pub renamed: Vec<String>,
    pub added_or_modified: Vec<String>,
    pub all: Vec<String>,
}

impl Buckets {
    /// Bucket holding paths with the given status
    pub fn for_status(&self, status: ChangeStatus) -> &[String] {
        match status {
            ChangeStatus::Added => &self.added,
            ChangeStatus::Modified => &self.modified,
            ChangeStatus::Removed => &self.removed,
            ChangeStatus::Renamed => &self.renamed,
        }
    }

    fn push(&mut self, status: ChangeStatus, path: &str) {
        let bucket = match status {
            ChangeStatus::Added => &mut self.added,
            ChangeStatus::Modified => &mut self.modified,
            ChangeStatus::Removed => &mut self.removed,
            ChangeStatus::Renamed => &mut self.renamed,
        };
        bucket.push(path.to_string());
        self.all.push(path.to_string());
    }

    /// Format every bucket with the same output format
    pub fn render(&self, format: OutputFormat) -> ClassificationResult {
        ClassificationResult {
            added: format_paths(&self.added, format),
            modified: format_paths(&self.modified, format),
            removed: format_paths(&self.removed, format),
            renamed: format_paths(&self.renamed, format),
            added_or_modified: format_paths(&self.added_or_modified, format),
            all: format_paths(&self.all, format),
        }
    }
}

/// Formatted rendering of each bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    pub added: String,
    pub modified: String,
    pub removed: String,
    pub renamed: String,
    #[serde(rename = "addedOrModified")]
    pub added_or_modified: String,
    pub all: String,
}

impl ClassificationResult {
    /// Field names paired with their formatted values, in a stable order
    pub fn entries(&self) -> [(&'static str, &str); 6] {
        [
            ("added", &self.added),
            ("modified", &self.modified),
            ("removed", &self.removed),
            ("renamed", &self.renamed),
            ("addedOrModified", &self.added_or_modified),
            ("all", &self.all),
        ]
    }
}

/// Validate a single record and resolve its status
pub fn validate_record(record: &ChangedFileRecord) -> ClassifyResult<ChangeStatus> {
    if record.path.chars().any(char::is_whitespace) {
        return Err(ClassifyError::InvalidPath {
            path: record.path.clone(),
        });
    }

    record
        .status
        .parse::<ChangeStatus>()
        .map_err(|unknown| ClassifyError::InvalidStatus {
            path: record.path.clone(),
            status: unknown.0,
        })
}

/// Split records into buckets without formatting them.
///
/// Stops at the first invalid record.
pub fn partition(records: &[ChangedFileRecord]) -> ClassifyResult<Buckets> {
    let mut buckets = Buckets::default();

    for record in records {
        let status = validate_record(record)?;
        buckets.push(status, &record.path);
    }

    buckets.added_or_modified = buckets
        .added
        .iter()
        .chain(buckets.modified.iter())
        .cloned()
        .collect();

    Ok(buckets)
}

/// Classify records and render every bucket in `format`
pub fn classify(
    records: &[ChangedFileRecord],
    format: OutputFormat,
) -> ClassifyResult<ClassificationResult> {
    partition(records).map(|buckets| buckets.render(format))
}
