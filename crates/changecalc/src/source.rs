//! Change list sources
//!
//! The classifier only sees an already-fetched list of records. Sources turn
//! some external document into that list.

use anyhow::{Context, Result};
use changecalc_classify::ChangedFileRecord;
use serde::Deserialize;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Identifies the pull request being described and where its file list lives
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceConfig {
    pub owner: Option<String>,
    pub repo: Option<String>,
    pub pull_request: Option<u64>,
    /// `None` or `-` reads from stdin
    pub input: Option<PathBuf>,
}

impl SourceConfig {
    /// Human readable `owner/repo#number` label for logs
    pub fn describe(&self) -> String {
        let owner = self.owner.as_deref().unwrap_or("?");
        let repo = self.repo.as_deref().unwrap_or("?");
        match self.pull_request {
            Some(number) => format!("{}/{}#{}", owner, repo, number),
            None => format!("{}/{}", owner, repo),
        }
    }

    /// Input file path, or `None` when reading stdin
    fn input_path(&self) -> Option<&Path> {
        self.input
            .as_deref()
            .filter(|path| path.as_os_str() != "-")
    }
}

pub trait ChangeSource {
    fn fetch(&self) -> Result<Vec<ChangedFileRecord>>;
}

/// One entry of the hosting API's pull request files listing
#[derive(Debug, Deserialize)]
struct PullRequestFile {
    #[serde(alias = "path")]
    filename: String,
    status: String,
}

impl From<PullRequestFile> for ChangedFileRecord {
    fn from(file: PullRequestFile) -> Self {
        ChangedFileRecord::new(file.filename, file.status)
    }
}

/// Reads a pull request files JSON document from a file or stdin
#[derive(Debug)]
pub struct JsonFileSource {
    config: SourceConfig,
}

impl JsonFileSource {
    pub fn new(config: SourceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    /// Parse records from any reader.
    ///
    /// Accepts several arrays back to back, as written by paginated API
    /// listings; pages are concatenated in order.
    pub fn read_records<R: Read>(reader: R) -> Result<Vec<ChangedFileRecord>> {
        let mut records = Vec::new();
        let pages =
            serde_json::Deserializer::from_reader(reader).into_iter::<Vec<PullRequestFile>>();
        for page in pages {
            let page = page.context(
                "Failed to parse pull request files JSON (expected an array of objects with filename and status)",
            )?;
            records.extend(page.into_iter().map(ChangedFileRecord::from));
        }
        Ok(records)
    }
}

impl ChangeSource for JsonFileSource {
    fn fetch(&self) -> Result<Vec<ChangedFileRecord>> {
        let records = match self.config.input_path() {
            None => {
                debug!("Reading changed files for {} from stdin", self.config.describe());
                Self::read_records(io::stdin().lock())?
            }
            Some(path) => {
                debug!(
                    "Reading changed files for {} from {}",
                    self.config.describe(),
                    path.display()
                );
                let file = File::open(path)
                    .with_context(|| format!("Failed to open input file {}", path.display()))?;
                Self::read_records(BufReader::new(file))
                    .with_context(|| format!("Invalid input file {}", path.display()))?
            }
        };

        debug!("Fetched {} changed file records", records.len());
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const API_RESPONSE: &str = r#"[
        {"sha": "abc", "filename": "dtmi/com/example/thermostat-1.json", "status": "added", "additions": 10},
        {"sha": "def", "filename": "dtmi/com/example/sensor-2.json", "status": "modified", "additions": 1}
    ]"#;

    #[test]
    fn test_read_records_from_api_shape() {
        let records = JsonFileSource::read_records(API_RESPONSE.as_bytes()).unwrap();
        assert_eq!(
            records,
            vec![
                ChangedFileRecord::new("dtmi/com/example/thermostat-1.json", "added"),
                ChangedFileRecord::new("dtmi/com/example/sensor-2.json", "modified"),
            ]
        );
    }

    #[test]
    fn test_read_records_concatenates_pages() {
        let json = "[{\"filename\":\"a.json\",\"status\":\"added\"}]\n\
                    [{\"filename\":\"b.json\",\"status\":\"modified\"},\
                    {\"filename\":\"c.json\",\"status\":\"removed\"}]\n";
        let records = JsonFileSource::read_records(json.as_bytes()).unwrap();
        assert_eq!(
            records,
            vec![
                ChangedFileRecord::new("a.json", "added"),
                ChangedFileRecord::new("b.json", "modified"),
                ChangedFileRecord::new("c.json", "removed"),
            ]
        );
    }

    #[test]
    fn test_read_records_rejects_bad_second_page() {
        let json = r#"[{"filename": "a.json", "status": "added"}] {"filename": "b.json"}"#;
        let err = JsonFileSource::read_records(json.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("pull request files JSON"));
    }

    #[test]
    fn test_read_records_accepts_path_key() {
        let json = r#"[{"path": "a.json", "status": "removed"}]"#;
        let records = JsonFileSource::read_records(json.as_bytes()).unwrap();
        assert_eq!(records, vec![ChangedFileRecord::new("a.json", "removed")]);
    }

    #[test]
    fn test_unknown_status_is_passed_through() {
        let json = r#"[{"filename": "a.json", "status": "copied"}]"#;
        let records = JsonFileSource::read_records(json.as_bytes()).unwrap();
        assert_eq!(records[0].status, "copied");
    }

    #[test]
    fn test_malformed_document_is_error() {
        let err = JsonFileSource::read_records(r#"{"filename": "a.json"}"#.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("pull request files JSON"));
    }

    #[test]
    fn test_fetch_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("files.json");
        fs::write(&input, API_RESPONSE).unwrap();

        let source = JsonFileSource::new(SourceConfig {
            input: Some(input),
            ..SourceConfig::default()
        });
        let records = source.fetch().unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_fetch_missing_file_has_context() {
        let temp_dir = TempDir::new().unwrap();
        let source = JsonFileSource::new(SourceConfig {
            input: Some(temp_dir.path().join("missing.json")),
            ..SourceConfig::default()
        });
        let err = source.fetch().unwrap_err();
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn test_describe() {
        let config = SourceConfig {
            owner: Some("Azure".to_string()),
            repo: Some("iot-plugandplay-models".to_string()),
            pull_request: Some(7),
            input: None,
        };
        assert_eq!(config.describe(), "Azure/iot-plugandplay-models#7");
        assert!(config.input_path().is_none());
        let dash = SourceConfig {
            input: Some(PathBuf::from("-")),
            ..SourceConfig::default()
        };
        assert!(dash.input_path().is_none());
        assert_eq!(SourceConfig::default().describe(), "?/?");
    }
}
