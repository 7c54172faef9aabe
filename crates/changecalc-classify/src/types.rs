//! Type definitions for change classification

use crate::error::ParseFormatError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single file touched by a pull request, as reported by the hosting API.
///
/// The status is kept as the raw token; it is only turned into a
/// [`ChangeStatus`] during classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangedFileRecord {
    pub path: String,
    pub status: String,
}

impl ChangedFileRecord {
    pub fn new(path: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            status: status.into(),
        }
    }
}

/// Recognized change statuses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeStatus {
    Added,
    Modified,
    Removed,
    Renamed,
}

impl ChangeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeStatus::Added => "added",
            ChangeStatus::Modified => "modified",
            ChangeStatus::Removed => "removed",
            ChangeStatus::Renamed => "renamed",
        }
    }
}

impl fmt::Display for ChangeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a status token is not one of the recognized statuses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl FromStr for ChangeStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "added" => Ok(ChangeStatus::Added),
            "modified" => Ok(ChangeStatus::Modified),
            "removed" => Ok(ChangeStatus::Removed),
            "renamed" => Ok(ChangeStatus::Renamed),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// How a bucket of paths is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Csv,
    SpaceDelimited,
    Json,
}

impl OutputFormat {
    pub const VARIANTS: &'static [&'static str] = &["csv", "space_delimited", "json"];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::SpaceDelimited => "space_delimited",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "csv" => Ok(OutputFormat::Csv),
            "space_delimited" | "space-delimited" => Ok(OutputFormat::SpaceDelimited),
            "json" => Ok(OutputFormat::Json),
            other => Err(ParseFormatError::UnknownFormat(other.to_string())),
        }
    }
}
