use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("Invalid path '{path}': file paths must not contain whitespace")]
    InvalidPath { path: String },

    #[error("Invalid status '{status}' for file '{path}'")]
    InvalidStatus { path: String, status: String },
}

impl ClassifyError {
    /// Path of the record that failed validation
    pub fn path(&self) -> &str {
        match self {
            ClassifyError::InvalidPath { path } => path,
            ClassifyError::InvalidStatus { path, .. } => path,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseFormatError {
    #[error("Unknown output format '{0}' (expected one of: csv, space_delimited, json)")]
    UnknownFormat(String),
}

pub type ClassifyResult<T> = Result<T, ClassifyError>;
