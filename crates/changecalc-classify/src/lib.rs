//! Pull request change classification
//!
//! Groups the files changed in a pull request by their change status and
//! renders each group as a CSV, space-delimited or JSON list. Validation
//! happens up front: a path with whitespace or an unrecognized status aborts
//! the whole classification.

mod classifier;
mod error;
mod formatter;
mod types;

pub use classifier::{classify, partition, validate_record, Buckets, ClassificationResult};
pub use error::{ClassifyError, ClassifyResult, ParseFormatError};
pub use formatter::format_paths;
pub use types::{ChangeStatus, ChangedFileRecord, OutputFormat, UnknownStatus};
