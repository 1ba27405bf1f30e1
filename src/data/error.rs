use std::path::PathBuf;

use thiserror::Error;

/// Failures the data layer recovers from locally.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataError {
    /// The source file is missing, unreadable or malformed. The session
    /// carries on with an empty dataset and shows this as a notice.
    #[error("Data unavailable: could not load '{}': {reason}", path.display())]
    DataUnavailable { path: PathBuf, reason: String },

    /// A column needed by an aggregate view is not in the schema.
    #[error("Column '{0}' is not present in the dataset")]
    MissingColumn(String),
}
