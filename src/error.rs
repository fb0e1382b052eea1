//! Errors for the tablesync library
//!
//! Enumeration for all errors that can occur while reconciling and loading
//! dataframes into a warehouse table.
//!

use derive_more::{Display, Error};

use polars::prelude::PolarsError;

pub mod string_error;

pub use crate::error::string_error::StringError;

#[derive(Debug, Display, Error)]
pub enum SyncError {
    // Destination table
    TableNotFound(StringError),
    UploadFailed(StringError),

    // Options
    InvalidMode(StringError),

    // External Library Errors
    PolarsError(PolarsError),
}

impl SyncError {
    pub fn table_not_found(table_id: impl AsRef<str>) -> Self {
        SyncError::TableNotFound(StringError::from(format!(
            "Table not found: {}",
            table_id.as_ref()
        )))
    }

    pub fn upload_failed(s: impl AsRef<str>) -> Self {
        SyncError::UploadFailed(StringError::from(s.as_ref()))
    }

    pub fn invalid_mode(s: impl AsRef<str>) -> Self {
        SyncError::InvalidMode(StringError::from(format!(
            "Invalid mode: {}",
            s.as_ref()
        )))
    }
}

impl From<PolarsError> for SyncError {
    fn from(error: PolarsError) -> Self {
        SyncError::PolarsError(error)
    }
}
