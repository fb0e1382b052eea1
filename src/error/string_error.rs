//! Plain-message payload for [`SyncError`](crate::error::SyncError) variants
//! that carry no structured data.
//!

use std::fmt;

pub struct StringError(String);

impl From<&str> for StringError {
    fn from(msg: &str) -> Self {
        StringError(msg.to_string())
    }
}

impl From<String> for StringError {
    fn from(msg: String) -> Self {
        StringError(msg)
    }
}

impl fmt::Display for StringError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Debug for StringError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for StringError {}
