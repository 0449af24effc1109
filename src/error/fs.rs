//! File system errors

use super::InitError;

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> InitError {
    InitError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
