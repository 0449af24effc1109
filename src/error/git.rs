//! Git errors

use super::InitError;

/// Creates a git operation failed error
pub fn operation_failed(message: impl Into<String>) -> InitError {
    InitError::GitOperationFailed {
        message: message.into(),
    }
}

/// Creates a stage failed error
pub fn stage_failed(path: impl Into<String>, reason: impl Into<String>) -> InitError {
    InitError::GitStageFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
