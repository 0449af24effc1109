//! `ranvier.json` errors
//!
//! Paths are reported as given, which is the absolute path under the
//! repository root.

use super::InitError;

/// `ranvier.json` does not exist at the repository root
pub fn not_found(path: impl Into<String>) -> InitError {
    InitError::ConfigNotFound { path: path.into() }
}

/// `ranvier.json` exists but could not be read
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> InitError {
    InitError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// `ranvier.json` is not valid JSON
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> InitError {
    InitError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// The server only accepts a JSON object at the top level
pub fn not_an_object() -> InitError {
    InitError::ConfigInvalid {
        message: "ranvier.json must contain a JSON object".to_string(),
    }
}

/// The `bundles` field holds something other than a list of bundle names
pub fn bundles_not_strings(reason: impl Into<String>) -> InitError {
    InitError::ConfigInvalid {
        message: format!("'bundles' must be an array of strings: {}", reason.into()),
    }
}
