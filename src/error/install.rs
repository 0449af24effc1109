//! Package manager errors

use super::InitError;

/// Creates a bundle install failed error
pub fn bundle_failed(bundle: impl Into<String>, reason: impl Into<String>) -> InitError {
    InitError::BundleInstallFailed {
        bundle: bundle.into(),
        reason: reason.into(),
    }
}

/// Creates a spawn failed error
pub fn spawn_failed(program: impl Into<String>, reason: impl Into<String>) -> InitError {
    InitError::CommandSpawnFailed {
        program: program.into(),
        reason: reason.into(),
    }
}
