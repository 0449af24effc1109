//! Command implementations for init-bundles

pub mod helpers;
pub mod setup;
