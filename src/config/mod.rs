//! Configuration file handling for init-bundles
//!
//! This module contains data structures for:
//! - `ranvier.json` - Game server configuration, of which only the bundle list is managed here

pub mod server;

pub use server::{CONFIG_FILE_NAME, ServerConfig};
