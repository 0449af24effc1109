//! Game server configuration (ranvier.json)
//!
//! Only the `bundles` field is understood. Every other top-level field is
//! carried through untouched and in its original position, so rewriting the
//! file changes nothing but the bundle list and whitespace.

use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{self, Result};

/// File name of the server configuration, relative to the repository root
pub const CONFIG_FILE_NAME: &str = "ranvier.json";

/// Key of the bundle enablement list
const BUNDLES_KEY: &str = "bundles";

/// Server configuration (ranvier.json)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServerConfig {
    /// Short names of the enabled bundles
    pub bundles: Vec<String>,

    /// All top-level fields in file order, including the original `bundles`
    fields: Map<String, Value>,
}

impl ServerConfig {
    /// Parse server configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let json = json.strip_prefix('\u{feff}').unwrap_or(json);
        let value: Value = serde_json::from_str(json)?;
        let Value::Object(fields) = value else {
            return Err(error::config::not_an_object());
        };

        let bundles = match fields.get(BUNDLES_KEY) {
            Some(value) => bundles_from_value(value)?,
            None => Vec::new(),
        };

        Ok(Self { bundles, fields })
    }

    /// Serialize server configuration to a JSON string with 2-space indentation
    pub fn to_json(&self) -> Result<String> {
        let mut fields = self.fields.clone();
        // Replacing an existing key keeps its position; a new key goes last
        fields.insert(
            BUNDLES_KEY.to_string(),
            Value::Array(self.bundles.iter().cloned().map(Value::String).collect()),
        );
        Ok(serde_json::to_string_pretty(&Value::Object(fields))?)
    }

    /// Load the configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let display = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                error::config::not_found(&display)
            } else {
                error::config::read_failed(&display, e.to_string())
            }
        })?;

        Self::from_json(&content).map_err(|e| match e {
            crate::error::InitError::ConfigParseFailed { reason, .. } => {
                error::config::parse_failed(&display, reason)
            }
            other => other,
        })
    }

    /// Write the configuration back to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json)
            .map_err(|e| error::fs::write_failed(path.display().to_string(), e.to_string()))
    }

    /// Replace the bundle list
    pub fn set_bundles<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bundles = names.into_iter().map(Into::into).collect();
    }

    /// Look up any other top-level field
    #[cfg(test)]
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

/// Read the bundle list out of an already parsed JSON value
fn bundles_from_value(value: &Value) -> Result<Vec<String>> {
    Vec::<String>::deserialize(value)
        .map_err(|e| error::config::bundles_not_strings(e.to_string()))
}
