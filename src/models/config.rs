use crate::ToolsError;
use serde::{Deserialize, Serialize};

/// Host-side settings for composing a tools factory.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct FactoryConfig {
    /// Version the host expects the tools service to report. `None` accepts any.
    pub pinned_version: Option<String>,
}

impl FactoryConfig {
    pub fn pinned<S: Into<String>>(version: S) -> Self {
        Self {
            pinned_version: Some(version.into()),
        }
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ToolsError> {
        Ok(toml::from_str(text)?)
    }
}
