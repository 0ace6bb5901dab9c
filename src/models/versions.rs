use crate::ports::ToolsFactory;
use serde::{Deserialize, Serialize};

/// Snapshot of the versions a factory can serve, in the order it reports them.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailableVersions {
    pub versions: Vec<String>,
}

impl AvailableVersions {
    pub fn from_factory<F: ToolsFactory + ?Sized>(factory: &F) -> Self {
        Self {
            versions: factory.available_versions(),
        }
    }

    pub fn contains(&self, version: &str) -> bool {
        self.versions.iter().any(|v| v == version)
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.versions.iter().map(String::as_str)
    }
}

impl From<Vec<String>> for AvailableVersions {
    fn from(versions: Vec<String>) -> Self {
        Self { versions }
    }
}
