use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolsError {
    #[error("Tools service cannot report its version: {0}")]
    VersionUnavailable(String),

    #[error("Tools service reports version `{actual}` but `{expected}` is pinned")]
    VersionMismatch { expected: String, actual: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ToolsError {
    pub fn version_unavailable<S: Into<String>>(msg: S) -> Self {
        Self::VersionUnavailable(msg.into())
    }
}

impl From<toml::de::Error> for ToolsError {
    fn from(err: toml::de::Error) -> Self {
        Self::InvalidConfig(err.to_string())
    }
}
