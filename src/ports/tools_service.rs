use crate::ToolsError;
use std::fmt::Debug;

/// Version-specific tooling capability held by a factory.
///
/// The service is the source of truth for its own version identifier.
pub trait ToolsService: Send + Sync + Debug {
    /// Returns the version this service implements.
    ///
    /// # Returns
    /// * `Ok(&str)` - The version identifier, compared verbatim by factories
    /// * `Err(ToolsError)` - The service cannot report a version
    fn version(&self) -> Result<&str, ToolsError>;
}
