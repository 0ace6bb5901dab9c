use crate::ports::{FrameworkPrecedenceService, ToolsService};
use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Resolves tools services by version identifier.
///
/// A missing version is reported as `None`, never as an error.
#[async_trait]
pub trait ToolsFactory: Send + Sync {
    fn available_versions(&self) -> Vec<String>;

    async fn available_versions_async(&self, cancel: &CancellationToken) -> Vec<String>;

    fn get_service(&self, version: &str) -> Option<Arc<dyn ToolsService>>;

    async fn get_service_async(
        &self,
        version: &str,
        cancel: &CancellationToken,
    ) -> Option<Arc<dyn ToolsService>>;

    async fn get_framework_precedence_service_async(
        &self,
        version: &str,
        cancel: &CancellationToken,
    ) -> Option<Arc<dyn FrameworkPrecedenceService>>;

    fn supports_version(&self, version: &str) -> bool {
        self.available_versions().iter().any(|v| v == version)
    }
}
