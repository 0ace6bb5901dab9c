// src/factories/mod.rs

mod version_pinned;

pub use version_pinned::VersionPinnedToolsFactory;

use crate::{
    ToolsError,
    ports::{FrameworkPrecedenceService, ToolsFactory, ToolsService},
};
use std::sync::Arc;

/// Tools factory selected by the host at composition time.
///
/// Callers depend on the `ToolsFactory` port only, so any variant can be
/// plugged in here.
#[derive(Clone)]
pub struct Factories {
    tools: Arc<dyn ToolsFactory>,
}

impl Factories {
    pub fn new(tools: Arc<dyn ToolsFactory>) -> Self {
        Self { tools }
    }

    /// Composes a version-pinned factory over the given services.
    pub fn pinned(
        tools_service: Arc<dyn ToolsService>,
        framework_precedence_service: Arc<dyn FrameworkPrecedenceService>,
    ) -> Result<Self, ToolsError> {
        let factory = VersionPinnedToolsFactory::new(tools_service, framework_precedence_service)?;
        Ok(Self::new(Arc::new(factory)))
    }

    /// Returns the tools factory.
    pub fn tools(&self) -> &Arc<dyn ToolsFactory> {
        &self.tools
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AvailableVersions;
    use tokio_util::sync::CancellationToken;

    #[derive(Debug)]
    struct StaticTools(&'static str);

    impl ToolsService for StaticTools {
        fn version(&self) -> Result<&str, ToolsError> {
            Ok(self.0)
        }
    }

    #[derive(Debug)]
    struct NoopPrecedence;

    impl FrameworkPrecedenceService for NoopPrecedence {}

    #[test]
    fn test_pinned_composition() {
        let factories =
            Factories::pinned(Arc::new(StaticTools("4.9.2")), Arc::new(NoopPrecedence)).unwrap();

        let versions = AvailableVersions::from_factory(factories.tools().as_ref());
        assert_eq!(versions.versions, vec!["4.9.2".to_string()]);
        assert!(factories.tools().get_service("4.9.2").is_some());
    }

    #[tokio::test]
    async fn test_lookup_through_trait_object() {
        let factories =
            Factories::pinned(Arc::new(StaticTools("4.9.2")), Arc::new(NoopPrecedence)).unwrap();
        let cancel = CancellationToken::new();
        let tools = factories.tools();

        assert!(tools.get_service_async("4.9.2", &cancel).await.is_some());
        assert!(tools.get_service_async("4.9.3", &cancel).await.is_none());
        assert!(
            tools
                .get_framework_precedence_service_async("4.9.2", &cancel)
                .await
                .is_some()
        );
    }
}
