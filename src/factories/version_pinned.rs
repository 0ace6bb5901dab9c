// src/factories/version_pinned.rs

use crate::{
    FactoryConfig, ToolsError,
    ports::{FrameworkPrecedenceService, ToolsFactory, ToolsService},
};
use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Factory that serves exactly one version of the tools services.
///
/// The version is read from the tools service once, at construction, and
/// never changes afterwards. Lookups match it by exact string equality, so
/// `"1.0.0 "` or `"1.0"` do not resolve a `"1.0.0"` factory.
#[derive(Debug, Clone)]
pub struct VersionPinnedToolsFactory {
    version: String,
    tools_service: Arc<dyn ToolsService>,
    framework_precedence_service: Arc<dyn FrameworkPrecedenceService>,
}

impl VersionPinnedToolsFactory {
    /// Creates a factory pinned to the version reported by `tools_service`.
    ///
    /// # Arguments
    /// * `tools_service` - Service whose version becomes the only available one
    /// * `framework_precedence_service` - Service returned alongside it
    ///
    /// # Returns
    /// * `Ok(VersionPinnedToolsFactory)` - Factory serving the reported version
    /// * `Err(ToolsError)` - The tools service could not report its version
    pub fn new(
        tools_service: Arc<dyn ToolsService>,
        framework_precedence_service: Arc<dyn FrameworkPrecedenceService>,
    ) -> Result<Self, ToolsError> {
        let version = tools_service.version()?.to_owned();
        log::debug!("Pinned tools factory to version `{}`", version);

        Ok(Self {
            version,
            tools_service,
            framework_precedence_service,
        })
    }

    /// Creates a factory and checks the reported version against the configured pin.
    ///
    /// # Returns
    /// * `Ok(VersionPinnedToolsFactory)` - No pin is configured, or it matches exactly
    /// * `Err(ToolsError::VersionMismatch)` - The service reports another version
    pub fn from_config(
        config: &FactoryConfig,
        tools_service: Arc<dyn ToolsService>,
        framework_precedence_service: Arc<dyn FrameworkPrecedenceService>,
    ) -> Result<Self, ToolsError> {
        let factory = Self::new(tools_service, framework_precedence_service)?;

        if let Some(expected) = &config.pinned_version {
            if *expected != factory.version {
                log::warn!(
                    "Rejecting tools service version `{}`, configuration pins `{}`",
                    factory.version,
                    expected
                );
                return Err(ToolsError::VersionMismatch {
                    expected: expected.clone(),
                    actual: factory.version,
                });
            }
        }

        Ok(factory)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn tools_service(&self) -> &Arc<dyn ToolsService> {
        &self.tools_service
    }

    pub fn framework_precedence_service(&self) -> &Arc<dyn FrameworkPrecedenceService> {
        &self.framework_precedence_service
    }

    fn matches(&self, version: &str) -> bool {
        let matched = version == self.version;
        if !matched {
            log::trace!(
                "No tools for version `{}`, factory is pinned to `{}`",
                version,
                self.version
            );
        }
        matched
    }
}

// The async variants never suspend, so the cancellation token is never observed.
#[async_trait]
impl ToolsFactory for VersionPinnedToolsFactory {
    fn available_versions(&self) -> Vec<String> {
        vec![self.version.clone()]
    }

    async fn available_versions_async(&self, _cancel: &CancellationToken) -> Vec<String> {
        self.available_versions()
    }

    fn get_service(&self, version: &str) -> Option<Arc<dyn ToolsService>> {
        self.matches(version).then(|| Arc::clone(&self.tools_service))
    }

    async fn get_service_async(
        &self,
        version: &str,
        _cancel: &CancellationToken,
    ) -> Option<Arc<dyn ToolsService>> {
        self.get_service(version)
    }

    async fn get_framework_precedence_service_async(
        &self,
        version: &str,
        _cancel: &CancellationToken,
    ) -> Option<Arc<dyn FrameworkPrecedenceService>> {
        self.matches(version)
            .then(|| Arc::clone(&self.framework_precedence_service))
    }
}
