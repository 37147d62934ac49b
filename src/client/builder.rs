use std::fs;
use std::path::PathBuf;

use crate::client::core::OpenHandsClient;
use crate::config;
use crate::runtime::Runtime;
use crate::Result;

/// Builder for creating clients with custom configuration.
///
/// Keep this surface area small and predictable (developer-friendly).
pub struct ClientBuilder {
    provider: Option<String>,
    workspace_dir: Option<PathBuf>,
    server_url: Option<String>,
    runtime: Option<Box<dyn Runtime>>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self {
            provider: None,
            workspace_dir: None,
            server_url: None,
            runtime: None,
        }
    }

    /// Select a provider profile by name. Default comes from `LLM_PROVIDER`.
    pub fn provider(mut self, name: impl Into<String>) -> Self {
        self.provider = Some(name.into());
        self
    }

    /// Filesystem root scoping all relative file operations.
    /// Default comes from `WORKSPACE_DIR`.
    pub fn workspace_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.workspace_dir = Some(dir.into());
        self
    }

    /// Override the OpenHands server URL from `OPENHANDS_SERVER_URL`.
    ///
    /// This is primarily for testing with mock servers.
    pub fn server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = Some(url.into());
        self
    }

    /// Inject a runtime handle instead of connecting over HTTP on `start`.
    ///
    /// This is the seam tests use to substitute an in-memory runtime.
    pub fn with_runtime(mut self, runtime: Box<dyn Runtime>) -> Self {
        self.runtime = Some(runtime);
        self
    }

    /// Resolve the profile, create the workspace directory, and return a
    /// client that has not yet acquired a runtime handle.
    pub fn build(self) -> Result<OpenHandsClient> {
        let profile = config::resolve_profile(self.provider.as_deref())?;
        let workspace_dir = self.workspace_dir.unwrap_or_else(config::workspace_dir);
        fs::create_dir_all(&workspace_dir)?;

        let server_url = self.server_url.unwrap_or_else(config::server_url);

        Ok(OpenHandsClient::from_parts(
            profile,
            workspace_dir,
            server_url,
            self.runtime,
        ))
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
