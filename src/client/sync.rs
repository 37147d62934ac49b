use crate::client::builder::ClientBuilder;
use crate::client::core::{OpenHandsClient, PageSnapshot};
use crate::types::FinalState;
use crate::{Error, Result};

/// Synchronous wrapper for the client facade.
///
/// Creates one dedicated event loop per instance and drives every call to
/// completion sequentially on it. Not safe for concurrent use from multiple
/// threads, and must not be constructed inside an async context.
pub struct SyncClient {
    inner: OpenHandsClient,
    rt: tokio::runtime::Runtime,
}

impl SyncClient {
    /// Create a client for the given provider (default from `LLM_PROVIDER`).
    pub fn new(provider: Option<&str>) -> Result<Self> {
        let mut builder = ClientBuilder::new();
        if let Some(name) = provider {
            builder = builder.provider(name);
        }
        Self::from_builder(builder)
    }

    pub fn from_builder(builder: ClientBuilder) -> Result<Self> {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| Error::runtime(format!("failed to build event loop: {e}")))?;
        Ok(Self {
            inner: builder.build()?,
            rt,
        })
    }

    pub fn start(&mut self) -> Result<()> {
        self.rt.block_on(self.inner.start())
    }

    pub fn stop(&mut self) -> Result<()> {
        self.rt.block_on(self.inner.stop())
    }

    pub fn run_command(&self, command: &str) -> Result<String> {
        self.rt.block_on(self.inner.run_command(command))
    }

    pub fn read_file(&self, filepath: &str) -> Result<String> {
        self.rt.block_on(self.inner.read_file(filepath))
    }

    pub fn write_file(&self, filepath: &str, content: &str) -> Result<bool> {
        self.rt.block_on(self.inner.write_file(filepath, content))
    }

    pub fn browse_url(&self, url: &str) -> Result<PageSnapshot> {
        self.rt.block_on(self.inner.browse_url(url))
    }

    pub fn ask(&self, task: &str, max_iterations: u32) -> Result<FinalState> {
        self.rt.block_on(self.inner.ask(task, max_iterations))
    }

    pub fn code_task(
        &self,
        task: &str,
        language: &str,
        filename: Option<&str>,
    ) -> Result<String> {
        self.rt
            .block_on(self.inner.code_task(task, language, filename))
    }
}

impl Drop for SyncClient {
    /// Best-effort release of the runtime handle (a no-op if never started).
    fn drop(&mut self) {
        let _ = self.rt.block_on(self.inner.stop());
    }
}

/// Create a synchronous client.
///
/// ```rust,no_run
/// let mut client = openhands_client::create_client(Some("deepseek_local"))?;
/// client.start()?;
/// let result = client.run_command("ls -la")?;
/// println!("{result}");
/// client.stop()?;
/// # Ok::<(), openhands_client::Error>(())
/// ```
pub fn create_client(provider: Option<&str>) -> Result<SyncClient> {
    SyncClient::new(provider)
}
