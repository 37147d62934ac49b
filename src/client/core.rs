use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::client::builder::ClientBuilder;
use crate::config::ProviderProfile;
use crate::runtime::{HttpRuntime, Runtime};
use crate::types::{Action, FinalState, Observation};
use crate::utils::code_block;
use crate::{Error, Result};

/// Page data returned by [`OpenHandsClient::browse_url`].
///
/// When the runtime answers with anything other than a browser observation,
/// only `content` is populated (the string form of what came back).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSnapshot {
    pub url: Option<String>,
    pub content: String,
    /// Base64-encoded screenshot, when the runtime captured one.
    pub screenshot: Option<String>,
}

/// Async client facade for the OpenHands runtime.
///
/// Owns a workspace directory (created on build), a resolved provider profile,
/// and an opaque runtime handle acquired on `start` and released on `stop`.
/// All domain errors surface as [`Error`]; this layer adds no retry, backoff,
/// or partial-failure recovery.
pub struct OpenHandsClient {
    profile: ProviderProfile,
    workspace_dir: PathBuf,
    server_url: String,
    runtime: Option<Box<dyn Runtime>>,
    /// Injected handle installed on `start` instead of connecting over HTTP.
    pending_runtime: Option<Box<dyn Runtime>>,
}

impl OpenHandsClient {
    /// Create a client for the given provider (default from `LLM_PROVIDER`).
    pub async fn new(provider: Option<&str>) -> Result<Self> {
        let mut builder = ClientBuilder::new();
        if let Some(name) = provider {
            builder = builder.provider(name);
        }
        builder.build()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub(crate) fn from_parts(
        profile: ProviderProfile,
        workspace_dir: PathBuf,
        server_url: String,
        pending_runtime: Option<Box<dyn Runtime>>,
    ) -> Self {
        info!(
            provider = profile.name.as_str(),
            workspace = %workspace_dir.display(),
            "client initialized"
        );
        Self {
            profile,
            workspace_dir,
            server_url,
            runtime: None,
            pending_runtime,
        }
    }

    pub fn profile(&self) -> &ProviderProfile {
        &self.profile
    }

    pub fn workspace_dir(&self) -> &Path {
        &self.workspace_dir
    }

    /// Acquire the runtime handle. Repeated calls are no-ops.
    pub async fn start(&mut self) -> Result<()> {
        if self.runtime.is_some() {
            return Ok(());
        }
        if let Some(runtime) = self.pending_runtime.take() {
            self.runtime = Some(runtime);
            return Ok(());
        }
        info!(server = self.server_url.as_str(), "starting runtime");
        let runtime =
            HttpRuntime::connect(&self.server_url, &self.profile, &self.workspace_dir).await?;
        self.runtime = Some(Box::new(runtime));
        Ok(())
    }

    /// Release the runtime handle. A no-op if never started.
    pub async fn stop(&mut self) -> Result<()> {
        if let Some(runtime) = self.runtime.take() {
            runtime.close().await?;
            info!("runtime stopped");
        }
        Ok(())
    }

    fn runtime(&self) -> Result<&dyn Runtime> {
        self.runtime
            .as_deref()
            .ok_or_else(|| Error::runtime("client not started; call start() first"))
    }

    /// Execute a shell command and return its output text.
    pub async fn run_command(&self, command: &str) -> Result<String> {
        debug!(command, "running command");
        let action = Action::CmdRun {
            command: command.to_string(),
        };
        let observation = self.runtime()?.run_action(&action).await?;

        match observation {
            Observation::CmdOutput { content, .. } => Ok(content),
            other => Ok(other.to_string()),
        }
    }

    /// Read a file relative to the workspace root.
    pub async fn read_file(&self, filepath: &str) -> Result<String> {
        let full_path = self.workspace_dir.join(filepath);
        debug!(path = %full_path.display(), "reading file");

        let action = Action::FileRead {
            path: full_path.to_string_lossy().into_owned(),
        };
        let observation = self.runtime()?.run_action(&action).await?;

        match observation {
            Observation::FileRead { content } => Ok(content),
            other => Ok(other.to_string()),
        }
    }

    /// Write content to a file relative to the workspace root, creating parent
    /// directories first. Returns whether the runtime acknowledged the write.
    pub async fn write_file(&self, filepath: &str, content: &str) -> Result<bool> {
        let full_path = self.workspace_dir.join(filepath);
        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        debug!(path = %full_path.display(), "writing file");

        let action = Action::FileWrite {
            path: full_path.to_string_lossy().into_owned(),
            content: content.to_string(),
        };
        let observation = self.runtime()?.run_action(&action).await?;

        Ok(matches!(observation, Observation::FileWrite { .. }))
    }

    /// Browse a URL and return the page content plus metadata.
    pub async fn browse_url(&self, url: &str) -> Result<PageSnapshot> {
        debug!(url, "browsing");
        let action = Action::BrowseUrl {
            url: url.to_string(),
        };
        let observation = self.runtime()?.run_action(&action).await?;

        match observation {
            Observation::BrowserOutput {
                url,
                content,
                screenshot,
            } => Ok(PageSnapshot {
                url: Some(url),
                content,
                screenshot,
            }),
            other => Ok(PageSnapshot {
                url: None,
                content: other.to_string(),
                screenshot: None,
            }),
        }
    }

    /// Ask the runtime's agent to complete a task, delegating the entire
    /// multi-step loop. This client only supplies the instruction and an
    /// iteration ceiling, then waits for the final state.
    pub async fn ask(&self, task: &str, max_iterations: u32) -> Result<FinalState> {
        info!(task, max_iterations, "delegating task to agent");
        let state = self.runtime()?.run_controller(task, max_iterations).await?;
        info!(state = ?state.agent_state, "task completed");
        Ok(state)
    }

    /// Ask the agent to write code for a task and extract the generated code
    /// from the final state's history. Optionally saves it to `filename`
    /// (relative to the workspace).
    ///
    /// Extraction is a best-effort heuristic over fenced code blocks, not a
    /// parser; see [`code_block::extract_code_from_state`].
    pub async fn code_task(
        &self,
        task: &str,
        language: &str,
        filename: Option<&str>,
    ) -> Result<String> {
        let prompt = format!(
            "Write {language} code to: {task}\n\
             \n\
             Requirements:\n\
             - Write clean, well-documented code\n\
             - Include error handling\n\
             - Make it production-ready\n\
             - Only output the code, no explanations\n"
        );

        let state = self.ask(&prompt, 5).await?;
        let code = code_block::extract_code_from_state(&state);

        if let Some(filename) = filename {
            self.write_file(filename, &code).await?;
        }

        Ok(code)
    }
}
