use async_trait::async_trait;
use serde_json::{json, Value};
use std::env;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::ProviderProfile;
use crate::runtime::Runtime;
use crate::types::{Action, FinalState, Observation};
use crate::{Error, Result};

/// HTTP implementation of [`Runtime`] against an OpenHands server.
///
/// `connect` opens one session carrying the LLM profile and workspace root;
/// every action and task POST is scoped to that session until `close`.
#[derive(Debug)]
pub struct HttpRuntime {
    client: reqwest::Client,
    base_url: String,
    session_id: String,
    /// Per-request deadline for task delegation; agent loops outlive the
    /// default transport timeout by a wide margin.
    task_timeout: Duration,
}

impl HttpRuntime {
    /// Open a session on the server and return a ready handle.
    pub async fn connect(
        base_url: &str,
        profile: &ProviderProfile,
        workspace: &Path,
    ) -> Result<Self> {
        let client = build_http_client()?;
        let base = url::Url::parse(base_url).map_err(|e| {
            Error::configuration(format!("invalid OpenHands server URL '{base_url}': {e}"))
        })?;
        let base_url = base.as_str().trim_end_matches('/').to_string();

        let body = json!({
            "llm": {
                "model": profile.model,
                "api_key": profile.api_key,
                "base_url": profile.base_url,
            },
            "workspace": workspace.to_string_lossy(),
        });

        let resp = client
            .post(format!("{base_url}/api/sessions"))
            .json(&body)
            .header("x-openhands-request-id", Uuid::new_v4().to_string())
            .send()
            .await?;
        let value = check_response(resp).await?;

        let session_id = value
            .get("session_id")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::runtime("server did not return a session_id"))?
            .to_string();

        info!(session_id = session_id.as_str(), "runtime session opened");

        let task_timeout = Duration::from_secs(
            env::var("OPENHANDS_TASK_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(600),
        );

        Ok(Self {
            client,
            base_url,
            session_id,
            task_timeout,
        })
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    async fn post(&self, path: &str, body: &Value, timeout: Option<Duration>) -> Result<Value> {
        let url = format!("{}/api/sessions/{}/{path}", self.base_url, self.session_id);
        let mut req = self
            .client
            .post(&url)
            .json(body)
            .header("x-openhands-request-id", Uuid::new_v4().to_string());
        if let Some(t) = timeout {
            req = req.timeout(t);
        }
        check_response(req.send().await?).await
    }
}

#[async_trait]
impl Runtime for HttpRuntime {
    async fn run_action(&self, action: &Action) -> Result<Observation> {
        debug!(kind = action.kind(), "submitting action");
        let value = self.post("actions", &action.to_wire(), None).await?;
        Ok(Observation::from_wire(value))
    }

    async fn run_controller(&self, task: &str, max_iterations: u32) -> Result<FinalState> {
        let body = json!({ "task": task, "max_iterations": max_iterations });
        let value = self.post("tasks", &body, Some(self.task_timeout)).await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn close(&self) -> Result<()> {
        let url = format!("{}/api/sessions/{}", self.base_url, self.session_id);
        let resp = self.client.delete(&url).send().await?;
        // A session the server already dropped is fine to "close" again.
        if !resp.status().is_success() && resp.status().as_u16() != 404 {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::remote(status, body));
        }
        info!(session_id = self.session_id.as_str(), "runtime session closed");
        Ok(())
    }
}

/// Pooled client with env-overridable knobs:
/// `OPENHANDS_HTTP_TIMEOUT_SECS` (default 30) and `OPENHANDS_PROXY_URL`.
fn build_http_client() -> Result<reqwest::Client> {
    let timeout_secs = env::var("OPENHANDS_HTTP_TIMEOUT_SECS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(30);

    let mut builder = reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .pool_max_idle_per_host(8)
        .pool_idle_timeout(Some(Duration::from_secs(90)));

    if let Ok(proxy_url) = env::var("OPENHANDS_PROXY_URL") {
        if let Ok(proxy) = reqwest::Proxy::all(&proxy_url) {
            builder = builder.proxy(proxy);
        }
    }

    Ok(builder.build()?)
}

/// Map non-2xx responses to `Error::Remote` with the body as message.
async fn check_response(resp: reqwest::Response) -> Result<Value> {
    if !resp.status().is_success() {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        return Err(Error::remote(status, body));
    }
    Ok(resp.json().await?)
}
