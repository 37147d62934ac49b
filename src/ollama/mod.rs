//! Direct chat client for the Ollama HTTP API.
//!
//! Used by the `deepseek-cli` binary to talk to a locally served DeepSeek
//! model without going through the agent runtime. Streaming responses are
//! newline-delimited JSON chunks decoded incrementally.

pub mod ndjson;

use bytes::Bytes;
use futures::TryStreamExt;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;
use url::Url;

use ndjson::NdjsonDecoder;

use crate::{BoxStream, Error, Result};

/// Default local Ollama endpoint.
pub const OLLAMA_BASE_URL: &str = "http://localhost:11434";

/// One turn of a chat conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".into(),
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".into(),
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".into(),
            content: content.into(),
        }
    }
}

/// A model known to the Ollama server.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelInfo {
    pub name: String,
    /// On-disk size in bytes.
    #[serde(default)]
    pub size: u64,
}

#[derive(Deserialize)]
struct TagsResponse {
    #[serde(default)]
    models: Vec<ModelInfo>,
}

/// One NDJSON chunk of a chat response.
#[derive(Deserialize)]
struct ChatChunk {
    #[serde(default)]
    message: Option<ChatMessage>,
    #[serde(default)]
    done: bool,
}

/// Chat client over the Ollama HTTP API.
pub struct OllamaClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

impl OllamaClient {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        let base = Url::parse(&base_url)
            .map_err(|e| Error::configuration(format!("invalid Ollama URL '{base_url}': {e}")))?;
        // Generation can take minutes on large local models; cap connect time
        // instead of the whole request.
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .build()?;
        Ok(Self {
            client,
            base_url: base.as_str().trim_end_matches('/').to_string(),
            model: model.into(),
        })
    }

    /// Client for a locally served model.
    pub fn local(model: impl Into<String>) -> Result<Self> {
        Self::new(OLLAMA_BASE_URL, model)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send a conversation and wait for the complete response text.
    pub async fn chat(&self, messages: &[ChatMessage]) -> Result<String> {
        let body = json!({
            "model": self.model,
            "messages": messages,
            "stream": false,
        });
        let resp = self
            .client
            .post(format!("{}/api/chat", self.base_url))
            .json(&body)
            .send()
            .await
            .map_err(|e| self.connect_hint(e))?;
        let chunk: ChatChunk = Self::check(resp).await?.json().await?;
        Ok(chunk.message.map(|m| m.content).unwrap_or_default())
    }

    /// Send a conversation and stream response content deltas.
    pub async fn chat_stream(&self, messages: &[ChatMessage]) -> Result<BoxStream<'static, String>> {
        let body = json!({
            "model": self.model,
            "messages": messages,
            "stream": true,
        });
        let resp = self
            .client
            .post(format!("{}/api/chat", self.base_url))
            .json(&body)
            .send()
            .await
            .map_err(|e| self.connect_hint(e))?;
        let resp = Self::check(resp).await?;

        let bytes = Box::pin(resp.bytes_stream());
        let state = (bytes, NdjsonDecoder::new(), false);

        let stream = futures::stream::try_unfold(state, |(mut bytes, mut dec, mut eof)| async move {
            loop {
                if let Some(line) = dec.next_line().or_else(|| {
                    if eof {
                        dec.finish()
                    } else {
                        None
                    }
                }) {
                    if line.trim().is_empty() {
                        continue;
                    }
                    let chunk: ChatChunk = serde_json::from_str(&line)?;
                    // The terminal chunk carries no new content.
                    if chunk.done {
                        continue;
                    }
                    if let Some(message) = chunk.message {
                        return Ok(Some((message.content, (bytes, dec, eof))));
                    }
                    continue;
                }

                if eof {
                    return Ok(None);
                }
                let chunk: Option<Bytes> = bytes.try_next().await.map_err(Error::Http)?;
                match chunk {
                    Some(b) => dec.push(&b),
                    None => eof = true,
                }
            }
        });

        Ok(Box::pin(stream))
    }

    /// List models available on the server.
    pub async fn list_models(&self) -> Result<Vec<ModelInfo>> {
        let resp = self
            .client
            .get(format!("{}/api/tags", self.base_url))
            .send()
            .await
            .map_err(|e| self.connect_hint(e))?;
        let tags: TagsResponse = Self::check(resp).await?.json().await?;
        Ok(tags.models)
    }

    async fn check(resp: reqwest::Response) -> Result<reqwest::Response> {
        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::remote(status, body));
        }
        Ok(resp)
    }

    /// Turn a connection refusal into an actionable message.
    fn connect_hint(&self, e: reqwest::Error) -> Error {
        if e.is_connect() {
            Error::runtime(format!(
                "cannot reach Ollama at {}; is `ollama serve` running?",
                self.base_url
            ))
        } else {
            Error::Http(e)
        }
    }
}
