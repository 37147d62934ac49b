//! # openhands-client
//!
//! Rust client SDK for the OpenHands agent runtime, plus a direct chat client
//! for local DeepSeek models served by Ollama.
//!
//! ## Overview
//!
//! This library is an integration shim, not an engine: it marshals arguments
//! into runtime action objects, submits them to an OpenHands server over HTTP,
//! and adapts the returned observation objects back into plain Rust values.
//! The agent iteration loop (sandboxing, action/observation dispatch, retry and
//! termination control) is owned entirely by the external runtime.
//!
//! ## Key Features
//!
//! - **Client facade**: [`OpenHandsClient`] exposes `run_command`, `read_file`,
//!   `write_file`, `browse_url`, `ask` and `code_task` over one runtime handle
//! - **Provider profiles**: named model/key/endpoint bundles resolved from a
//!   built-in table plus environment variables (see [`config`])
//! - **Sync wrapper**: [`SyncClient`] drives every call to completion on a
//!   dedicated event loop for callers that do not want to manage async
//! - **Direct chat**: [`OllamaClient`] streams chat completions from a local
//!   Ollama server (used by the `deepseek-cli` binary)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use openhands_client::OpenHandsClient;
//!
//! #[tokio::main]
//! async fn main() -> openhands_client::Result<()> {
//!     let mut client = OpenHandsClient::new(Some("deepseek_local")).await?;
//!     client.start().await?;
//!
//!     let output = client.run_command("ls -la").await?;
//!     println!("{output}");
//!
//!     client.stop().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Provider profile resolution and environment configuration |
//! | [`client`] | Async client facade and synchronous wrapper |
//! | [`runtime`] | Runtime trait and the HTTP implementation |
//! | [`types`] | Action/observation tagged unions and agent state |
//! | [`ollama`] | Direct chat client for the Ollama HTTP API |
//! | [`utils`] | Fenced code block extraction |

pub mod client;
pub mod config;
pub mod ollama;
pub mod runtime;
pub mod types;
pub mod utils;

// Re-export main types for convenience
pub use client::{create_client, ClientBuilder, OpenHandsClient, PageSnapshot, SyncClient};
pub use config::ProviderProfile;
pub use ollama::{ChatMessage, ModelInfo, OllamaClient};
pub use runtime::{HttpRuntime, Runtime};
pub use types::{Action, AgentState, Event, FinalState, Observation};

use futures::Stream;
use std::pin::Pin;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// A unified pinned, boxed stream that emits `Result<T>`
pub type BoxStream<'a, T> = Pin<Box<dyn Stream<Item = Result<T>> + Send + 'a>>;

/// Error type for the library
pub mod error;
pub use error::Error;
