//! Handle to the external agent runtime.
//!
//! The trait is the seam between the client facade and the OpenHands server:
//! production code uses [`HttpRuntime`], tests substitute an in-memory
//! implementation. One handle per client, closed on stop.

pub mod http;

pub use http::HttpRuntime;

use async_trait::async_trait;

use crate::types::{Action, FinalState, Observation};
use crate::Result;

/// Opaque handle to the external runtime. Owned exclusively by one client.
#[async_trait]
pub trait Runtime: Send + Sync {
    /// Submit one action and await its observation. Single-flight: this layer
    /// coordinates no concurrent in-flight actions.
    async fn run_action(&self, action: &Action) -> Result<Observation>;

    /// Delegate an entire multi-step task to the runtime's controller.
    /// Iteration, retry and termination logic are entirely the runtime's.
    async fn run_controller(&self, task: &str, max_iterations: u32) -> Result<FinalState>;

    /// Release the runtime handle.
    async fn close(&self) -> Result<()>;
}
