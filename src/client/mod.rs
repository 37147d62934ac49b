//! Client facade over the external runtime.
//!
//! [`OpenHandsClient`] is the async facade; [`SyncClient`] adapts it for
//! callers that do not want to manage an event loop.

pub mod builder;
pub mod core;
pub mod sync;

pub use builder::ClientBuilder;
pub use core::{OpenHandsClient, PageSnapshot};
pub use sync::{create_client, SyncClient};
