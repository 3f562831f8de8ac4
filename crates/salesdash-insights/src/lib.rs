//! Sales insight generation for the salesdash dashboard.
//!
//! Renders weekly sales data into an analysis prompt, sends it to either a
//! hosted chat-completions API or a local model server, and returns a uniform
//! [`InsightResult`] that never carries a panic or an unhandled error back to
//! the caller.

pub mod agent;
pub mod backend;
pub mod error;
pub mod prompt;
pub mod result;

pub use agent::InsightsAgent;
pub use backend::{Backend, CompletionBackend, HostedBackend, LocalBackend};
pub use error::{FailureKind, InsightError};
pub use prompt::{build_prompt, system_directive};
pub use result::InsightResult;
