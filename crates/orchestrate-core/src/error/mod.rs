//! Error types for orchestrate
//!
//! Every fallible operation in the core returns [`OrchestrateResult`]. All
//! errors implement [`UnifiedError`], which exposes:
//! - error_code: A stable identifier for programmatic handling
//! - message: Human-readable error message
//! - context: Optional detail about where the error occurred

mod constructors;
mod conversions;
mod types;
mod unified_error;

pub use types::{OrchestrateError, OrchestrateResult, UnifiedError};
