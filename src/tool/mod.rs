//! Client for the external vimvs tool
//!
//! The tool is a black box invoked once per request; it answers over stdout
//! with single tagged lines (`ROOT:`, `ALT:`, `YCM_CMD:`). This module owns
//! the invocation, the response parsing and the error taxonomy; the feature
//! adapters in [`client`] are what the rest of the crate calls.

pub mod client;
pub mod error;
pub mod invoker;
pub mod response;

pub use client::{ToolConfig, VimvsTool};
pub use error::ToolError;
