//! jina-reader - MCP adapter for the Jina Reader and Search APIs
//!
//! Exposes webpage reading and web search as Model Context Protocol tools,
//! prompts and resources over stdio.

pub mod client;
pub mod error;
pub mod mcp;
pub mod render;
pub mod types;

pub use client::JinaClient;
pub use error::{JinaError, Result};
pub use types::*;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
