//! MCP (Model Context Protocol) server implementation
//!
//! JSON-RPC over stdio for AI tool integration.

pub mod protocol;
pub mod resources;
pub mod tools;

pub use protocol::{
    methods, GetPromptResult, InitializeResult, McpHandler, McpRequest, McpResponse, McpServer,
    ResourceContents, ToolCallResult,
};
pub use resources::{list_resources, resource_target, DOCS_URL};
pub use tools::{get_prompt_definitions, get_tool_definitions, TOOL_DEFINITIONS};
