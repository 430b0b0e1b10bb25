//! Jina Reader MCP server
//!
//! Run with: jina-reader-server

use std::sync::Arc;

use clap::Parser;
use serde_json::{json, Value};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use jina_reader::client::{JinaClient, READER_BASE_URL, SEARCH_BASE_URL};
use jina_reader::error::JinaError;
use jina_reader::mcp::{
    get_prompt_definitions, get_tool_definitions, list_resources, methods, resource_target,
    GetPromptResult, InitializeResult, McpHandler, McpRequest, McpResponse, McpServer,
    ResourceContents, ToolCallResult,
};
use jina_reader::render;
use jina_reader::types::{ClientConfig, ReadOptions, SearchOptions, DEFAULT_TIMEOUT_SECS};

#[derive(Parser, Debug)]
#[command(name = "jina-reader-server")]
#[command(about = "MCP server exposing the Jina Reader and Search APIs")]
#[command(version)]
struct Args {
    /// Jina API key (required for web-search, optional for read-webpage)
    #[arg(long, env = "JINA_API_KEY")]
    api_key: Option<String>,

    /// Reader endpoint base URL
    #[arg(long, env = "JINA_READER_URL", default_value = READER_BASE_URL)]
    reader_url: String,

    /// Search endpoint base URL
    #[arg(long, env = "JINA_SEARCH_URL", default_value = SEARCH_BASE_URL)]
    search_url: String,

    /// HTTP request timeout in seconds
    #[arg(long, env = "JINA_HTTP_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,
}

/// MCP request handler bridging protocol calls into the async Jina client
struct ReaderHandler {
    client: Arc<JinaClient>,
    /// Handle of the runtime the async client calls run on
    runtime: tokio::runtime::Handle,
}

impl ReaderHandler {
    fn new(client: Arc<JinaClient>, runtime: tokio::runtime::Handle) -> Self {
        Self { client, runtime }
    }

    fn handle_tool_call(
        &self,
        name: &str,
        params: Value,
    ) -> Result<ToolCallResult, JinaError> {
        match name {
            "read-webpage" => self.tool_read_webpage(params),
            "web-search" => self.tool_web_search(params),
            _ => Ok(ToolCallResult::error(format!("Unknown tool: {}", name))),
        }
    }

    fn tool_read_webpage(&self, params: Value) -> Result<ToolCallResult, JinaError> {
        let url = params
            .get("url")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .ok_or_else(|| JinaError::InvalidInput("Missing URL parameter".to_string()))?;

        let options: ReadOptions = serde_json::from_value(params)
            .map_err(|e| JinaError::InvalidInput(e.to_string()))?;

        match self.runtime.block_on(self.client.read(&url, &options)) {
            Ok(doc) => Ok(ToolCallResult::text(render::document_markdown(&doc))),
            Err(e) => {
                tracing::error!(url = %url, error = %e, "read-webpage failed");
                Ok(ToolCallResult::error(format!(
                    "Error processing webpage: {}",
                    e
                )))
            }
        }
    }

    fn tool_web_search(&self, params: Value) -> Result<ToolCallResult, JinaError> {
        let has_query = params
            .get("query")
            .and_then(|v| v.as_str())
            .is_some_and(|q| !q.trim().is_empty());
        if !has_query {
            return Err(JinaError::InvalidInput(
                "Missing query parameter".to_string(),
            ));
        }

        let options: SearchOptions = serde_json::from_value(params)
            .map_err(|e| JinaError::InvalidInput(e.to_string()))?;

        match self.runtime.block_on(self.client.search(&options)) {
            Ok(hits) => {
                tracing::info!(query = %options.query, found = hits.len(), "search completed");
                Ok(ToolCallResult::text(render::search_results_markdown(
                    &hits,
                    options.clamped_max_results(),
                )))
            }
            Err(e) => {
                tracing::error!(query = %options.query, error = %e, "web-search failed");
                Ok(ToolCallResult::error(format!("Error searching web: {}", e)))
            }
        }
    }

    fn handle_get_prompt(&self, params: &Value) -> Result<GetPromptResult, JinaError> {
        let name = params.get("name").and_then(|v| v.as_str()).unwrap_or("");
        let arguments = params
            .get("arguments")
            .filter(|v| !v.is_null())
            .ok_or_else(|| JinaError::InvalidInput("Missing arguments".to_string()))?;

        match name {
            "fetch" => {
                let url = arguments
                    .get("url")
                    .and_then(|v| v.as_str())
                    .ok_or_else(|| {
                        JinaError::InvalidInput("Missing URL parameter".to_string())
                    })?;

                match self
                    .runtime
                    .block_on(self.client.read(url, &ReadOptions::default()))
                {
                    Ok(doc) => Ok(GetPromptResult::user_text(
                        format!("Contents of {}", url),
                        render::document_markdown(&doc),
                    )),
                    Err(e) => Ok(GetPromptResult::user_text(
                        format!("Failed to fetch {}", url),
                        format!("Error: {}", e),
                    )),
                }
            }
            "search" => {
                let query = arguments
                    .get("query")
                    .and_then(|v| v.as_str())
                    .ok_or_else(|| {
                        JinaError::InvalidInput("Missing query parameter".to_string())
                    })?
                    .to_string();
                let mut options = SearchOptions::for_query(&query);
                options.site = arguments
                    .get("site")
                    .and_then(|v| v.as_str())
                    .map(str::to_string);

                match self.runtime.block_on(self.client.search(&options)) {
                    Ok(hits) => Ok(GetPromptResult::user_text(
                        format!("Search results for: {}", query),
                        render::search_results_markdown(&hits, options.clamped_max_results()),
                    )),
                    Err(e) => Ok(GetPromptResult::user_text(
                        format!("Error searching for: {}", query),
                        format!("Error: {}", e),
                    )),
                }
            }
            other => Err(JinaError::InvalidInput(format!(
                "Unknown prompt: {}",
                other
            ))),
        }
    }

    fn handle_read_resource(&self, params: &Value) -> Result<Value, JinaError> {
        let uri = params
            .get("uri")
            .and_then(|v| v.as_str())
            .ok_or_else(|| JinaError::InvalidInput("Missing uri parameter".to_string()))?;

        let target = resource_target(uri)?;
        let doc = self
            .runtime
            .block_on(self.client.read(&target, &ReadOptions::default()))?;

        let contents = ResourceContents {
            uri: uri.to_string(),
            mime_type: "text/markdown".to_string(),
            text: doc.content,
        };
        Ok(json!({ "contents": [contents] }))
    }
}

impl McpHandler for ReaderHandler {
    fn handle_request(&self, request: McpRequest) -> McpResponse {
        match request.method.as_str() {
            methods::INITIALIZE => {
                let result = InitializeResult::default();
                McpResponse::success(request.id, json!(result))
            }
            methods::INITIALIZED => {
                // Notification, no response frame is written for it
                McpResponse::success(request.id, json!({}))
            }
            methods::PING => McpResponse::success(request.id, json!({})),
            methods::LIST_TOOLS => {
                let tools = get_tool_definitions();
                McpResponse::success(request.id, json!({"tools": tools}))
            }
            methods::CALL_TOOL => {
                let name = request
                    .params
                    .get("name")
                    .and_then(|v| v.as_str())
                    .unwrap_or("")
                    .to_string();
                let arguments = match request.params.get("arguments").filter(|v| !v.is_null())
                {
                    Some(args) => args.clone(),
                    None => {
                        return McpResponse::from_error(
                            request.id,
                            JinaError::InvalidInput("Missing arguments".to_string()),
                        )
                    }
                };

                match self.handle_tool_call(&name, arguments) {
                    Ok(result) => McpResponse::success(request.id, json!(result)),
                    Err(e) => McpResponse::from_error(request.id, e),
                }
            }
            methods::LIST_PROMPTS => {
                let prompts = get_prompt_definitions();
                McpResponse::success(request.id, json!({"prompts": prompts}))
            }
            methods::GET_PROMPT => match self.handle_get_prompt(&request.params) {
                Ok(result) => McpResponse::success(request.id, json!(result)),
                Err(e) => McpResponse::from_error(request.id, e),
            },
            methods::LIST_RESOURCES => {
                let resources = list_resources();
                McpResponse::success(request.id, json!({"resources": resources}))
            }
            methods::READ_RESOURCE => match self.handle_read_resource(&request.params) {
                Ok(result) => McpResponse::success(request.id, result),
                Err(e) => McpResponse::from_error(request.id, e),
            },
            _ => McpResponse::error(
                request.id,
                -32601,
                format!("Method not found: {}", request.method),
            ),
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Logging goes to stderr; stdout is reserved for MCP frames
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let config = ClientConfig {
        api_key: args.api_key,
        reader_base_url: args.reader_url,
        search_base_url: args.search_url,
        timeout_secs: args.timeout_secs,
    };

    let runtime = tokio::runtime::Runtime::new()?;
    let client = Arc::new(JinaClient::new(config)?);

    if !client.has_api_key() {
        tracing::warn!("JINA_API_KEY not set; the web-search tool will return errors");
    }

    let handler = ReaderHandler::new(client, runtime.handle().clone());
    let server = McpServer::new(handler);

    tracing::info!("jina-reader MCP server starting...");
    server.run()?;

    Ok(())
}
