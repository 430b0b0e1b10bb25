//! Core types shared between the Jina client, the MCP surface and the CLI

use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::JinaError;

/// Default number of search results returned by `web-search`
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Hard cap on search results, matching the s.jina.ai contract
pub const MAX_SEARCH_RESULTS: usize = 10;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Output format for the reader endpoint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Markdown,
    Html,
    Text,
    Screenshot,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Markdown => "markdown",
            OutputFormat::Html => "html",
            OutputFormat::Text => "text",
            OutputFormat::Screenshot => "screenshot",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = JinaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "markdown" => Ok(OutputFormat::Markdown),
            "html" => Ok(OutputFormat::Html),
            "text" => Ok(OutputFormat::Text),
            "screenshot" => Ok(OutputFormat::Screenshot),
            other => Err(JinaError::InvalidInput(format!(
                "Unknown output format: '{}'. Use markdown, html, text or screenshot",
                other
            ))),
        }
    }
}

/// Options for a reader request, deserialized straight from tool arguments.
///
/// Every field maps onto an `x-*` header understood by r.jina.ai.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReadOptions {
    /// Output format (x-respond-with)
    #[serde(default)]
    pub format: OutputFormat,
    /// Generate alt text for images (x-with-generated-alt)
    #[serde(default)]
    pub generate_alt: bool,
    /// Remote rendering timeout in seconds (x-timeout)
    #[serde(default)]
    pub timeout: Option<u64>,
    /// CSS selector to extract (x-target-selector)
    #[serde(default)]
    pub selector: Option<String>,
    /// Wait for a specific element before extraction (x-wait-for-selector)
    #[serde(default)]
    pub wait_for: Option<String>,
    /// Proxy server URL (x-proxy-url)
    #[serde(default)]
    pub proxy: Option<String>,
}

fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

fn default_true() -> bool {
    true
}

/// Options for a search request
#[derive(Debug, Clone, Deserialize)]
pub struct SearchOptions {
    /// Search query
    pub query: String,
    /// Limit search to a specific domain
    #[serde(default)]
    pub site: Option<String>,
    /// Number of results to return (clamped to 1..=10)
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    /// Whether image links are kept in result content
    #[serde(default = "default_true")]
    pub retain_images: bool,
}

impl SearchOptions {
    /// Build options for a bare query with defaults
    pub fn for_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            site: None,
            max_results: DEFAULT_MAX_RESULTS,
            retain_images: true,
        }
    }

    /// The requested result count, forced into 1..=MAX_SEARCH_RESULTS
    pub fn clamped_max_results(&self) -> usize {
        self.max_results.clamp(1, MAX_SEARCH_RESULTS)
    }
}

/// A document returned by the reader endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub content: String,
    /// Usage and other fields the API may attach
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// A single result from the search endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchHit {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub content: String,
}

/// Configuration for the Jina HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Bearer key for s.jina.ai; the reader endpoint works without one
    pub api_key: Option<String>,
    /// Reader endpoint base URL
    pub reader_base_url: String,
    /// Search endpoint base URL
    pub search_base_url: String,
    /// Client-side request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            reader_base_url: crate::client::READER_BASE_URL.to_string(),
            search_base_url: crate::client::SEARCH_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
