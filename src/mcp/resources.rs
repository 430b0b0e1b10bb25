//! The `webpage://` resource scheme
//!
//! `webpage://content/<percent-encoded-url>` resolves to that URL; any other
//! `webpage://` URI falls back to the static documentation page.

use super::protocol::ResourceDefinition;
use crate::error::{JinaError, Result};

/// Static documentation resource target
pub const DOCS_URL: &str = "https://docs.jina.ai";

/// URI scheme served by this adapter
pub const RESOURCE_SCHEME: &str = "webpage";

/// Resolve a resource URI to the webpage URL it denotes
pub fn resource_target(uri: &str) -> Result<String> {
    let rest = uri
        .strip_prefix("webpage://")
        .ok_or_else(|| {
            let scheme = uri.split(':').next().unwrap_or("");
            JinaError::InvalidInput(format!("Unsupported scheme: {}", scheme))
        })?
        .trim_start_matches('/');

    match rest.strip_prefix("content/") {
        Some(encoded) => {
            let decoded = urlencoding::decode(encoded)
                .map_err(|e| JinaError::InvalidInput(format!("Invalid resource URI: {}", e)))?;
            Ok(decoded.into_owned())
        }
        None => Ok(DOCS_URL.to_string()),
    }
}

/// Static resources advertised via resources/list
pub fn list_resources() -> Vec<ResourceDefinition> {
    vec![ResourceDefinition {
        uri: "webpage://docs".to_string(),
        name: "Jina documentation".to_string(),
        description: "Documentation for the Jina Reader and Search APIs".to_string(),
        mime_type: "text/markdown".to_string(),
    }]
}
