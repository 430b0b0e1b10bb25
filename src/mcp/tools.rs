//! Tool and prompt catalogs exposed to the LLM host

use serde_json::json;

use super::protocol::{PromptArgument, PromptDefinition, ToolDefinition};

/// All tool definitions: (name, description, input schema)
pub const TOOL_DEFINITIONS: &[(&str, &str, &str)] = &[
    (
        "read-webpage",
        "Convert webpage content to LLM-friendly format",
        r#"{
            "type": "object",
            "properties": {
                "url": {
                    "type": "string",
                    "description": "URL of the webpage to read"
                },
                "format": {
                    "type": "string",
                    "enum": ["markdown", "html", "text", "screenshot"],
                    "default": "markdown",
                    "description": "Output format"
                },
                "generate_alt": {
                    "type": "boolean",
                    "default": false,
                    "description": "Generate alt text for images"
                },
                "timeout": {
                    "type": "integer",
                    "description": "Timeout in seconds"
                },
                "selector": {
                    "type": "string",
                    "description": "CSS selector"
                },
                "wait_for": {
                    "type": "string",
                    "description": "Wait for specific element"
                },
                "proxy": {
                    "type": "string",
                    "description": "Proxy server URL"
                }
            },
            "required": ["url"]
        }"#,
    ),
    (
        "web-search",
        "Search web and return results in LLM-friendly format",
        r#"{
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Search query"
                },
                "site": {
                    "type": "string",
                    "description": "Limit search to specific domain"
                },
                "max_results": {
                    "type": "integer",
                    "description": "Number of results to return",
                    "default": 5,
                    "minimum": 1,
                    "maximum": 10
                },
                "retain_images": {
                    "type": "boolean",
                    "description": "Whether to retain images",
                    "default": true
                }
            },
            "required": ["query"]
        }"#,
    ),
];

/// Get all tool definitions as ToolDefinition structs
pub fn get_tool_definitions() -> Vec<ToolDefinition> {
    TOOL_DEFINITIONS
        .iter()
        .map(|(name, description, schema)| ToolDefinition {
            name: name.to_string(),
            description: description.to_string(),
            input_schema: serde_json::from_str(schema).unwrap_or(json!({})),
        })
        .collect()
}

/// Get all prompt definitions
pub fn get_prompt_definitions() -> Vec<PromptDefinition> {
    vec![
        PromptDefinition {
            name: "fetch".to_string(),
            description: "Get webpage content and convert to markdown format".to_string(),
            arguments: vec![PromptArgument {
                name: "url".to_string(),
                description: "URL of the webpage to fetch".to_string(),
                required: true,
            }],
        },
        PromptDefinition {
            name: "search".to_string(),
            description: "Search web and return LLM-friendly results".to_string(),
            arguments: vec![
                PromptArgument {
                    name: "query".to_string(),
                    description: "Search query".to_string(),
                    required: true,
                },
                PromptArgument {
                    name: "site".to_string(),
                    description: "Limit search to specific domain".to_string(),
                    required: false,
                },
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schemas_are_valid_json_objects() {
        for (name, _, schema) in TOOL_DEFINITIONS {
            let parsed: serde_json::Value =
                serde_json::from_str(schema).unwrap_or_else(|e| panic!("{}: {}", name, e));
            assert!(parsed.is_object(), "{} schema is not an object", name);
            assert_eq!(parsed["type"], json!("object"), "{}", name);
        }
    }

    #[test]
    fn test_required_fields() {
        let tools = get_tool_definitions();
        assert_eq!(tools.len(), 2);

        let read = tools.iter().find(|t| t.name == "read-webpage").unwrap();
        assert_eq!(read.input_schema["required"], json!(["url"]));

        let search = tools.iter().find(|t| t.name == "web-search").unwrap();
        assert_eq!(search.input_schema["required"], json!(["query"]));
        assert_eq!(
            search.input_schema["properties"]["max_results"]["maximum"],
            json!(10)
        );
    }

    #[test]
    fn test_prompt_definitions() {
        let prompts = get_prompt_definitions();
        assert_eq!(prompts.len(), 2);

        let fetch = prompts.iter().find(|p| p.name == "fetch").unwrap();
        assert!(fetch.arguments.iter().any(|a| a.name == "url" && a.required));

        let search = prompts.iter().find(|p| p.name == "search").unwrap();
        let site = search.arguments.iter().find(|a| a.name == "site").unwrap();
        assert!(!site.required);
    }
}
