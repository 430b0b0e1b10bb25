//! HTTP client for the Jina Reader and Search APIs
//!
//! Two endpoints are bridged:
//! - `r.jina.ai/{url}` converts a webpage into an LLM-friendly format.
//!   Options travel as `x-*` request headers; no API key required.
//! - `s.jina.ai/{query}` performs a web search and requires a bearer key.
//!
//! Both return a JSON envelope `{"data": ...}` when asked for
//! `Accept: application/json`.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use serde::Deserialize;

use crate::error::{JinaError, Result};
use crate::types::{ClientConfig, Document, ReadOptions, SearchHit, SearchOptions};

/// Default reader endpoint
pub const READER_BASE_URL: &str = "https://r.jina.ai";

/// Default search endpoint
pub const SEARCH_BASE_URL: &str = "https://s.jina.ai";

#[derive(Debug, Deserialize)]
struct ReaderEnvelope {
    #[serde(default)]
    data: Document,
}

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    #[serde(default)]
    data: Vec<SearchHit>,
}

/// Client for the Jina content-retrieval APIs
pub struct JinaClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl JinaClient {
    /// Create a new client with a request timeout from the config
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { http, config })
    }

    /// Whether a search API key is configured
    pub fn has_api_key(&self) -> bool {
        self.config.api_key.is_some()
    }

    /// Fetch a webpage through the reader endpoint
    pub async fn read(&self, url: &str, options: &ReadOptions) -> Result<Document> {
        if url.trim().is_empty() {
            return Err(JinaError::InvalidInput("Missing URL parameter".to_string()));
        }

        let request_url = reader_url(&self.config.reader_base_url, url);
        let headers = reader_headers(options)?;
        tracing::debug!(url = %request_url, format = options.format.as_str(), "reader request");

        let response = self
            .http
            .get(&request_url)
            .headers(headers)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;
        let response = Self::check_status(response).await?;

        let envelope: ReaderEnvelope = response.json().await?;
        Ok(envelope.data)
    }

    /// Run a web search through the search endpoint
    pub async fn search(&self, options: &SearchOptions) -> Result<Vec<SearchHit>> {
        if options.query.trim().is_empty() {
            return Err(JinaError::InvalidInput(
                "Missing query parameter".to_string(),
            ));
        }
        let api_key = self.config.api_key.as_deref().ok_or_else(|| {
            JinaError::Config("JINA_API_KEY not found in environment variables".to_string())
        })?;

        let request_url = search_url(
            &self.config.search_base_url,
            &options.query,
            options.site.as_deref(),
        );

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            header_value(&format!("Bearer {}", api_key), "api key")?,
        );
        if !options.retain_images {
            headers.insert("X-Retain-Images", HeaderValue::from_static("none"));
        }

        tracing::debug!(url = %request_url, site = ?options.site, "search request");

        let response = self
            .http
            .get(&request_url)
            .headers(headers)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;
        let response = Self::check_status(response).await?;

        let envelope: SearchEnvelope = response.json().await?;
        Ok(envelope.data)
    }

    fn map_send_error(&self, err: reqwest::Error) -> JinaError {
        if err.is_timeout() {
            JinaError::Timeout(self.config.timeout_secs)
        } else {
            JinaError::Http(err)
        }
    }

    /// Translate non-2xx statuses into adapter errors
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        match status.as_u16() {
            401 => Err(JinaError::Auth),
            403 => Err(JinaError::Forbidden),
            429 => Err(JinaError::RateLimited),
            code => {
                let message = response.text().await.unwrap_or_default();
                Err(JinaError::Api {
                    status: code,
                    message,
                })
            }
        }
    }
}

/// Build the reader request URL; the target URL is passed through verbatim
pub(crate) fn reader_url(base: &str, target: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), target)
}

/// Build the search request URL with a percent-encoded query
pub(crate) fn search_url(base: &str, query: &str, site: Option<&str>) -> String {
    let mut url = format!(
        "{}/{}",
        base.trim_end_matches('/'),
        urlencoding::encode(query)
    );
    if let Some(site) = site {
        url.push_str("?site=");
        url.push_str(&urlencoding::encode(site));
    }
    url
}

/// Map reader options onto the `x-*` headers understood by r.jina.ai
pub(crate) fn reader_headers(options: &ReadOptions) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(
        "x-respond-with",
        HeaderValue::from_static(options.format.as_str()),
    );
    if options.generate_alt {
        headers.insert("x-with-generated-alt", HeaderValue::from_static("true"));
    }
    if let Some(timeout) = options.timeout {
        headers.insert("x-timeout", header_value(&timeout.to_string(), "timeout")?);
    }
    if let Some(ref selector) = options.selector {
        headers.insert("x-target-selector", header_value(selector, "selector")?);
    }
    if let Some(ref wait_for) = options.wait_for {
        headers.insert("x-wait-for-selector", header_value(wait_for, "wait_for")?);
    }
    if let Some(ref proxy) = options.proxy {
        headers.insert("x-proxy-url", header_value(proxy, "proxy")?);
    }
    Ok(headers)
}

fn header_value(value: &str, field: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|_| JinaError::InvalidInput(format!("Invalid characters in {} value", field)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OutputFormat;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_reader_url_passthrough() {
        assert_eq!(
            reader_url(READER_BASE_URL, "https://example.com/page"),
            "https://r.jina.ai/https://example.com/page"
        );
        // Trailing slash on the base must not double up
        assert_eq!(
            reader_url("https://r.jina.ai/", "https://example.com"),
            "https://r.jina.ai/https://example.com"
        );
    }

    #[test]
    fn test_search_url_encodes_query() {
        assert_eq!(
            search_url(SEARCH_BASE_URL, "rust async runtime", None),
            "https://s.jina.ai/rust%20async%20runtime"
        );
    }

    #[test]
    fn test_search_url_with_site() {
        assert_eq!(
            search_url(SEARCH_BASE_URL, "tokio", Some("docs.rs")),
            "https://s.jina.ai/tokio?site=docs.rs"
        );
    }

    #[test]
    fn test_reader_headers_defaults() {
        let headers = reader_headers(&ReadOptions::default()).unwrap();
        assert_eq!(headers.get(ACCEPT).unwrap(), "application/json");
        assert_eq!(headers.get("x-respond-with").unwrap(), "markdown");
        assert!(headers.get("x-with-generated-alt").is_none());
        assert!(headers.get("x-timeout").is_none());
    }

    #[test]
    fn test_reader_headers_full() {
        let options = ReadOptions {
            format: OutputFormat::Screenshot,
            generate_alt: true,
            timeout: Some(15),
            selector: Some("article".to_string()),
            wait_for: Some("#main".to_string()),
            proxy: Some("http://proxy:8080".to_string()),
        };
        let headers = reader_headers(&options).unwrap();
        assert_eq!(headers.get("x-respond-with").unwrap(), "screenshot");
        assert_eq!(headers.get("x-with-generated-alt").unwrap(), "true");
        assert_eq!(headers.get("x-timeout").unwrap(), "15");
        assert_eq!(headers.get("x-target-selector").unwrap(), "article");
        assert_eq!(headers.get("x-wait-for-selector").unwrap(), "#main");
        assert_eq!(headers.get("x-proxy-url").unwrap(), "http://proxy:8080");
    }

    #[test]
    fn test_reader_headers_reject_control_chars() {
        let options = ReadOptions {
            selector: Some("bad\nselector".to_string()),
            ..Default::default()
        };
        assert!(reader_headers(&options).is_err());
    }

    #[test]
    fn test_search_requires_api_key() {
        let client = JinaClient::new(ClientConfig::default()).unwrap();
        let err = tokio_test::block_on(client.search(&SearchOptions::for_query("rust")))
            .expect_err("search without key must fail");
        assert!(matches!(err, JinaError::Config(_)));
    }

    #[test]
    fn test_search_rejects_empty_query() {
        let config = ClientConfig {
            api_key: Some("key".to_string()),
            ..Default::default()
        };
        let client = JinaClient::new(config).unwrap();
        let err = tokio_test::block_on(client.search(&SearchOptions::for_query("  ")))
            .expect_err("empty query must fail");
        assert!(matches!(err, JinaError::InvalidInput(_)));
    }

    #[test]
    fn test_read_rejects_empty_url() {
        let client = JinaClient::new(ClientConfig::default()).unwrap();
        let err = tokio_test::block_on(client.read("", &ReadOptions::default()))
            .expect_err("empty url must fail");
        assert!(matches!(err, JinaError::InvalidInput(_)));
    }

    #[test]
    fn test_envelopes_tolerate_missing_data() {
        let reader: ReaderEnvelope = serde_json::from_str("{}").unwrap();
        assert_eq!(reader.data.content, "");
        let search: SearchEnvelope = serde_json::from_str("{}").unwrap();
        assert!(search.data.is_empty());
    }
}
