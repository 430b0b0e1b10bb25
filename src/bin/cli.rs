//! Jina Reader CLI
//!
//! Command-line access to the same reader and search endpoints the MCP
//! server exposes, for quick checks outside an LLM host.

use clap::{Parser, Subcommand};

use jina_reader::client::{JinaClient, READER_BASE_URL, SEARCH_BASE_URL};
use jina_reader::render;
use jina_reader::types::{
    ClientConfig, OutputFormat, ReadOptions, SearchOptions, DEFAULT_MAX_RESULTS,
    DEFAULT_TIMEOUT_SECS,
};

#[derive(Parser)]
#[command(name = "jina-reader")]
#[command(about = "Jina Reader and Search CLI")]
#[command(version)]
struct Cli {
    /// Jina API key (required for search)
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

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read a webpage and print it in an LLM-friendly format
    Read {
        /// URL of the webpage to read
        url: String,
        /// Output format (markdown, html, text, screenshot)
        #[arg(short, long, default_value = "markdown")]
        format: OutputFormat,
        /// Generate alt text for images
        #[arg(long)]
        generate_alt: bool,
        /// CSS selector to extract
        #[arg(long)]
        selector: Option<String>,
        /// Wait for a specific element before extraction
        #[arg(long)]
        wait_for: Option<String>,
        /// Print the raw document as JSON instead of rendered markdown
        #[arg(long)]
        json: bool,
    },
    /// Search the web
    Search {
        /// Search query
        query: String,
        /// Limit search to a specific domain
        #[arg(short, long)]
        site: Option<String>,
        /// Maximum results (1-10)
        #[arg(short, long, default_value_t = DEFAULT_MAX_RESULTS)]
        max_results: usize,
        /// Print raw hits as JSON instead of rendered markdown
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = ClientConfig {
        api_key: cli.api_key,
        reader_base_url: cli.reader_url,
        search_base_url: cli.search_url,
        timeout_secs: cli.timeout_secs,
    };
    let client = JinaClient::new(config)?;

    match cli.command {
        Commands::Read {
            url,
            format,
            generate_alt,
            selector,
            wait_for,
            json,
        } => {
            let options = ReadOptions {
                format,
                generate_alt,
                selector,
                wait_for,
                ..Default::default()
            };
            let doc = client.read(&url, &options).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&doc)?);
            } else {
                println!("{}", render::document_markdown(&doc));
            }
        }
        Commands::Search {
            query,
            site,
            max_results,
            json,
        } => {
            let mut options = SearchOptions::for_query(query);
            options.site = site;
            options.max_results = max_results;
            let hits = client.search(&options).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&hits)?);
            } else {
                println!(
                    "{}",
                    render::search_results_markdown(&hits, options.clamped_max_results())
                );
            }
        }
    }

    Ok(())
}
