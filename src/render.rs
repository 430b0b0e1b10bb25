//! Shaping API responses into LLM-friendly tool output

use crate::types::{Document, SearchHit};

/// Render a reader document as markdown, prepending the title when present
pub fn document_markdown(doc: &Document) -> String {
    if doc.title.is_empty() {
        doc.content.clone()
    } else {
        format!("# {}\n\n{}", doc.title, doc.content)
    }
}

fn or_na(value: &str) -> &str {
    if value.is_empty() {
        "N/A"
    } else {
        value
    }
}

/// Render search hits as a numbered markdown list, truncated at `max`
pub fn search_results_markdown(hits: &[SearchHit], max: usize) -> String {
    if hits.is_empty() {
        return "No search results found.".to_string();
    }

    let mut out = String::new();
    for (idx, hit) in hits.iter().take(max).enumerate() {
        out.push_str(&format!("### Result {}\n\n", idx + 1));
        out.push_str(&format!("URL: {}\n\n", or_na(&hit.url)));
        out.push_str(&format!("Title: {}\n\n", or_na(&hit.title)));
        out.push_str(&format!("Content:\n{}\n\n", or_na(&hit.content)));
        out.push_str("---\n");
        if idx + 1 < hits.len().min(max) {
            out.push('\n');
        }
    }
    out
}
