//! Generic strategy: raw page fetch plus heuristic DOM pruning, for sources
//! without a structured API.

use std::sync::LazyLock;

use anyhow::{Context, Result};
use scraper::{Html, Selector};
use tracing::{info, warn};

use super::PageContent;
use crate::normalize;

const RETRY_HINT: &str = "; retry with a browser-rendering fetch (webfetch/playwright)";

/// Content-region candidates, most specific first.
static REGION_SELECTORS: LazyLock<[Selector; 3]> = LazyLock::new(|| {
    ["main", "article", "body"].map(|name| Selector::parse(name).unwrap())
});

/// Fetch one URL and reduce it to Markdown. Content shorter than
/// `min_content_len` characters is flagged degraded, not treated as an
/// error; the caller decides what to do with the warning.
pub async fn fetch_page(url: &str, min_content_len: usize) -> Result<PageContent> {
    info!("Fetching page: {url} ...");

    let client = super::http_client()?;
    let body = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Request to {url} failed{RETRY_HINT}"))?
        .error_for_status()
        .with_context(|| format!("{url} returned an error status{RETRY_HINT}"))?
        .text()
        .await
        .with_context(|| format!("Could not read response body from {url}{RETRY_HINT}"))?;

    let markdown = extract_content(&body)
        .with_context(|| format!("Could not extract content from {url}{RETRY_HINT}"))?;

    let degraded = markdown.chars().count() < min_content_len;
    if degraded {
        warn!(
            "Extracted only {} characters from {url}; page likely needs dynamic rendering",
            markdown.chars().count()
        );
    }

    Ok(PageContent::Page {
        url: url.to_string(),
        markdown,
        degraded,
    })
}

/// Select the most specific content region and convert it to Markdown.
/// Region priority: `main`, then `article`, then `body`, then the whole
/// document. Structural noise is dropped during conversion.
pub fn extract_content(html: &str) -> Result<String> {
    let doc = Html::parse_document(html);
    let region = select_region(&doc);
    normalize::dom_to_markdown(&region)
}

fn select_region(doc: &Html) -> String {
    for selector in REGION_SELECTORS.iter() {
        if let Some(element) = doc.select(selector).next() {
            return element.html();
        }
    }
    doc.root_element().html()
}

// ── Tests ──
