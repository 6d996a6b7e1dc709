//! Raw markup → Markdown, two converters with one output contract:
//! no residual tag syntax, at most one consecutive blank line, trimmed.

use std::sync::LazyLock;

use anyhow::Result;
use htmd::HtmlToMarkdown;
use regex::Regex;

/// Structural elements dropped wholesale before page conversion.
pub const SKIP_TAGS: &[&str] = &[
    "nav", "header", "footer", "script", "style", "noscript", "iframe", "svg", "button", "aside",
];

/// Ordered substitution table for the rule-based converter. Evaluated
/// top to bottom; the catch-all tag stripper must stay last.
///
/// Entities are decoded only after this table runs, so a decoded angle
/// pair (`a &lt; b &gt; c` → `a < b > c`) is plain text in the output —
/// feeding that output back through strips the `<…>` span again.
/// Idempotence holds only for text without paired angle brackets.
static RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"(?i)<br\s*/?>", "\n"),
        (r"(?i)</p>", "\n\n"),
        (r"(?i)<li>", "- "),
        (r"(?i)</li>", "\n"),
        (r"(?i)<pre>", "\n```\n"),
        (r"(?i)</pre>", "\n```\n"),
        (r"(?i)</?(?:strong|b)>", "**"),
        (r"(?i)</?(?:em|i)>", "_"),
        (r"(?i)</?code>", "`"),
        (r"(?i)<sup>", "^"),
        (r"(?i)</sup>", ""),
        (r"<[^>]+>", ""),
    ]
    .into_iter()
    .map(|(pattern, replacement)| (Regex::new(pattern).unwrap(), replacement))
    .collect()
});

static BLANK_RUNS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

static ENTITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&[A-Za-z][A-Za-z0-9]*;|&#[0-9]+;|&#x[0-9A-Fa-f]+;").unwrap());

/// Rule-based converter for API markup fragments (descriptions, hints).
///
/// Applies the substitution table in order, decodes HTML entities, collapses
/// blank-line runs and trims. Deterministic; identical input gives identical
/// output.
pub fn html_to_markdown(html: &str) -> String {
    if html.trim().is_empty() {
        return String::new();
    }

    let mut text = html.to_string();
    for (re, replacement) in RULES.iter() {
        text = re.replace_all(&text, *replacement).into_owned();
    }

    collapse_blank_lines(&decode_entities(&text))
}

/// Decode HTML entities reference by reference, after tags are gone.
/// Each well-formed reference is decoded on its own; a stray `&` or an
/// unknown name survives verbatim without blocking the rest.
fn decode_entities(text: &str) -> String {
    ENTITY_RE
        .replace_all(text, |caps: &regex::Captures| {
            let reference = &caps[0];
            match quick_xml::escape::unescape(reference) {
                Ok(decoded) => decoded.into_owned(),
                Err(_) => reference.to_string(),
            }
        })
        .into_owned()
}

/// DOM-aware converter for whole page regions: ATX headings via htmd, with
/// the structural denylist skipped, then the shared blank-line collapse.
pub fn dom_to_markdown(region_html: &str) -> Result<String> {
    let converter = HtmlToMarkdown::builder()
        .skip_tags(SKIP_TAGS.to_vec())
        .build();
    let markdown = converter
        .convert(region_html)
        .map_err(|e| anyhow::anyhow!("markdown conversion failed: {e}"))?;
    Ok(collapse_blank_lines(&markdown))
}

/// Collapse runs of 3+ newlines to a single blank line and trim.
pub fn collapse_blank_lines(text: &str) -> String {
    BLANK_RUNS_RE.replace_all(text, "\n\n").trim().to_string()
}

// ── Tests ──
