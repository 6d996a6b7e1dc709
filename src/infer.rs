//! Best-effort method-name inference from a code snippet or, failing that,
//! the problem slug.

use std::sync::LazyLock;

use regex::Regex;

static SNIPPET_DEF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"def\s+([A-Za-z0-9_]+)\s*\(self,").unwrap());

/// Fallback when nothing can be inferred.
pub const FALLBACK_METHOD: &str = "solve";

/// Method name from a Python signature snippet, when one was provided.
pub fn method_from_snippet(code: &str) -> Option<String> {
    SNIPPET_DEF_RE
        .captures(code)
        .map(|caps| caps[1].to_string())
}

/// Camel-case a hyphenated slug: first segment kept lower-case verbatim,
/// every later segment capitalized. Heuristic only; the emitted stub tells
/// the consumer to correct the parameters.
pub fn method_name(slug: &str) -> String {
    let mut segments = slug.split('-').filter(|s| !s.is_empty());
    let Some(first) = segments.next() else {
        return FALLBACK_METHOD.to_string();
    };
    let mut name = first.to_lowercase();
    for segment in segments {
        let mut chars = segment.chars();
        if let Some(c) = chars.next() {
            name.extend(c.to_uppercase());
            name.push_str(chars.as_str());
        }
    }
    name
}

/// Pull the problem slug out of an arbitrary URL path.
///
/// Prefers the segment right after `problems` (NeetCode-style URLs end in
/// `/question`, which would otherwise win); falls back to the last segment.
pub fn slug_from_url(url: &str) -> String {
    let path = url
        .split(['?', '#'])
        .next()
        .unwrap_or(url)
        .trim_end_matches('/');
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if let Some(idx) = segments.iter().position(|s| *s == "problems") {
        if let Some(slug) = segments.get(idx + 1) {
            return slug.to_string();
        }
    }
    segments.last().copied().unwrap_or_default().to_string()
}

// ── Tests ──
