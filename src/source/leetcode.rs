//! Structured strategy: one GraphQL query against the LeetCode API.

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use tracing::info;

const GRAPHQL_URL: &str = "https://leetcode.com/graphql";

const QUERY: &str = "
query questionData($titleSlug: String!) {
  question(titleSlug: $titleSlug) {
    questionId
    title
    titleSlug
    difficulty
    content
    topicTags {
      name
    }
    hints
    similarQuestions
    codeSnippets {
      lang
      langSlug
      code
    }
    exampleTestcaseList
  }
}
";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Difficulty {
    /// Colored marker used on the difficulty line of the output document.
    pub fn marker(self) -> &'static str {
        match self {
            Difficulty::Easy => "🟢",
            Difficulty::Medium => "🟡",
            Difficulty::Hard => "🔴",
            Difficulty::Unknown => "⚪",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Unknown => "Unknown",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopicTag {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeSnippet {
    pub lang: String,
    pub lang_slug: String,
    pub code: String,
}

/// One problem as returned by the `questionData` query. Built once per
/// invocation and never mutated afterwards.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question_id: String,
    pub title: String,
    pub title_slug: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub topic_tags: Vec<TopicTag>,
    #[serde(default)]
    pub hints: Vec<String>,
    /// Provider-specific JSON string; parse failures downstream just omit
    /// the related-questions section.
    #[serde(default)]
    pub similar_questions: Option<String>,
    #[serde(default)]
    pub code_snippets: Option<Vec<CodeSnippet>>,
    #[serde(default)]
    pub example_testcase_list: Vec<String>,
}

impl Question {
    pub fn url(&self) -> String {
        format!("https://leetcode.com/problems/{}/", self.title_slug)
    }

    /// The python3 signature snippet, when the provider ships one.
    pub fn python_snippet(&self) -> Option<&str> {
        self.code_snippets
            .as_deref()?
            .iter()
            .find(|s| s.lang_slug == "python3")
            .map(|s| s.code.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarQuestion {
    pub title: String,
    pub title_slug: String,
    pub difficulty: String,
}

/// Parse the opaque related-questions payload. `None` on any malformed
/// input; the caller omits the section rather than failing.
pub fn parse_similar_questions(raw: &str) -> Option<Vec<SimilarQuestion>> {
    serde_json::from_str(raw).ok()
}

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    data: Option<EnvelopeData>,
}

#[derive(Debug, Deserialize)]
struct EnvelopeData {
    #[serde(default)]
    question: Option<Question>,
}

/// Query the fixed field set for one slug. Transport failures, non-2xx
/// statuses and a null `data.question` all propagate as errors; there is
/// no retry.
pub async fn fetch_question(slug: &str) -> Result<Question> {
    info!("Fetching problem data: {slug} ...");

    let payload = serde_json::json!({
        "query": QUERY,
        "variables": { "titleSlug": slug },
        "operationName": "questionData",
    });

    let client = super::http_client()?;
    let response = client
        .post(GRAPHQL_URL)
        .header("Referer", format!("https://leetcode.com/problems/{slug}/"))
        .header("Origin", "https://leetcode.com")
        .header("x-csrftoken", "dummy")
        .json(&payload)
        .send()
        .await
        .with_context(|| format!("GraphQL request for '{slug}' failed"))?
        .error_for_status()
        .context("LeetCode API returned an error status")?;

    let envelope: Envelope = response
        .json()
        .await
        .context("Malformed GraphQL response")?;

    envelope
        .data
        .and_then(|d| d.question)
        .ok_or_else(|| anyhow!("No such problem: {slug}"))
}

// ── Tests ──
