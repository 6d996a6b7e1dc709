//! Assemble retrieved content into the sentinel-delimited output document:
//! quoted Markdown statement, typing preamble, Python stub, agent
//! instructions. Optional sections are each independently omittable;
//! assembly itself never fails.

use crate::infer;
use crate::normalize;
use crate::source::leetcode::{parse_similar_questions, Question};
use crate::source::PageContent;

pub const LEETCODE_START: &str = "=== LEETCODE_FILE_CONTENT_START ===";
pub const LEETCODE_END: &str = "=== LEETCODE_FILE_CONTENT_END ===";
pub const GENERIC_START: &str = "=== GENERIC_FILE_CONTENT_START ===";
pub const GENERIC_END: &str = "=== GENERIC_FILE_CONTENT_END ===";

const PYTHON_PREAMBLE: &str = "from typing import List, Optional, Dict, Tuple";

pub fn build_document(content: &PageContent) -> String {
    match content {
        PageContent::Problem(question) => problem_document(question),
        PageContent::Page {
            url,
            markdown,
            degraded,
        } => page_document(url, markdown, *degraded),
    }
}

/// Statement block for a structured problem: title line, difficulty,
/// tags, description, hints, related questions.
fn format_question(q: &Question) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("# [{}. {}]({})", q.question_id, q.title, q.url()));
    lines.push(format!(
        "**Difficulty:** {} {}",
        q.difficulty.marker(),
        q.difficulty
    ));

    if !q.topic_tags.is_empty() {
        let tags: Vec<&str> = q.topic_tags.iter().map(|t| t.name.as_str()).collect();
        lines.push(format!("**Tags:** {}", tags.join(", ")));
    }

    lines.push(String::new());

    let description = normalize::html_to_markdown(q.content.as_deref().unwrap_or(""));
    if !description.is_empty() {
        lines.push("## Problem Description".into());
        lines.push(String::new());
        lines.push(description);
        lines.push(String::new());
    }

    if !q.hints.is_empty() {
        lines.push("## Hints".into());
        for (i, hint) in q.hints.iter().enumerate() {
            lines.push(format!("{}. {}", i + 1, normalize::html_to_markdown(hint)));
        }
        lines.push(String::new());
    }

    // Opaque provider payload; a parse failure just drops the section.
    if let Some(similar) = q
        .similar_questions
        .as_deref()
        .and_then(parse_similar_questions)
    {
        if !similar.is_empty() {
            lines.push("## Similar Questions".into());
            for sq in &similar {
                lines.push(format!(
                    "- [{}](https://leetcode.com/problems/{}/) ({})",
                    sq.title, sq.title_slug, sq.difficulty
                ));
            }
            lines.push(String::new());
        }
    }

    lines.join("\n")
}

fn problem_document(q: &Question) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push(LEETCODE_START.into());
    lines.push("\"\"\"".into());
    lines.push(format_question(q).trim().to_string());
    lines.push("\"\"\"\n".into());
    lines.push(format!("{PYTHON_PREAMBLE}\n"));

    let method = match q.python_snippet() {
        Some(snippet) => {
            lines.push(format!("{}\n        pass\n", snippet.trim_end()));
            infer::method_from_snippet(snippet)
                .unwrap_or_else(|| infer::method_name(&q.title_slug))
        }
        None => {
            let name = infer::method_name(&q.title_slug);
            lines.push(inferred_stub(&name));
            name
        }
    };

    lines.push(instructions(&method));
    lines.push(LEETCODE_END.into());
    lines.join("\n")
}

fn page_document(url: &str, markdown: &str, degraded: bool) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push(GENERIC_START.into());
    lines.push("\"\"\"".into());
    lines.push(format!("# [Generic Problem]({url})"));
    lines.push(format!("**Source:** {}", host_of(url)));
    lines.push("\n## Problem Description\n".into());
    if degraded {
        lines.push("> ⚠️ **Warning**: this page likely needs JavaScript rendering (SPA).".into());
        lines.push(
            "> Too little content was extracted; retry with `webfetch` or `playwright`.".into(),
        );
        if !markdown.is_empty() {
            lines.push(markdown.into());
        }
    } else {
        lines.push(markdown.into());
    }
    lines.push("\"\"\"\n".into());
    lines.push(format!("{PYTHON_PREAMBLE}\n"));

    let name = infer::method_name(&infer::slug_from_url(url));
    lines.push(inferred_stub(&name));
    lines.push(instructions(&name));
    lines.push(GENERIC_END.into());
    lines.join("\n")
}

fn inferred_stub(name: &str) -> String {
    format!(
        "class Solution:\n    \
         # TODO: Replace the parameters with the real signature for `{name}`\n    \
         def {name}(self):\n        \
         pass\n"
    )
}

fn instructions(method: &str) -> String {
    format!(
        "# --- AGENT INSTRUCTIONS: ---\n\
         # 1. Create the destination directory for this problem if it does not exist.\n\
         # 2. Create this Python file inside it.\n\
         # 3. Read the examples under `Problem Description` above and append a\n\
         #    complete `def main():` block at the bottom of the file, turning each\n\
         #    example into an `assert`. Nothing is implemented yet, so failing\n\
         #    tests are expected; the point is to capture the test cases.\n\
         #    Reference layout:\n\
         #\n\
         #    def main():\n\
         #        solution = Solution()\n\
         #\n\
         #        # Test cases\n\
         #        # Case 1\n\
         #        # assert solution.{method}(...) == ...\n\
         #\n\
         #        print(\"All tests passed!\")\n\
         #\n\
         #    if __name__ == \"__main__\":\n\
         #        main()"
    )
}

fn host_of(url: &str) -> &str {
    if url.contains("//") {
        url.split('/').nth(2).unwrap_or("Unknown")
    } else {
        "Unknown"
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::leetcode::Difficulty;

    fn question(difficulty: Difficulty) -> Question {
        serde_json::from_value(serde_json::json!({
            "questionId": "215",
            "title": "Kth Largest Element in an Array",
            "titleSlug": "kth-largest-element-in-an-array",
            "difficulty": format!("{difficulty}"),
            "content": "<p>Find the <code>k<sup>th</sup></code> largest element.</p>",
            "topicTags": [{"name": "Array"}, {"name": "Heap (Priority Queue)"}],
            "hints": [],
            "similarQuestions": null,
            "codeSnippets": null,
            "exampleTestcaseList": []
        }))
        .unwrap()
    }

    fn doc(q: &Question) -> String {
        build_document(&PageContent::Problem(q.clone()))
    }

    #[test]
    fn difficulty_markers() {
        for (difficulty, marker) in [
            (Difficulty::Easy, "🟢"),
            (Difficulty::Medium, "🟡"),
            (Difficulty::Hard, "🔴"),
            (Difficulty::Unknown, "⚪"),
        ] {
            let rendered = doc(&question(difficulty));
            let line = rendered
                .lines()
                .find(|l| l.starts_with("**Difficulty:**"))
                .unwrap();
            assert!(line.contains(marker), "{difficulty}: {line}");
        }
    }

    #[test]
    fn sentinels_paired_exactly_once() {
        let rendered = doc(&question(Difficulty::Medium));
        assert_eq!(rendered.matches(LEETCODE_START).count(), 1);
        assert_eq!(rendered.matches(LEETCODE_END).count(), 1);
        assert!(rendered.starts_with(LEETCODE_START));
        assert!(rendered.ends_with(LEETCODE_END));
    }

    #[test]
    fn no_hints_means_no_hints_heading() {
        let rendered = doc(&question(Difficulty::Easy));
        assert!(!rendered.contains("## Hints"));
    }

    #[test]
    fn hints_numbered_from_one() {
        let mut q = question(Difficulty::Easy);
        q.hints = vec!["<p>Sort first.</p>".into(), "Use a <b>heap</b>.".into()];
        let rendered = doc(&q);
        assert!(rendered.contains("## Hints"));
        assert!(rendered.contains("1. Sort first."));
        assert!(rendered.contains("2. Use a **heap**."));
    }

    #[test]
    fn tags_joined_with_commas() {
        let rendered = doc(&question(Difficulty::Easy));
        assert!(rendered.contains("**Tags:** Array, Heap (Priority Queue)"));
    }

    #[test]
    fn no_tags_means_no_tags_line() {
        let mut q = question(Difficulty::Easy);
        q.topic_tags.clear();
        assert!(!doc(&q).contains("**Tags:**"));
    }

    #[test]
    fn similar_questions_rendered_when_payload_parses() {
        let mut q = question(Difficulty::Easy);
        q.similar_questions = Some(
            r#"[{"title": "3Sum", "titleSlug": "3sum", "difficulty": "Medium"}]"#.into(),
        );
        let rendered = doc(&q);
        assert!(rendered
            .contains("- [3Sum](https://leetcode.com/problems/3sum/) (Medium)"));
    }

    #[test]
    fn malformed_similar_questions_omitted() {
        let mut q = question(Difficulty::Easy);
        q.similar_questions = Some("{{not json".into());
        assert!(!doc(&q).contains("## Similar Questions"));
    }

    #[test]
    fn empty_similar_questions_omitted() {
        let mut q = question(Difficulty::Easy);
        q.similar_questions = Some("[]".into());
        assert!(!doc(&q).contains("## Similar Questions"));
    }

    #[test]
    fn snippet_gets_pass_body_appended() {
        let mut q = question(Difficulty::Medium);
        q.code_snippets = serde_json::from_value(serde_json::json!([
            {"lang": "C++", "langSlug": "cpp", "code": "class Solution {};"},
            {"lang": "Python3", "langSlug": "python3",
             "code": "class Solution:\n    def findKthLargest(self, nums: List[int], k: int) -> int:\n        "}
        ]))
        .unwrap();
        let rendered = doc(&q);
        assert!(rendered.contains("def findKthLargest(self, nums: List[int], k: int) -> int:"));
        assert!(rendered.contains("        pass"));
        // Instruction example uses the real method name.
        assert!(rendered.contains("solution.findKthLargest("));
    }

    #[test]
    fn missing_snippet_uses_inferred_name() {
        let rendered = doc(&question(Difficulty::Medium));
        assert!(rendered.contains("def kthLargestElementInAnArray(self):"));
        assert!(rendered.contains("TODO: Replace the parameters"));
    }

    #[test]
    fn preamble_and_instructions_present() {
        let rendered = doc(&question(Difficulty::Easy));
        assert!(rendered.contains(PYTHON_PREAMBLE));
        assert!(rendered.contains("# --- AGENT INSTRUCTIONS: ---"));
        assert!(rendered.contains("def main():"));
    }

    #[test]
    fn generic_document_structure() {
        let rendered = build_document(&PageContent::Page {
            url: "https://neetcode.io/problems/two-sum/question".into(),
            markdown: "Given an array of integers, return indices of the two numbers.".into(),
            degraded: false,
        });
        assert_eq!(rendered.matches(GENERIC_START).count(), 1);
        assert_eq!(rendered.matches(GENERIC_END).count(), 1);
        assert!(rendered.contains("**Source:** neetcode.io"));
        assert!(rendered.contains("def twoSum(self):"));
        assert!(!rendered.contains("⚠️"));
    }

    #[test]
    fn degraded_page_carries_warning() {
        let rendered = build_document(&PageContent::Page {
            url: "https://example.com/problems/two-sum/".into(),
            markdown: "stub".into(),
            degraded: true,
        });
        assert!(rendered.contains("⚠️"));
        assert!(rendered.contains("JavaScript rendering"));
        assert!(rendered.contains("stub"));
    }
}
