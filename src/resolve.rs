use std::sync::LazyLock;

use regex::Regex;

static PROBLEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"leetcode\.com/problems/([^/?#]+)").unwrap());
static CONTEST_PROBLEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"leetcode\.com/contest/[^/]+/problems/([^/?#]+)").unwrap());
static WEEKLY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"leetcode\.com/contest/weekly-contest-(\d+)/problems/([^/?#]+)").unwrap()
});
static BIWEEKLY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"leetcode\.com/contest/biweekly-contest-(\d+)/problems/([^/?#]+)").unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContestCategory {
    Weekly,
    Biweekly,
}

impl std::fmt::Display for ContestCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContestCategory::Weekly => write!(f, "weekly"),
            ContestCategory::Biweekly => write!(f, "biweekly"),
        }
    }
}

/// Contest coordinates captured from a contest-scoped problem URL.
/// Either fully populated or absent; never partial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContestInfo {
    pub category: ContestCategory,
    pub number: u32,
    pub slug: String,
}

/// Resolve a URL or bare identifier to a title slug.
///
/// Tries the plain problem-page path first, then the contest-scoped path.
/// Anything else is accepted verbatim with surrounding slashes stripped,
/// so this never fails and touches no network.
pub fn extract_slug(input: &str) -> String {
    if let Some(caps) = PROBLEM_RE.captures(input) {
        return caps[1].to_string();
    }
    if let Some(caps) = CONTEST_PROBLEM_RE.captures(input) {
        return caps[1].to_string();
    }
    input.trim_matches('/').to_string()
}

/// Detect contest coordinates in the input. `None` for non-contest inputs.
pub fn contest_info(input: &str) -> Option<ContestInfo> {
    for (re, category) in [
        (&*WEEKLY_RE, ContestCategory::Weekly),
        (&*BIWEEKLY_RE, ContestCategory::Biweekly),
    ] {
        if let Some(caps) = re.captures(input) {
            let number = caps[1].parse().ok()?;
            return Some(ContestInfo {
                category,
                number,
                slug: caps[2].to_string(),
            });
        }
    }
    None
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn problem_url() {
        assert_eq!(
            extract_slug("https://leetcode.com/problems/number-of-islands/"),
            "number-of-islands"
        );
    }

    #[test]
    fn problem_url_with_query_and_tab() {
        assert_eq!(
            extract_slug("https://leetcode.com/problems/two-sum/description/?envType=daily"),
            "two-sum"
        );
        assert_eq!(
            extract_slug("https://leetcode.com/problems/two-sum#hints"),
            "two-sum"
        );
    }

    #[test]
    fn bare_slug_unchanged() {
        assert_eq!(extract_slug("two-sum"), "two-sum");
    }

    #[test]
    fn surrounding_slashes_stripped() {
        assert_eq!(extract_slug("/two-sum/"), "two-sum");
    }

    #[test]
    fn contest_url_resolves_embedded_slug() {
        let url = "https://leetcode.com/contest/weekly-contest-400/problems/two-sum/";
        assert_eq!(extract_slug(url), "two-sum");
    }

    #[test]
    fn weekly_contest_info() {
        let url = "https://leetcode.com/contest/weekly-contest-400/problems/two-sum/";
        let info = contest_info(url).unwrap();
        assert_eq!(info.category, ContestCategory::Weekly);
        assert_eq!(info.number, 400);
        assert_eq!(info.slug, "two-sum");
    }

    #[test]
    fn biweekly_contest_info() {
        let url = "https://leetcode.com/contest/biweekly-contest-137/problems/find-the-maximum-length-of-valid-subsequence-i/";
        let info = contest_info(url).unwrap();
        assert_eq!(info.category, ContestCategory::Biweekly);
        assert_eq!(info.number, 137);
    }

    #[test]
    fn non_contest_has_no_info() {
        assert!(contest_info("https://leetcode.com/problems/two-sum/").is_none());
        assert!(contest_info("two-sum").is_none());
    }
}
