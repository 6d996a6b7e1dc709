pub mod generic;
pub mod leetcode;

use std::time::Duration;

use anyhow::Result;
use reqwest::Client;

use self::leetcode::Question;

const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Realistic browser UA; some sources serve bots an empty shell.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Where and how problem content is retrieved. Both variants produce the
/// same [`PageContent`] intermediate, so assembly has a single code path.
#[derive(Debug)]
pub enum ContentSource {
    /// LeetCode GraphQL API, queried by title slug.
    Structured { slug: String },
    /// Arbitrary page, fetched raw and pruned heuristically.
    Generic { url: String, min_content_len: usize },
}

/// Retrieved content ready for assembly.
#[derive(Debug)]
pub enum PageContent {
    Problem(Question),
    Page {
        url: String,
        markdown: String,
        /// Content was implausibly short; likely a JS-rendered shell.
        degraded: bool,
    },
}

impl ContentSource {
    /// Issue the one network call of this invocation and normalize the result.
    pub async fn retrieve(&self) -> Result<PageContent> {
        match self {
            ContentSource::Structured { slug } => {
                let question = leetcode::fetch_question(slug).await?;
                Ok(PageContent::Problem(question))
            }
            ContentSource::Generic {
                url,
                min_content_len,
            } => generic::fetch_page(url, *min_content_len).await,
        }
    }
}

/// Client shared by both strategies: 15s timeout, redirects followed
/// (reqwest default policy), browser user-agent.
fn http_client() -> Result<Client> {
    Ok(Client::builder()
        .timeout(FETCH_TIMEOUT)
        .user_agent(BROWSER_USER_AGENT)
        .build()?)
}
