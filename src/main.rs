mod assemble;
mod infer;
mod normalize;
mod resolve;
mod source;

use clap::Parser;
use tracing::info;

use source::ContentSource;

#[derive(Parser)]
#[command(
    name = "leetfetch",
    about = "Fetch a programming problem and emit a Markdown statement plus a Python stub"
)]
struct Cli {
    /// LeetCode URL, bare slug, or an arbitrary problem URL
    input: String,

    /// Scrape the page directly instead of querying the LeetCode API
    #[arg(long)]
    generic: bool,

    /// Below this many extracted characters a scraped page is flagged as
    /// likely needing dynamic rendering
    #[arg(long, default_value_t = 50)]
    min_content_len: usize,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        // stdout carries only the sentinel-delimited document
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(document) => println!("{document}"),
        Err(e) => {
            eprintln!("❌ {e:#}");
            std::process::exit(1);
        }
    }
}

/// The whole pipeline: resolve → retrieve → normalize → assemble. Returns
/// the finished document; every failure propagates here and only `main`
/// decides exit behavior.
async fn run(cli: Cli) -> anyhow::Result<String> {
    let content = select_source(&cli).retrieve().await?;
    Ok(assemble::build_document(&content))
}

/// Pick a retrieval strategy: `--generic` forces scraping, as does any
/// http(s) URL outside leetcode.com. Everything else resolves to a slug
/// for the structured API.
fn select_source(cli: &Cli) -> ContentSource {
    let is_external_url = cli.input.starts_with("http://") || cli.input.starts_with("https://");
    if cli.generic || (is_external_url && !cli.input.contains("leetcode.com")) {
        return ContentSource::Generic {
            url: cli.input.clone(),
            min_content_len: cli.min_content_len,
        };
    }

    if let Some(contest) = resolve::contest_info(&cli.input) {
        info!(
            "Contest problem: {}-contest-{} / {}",
            contest.category, contest.number, contest.slug
        );
    }

    ContentSource::Structured {
        slug: resolve::extract_slug(&cli.input),
    }
}

// ── Tests ──
