//! Page-title lookup for link previews.

use std::collections::HashMap;
use std::sync::OnceLock;
use std::time::Duration;

use futures::future::join_all;
use regex::Regex;

/// URL → page title.
pub type LinkTitles = HashMap<String, String>;

const FETCH_TIMEOUT: Duration = Duration::from_secs(4);
const USER_AGENT: &str = "Mozilla/5.0";

fn title_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title>").expect("title regex is valid"))
}

/// Text of the first `<title>` element, trimmed. Empty titles count as missing.
pub fn extract_title(html: &str) -> Option<String> {
    let title = title_re().captures(html)?.get(1)?.as_str().trim();
    (!title.is_empty()).then(|| title.to_string())
}

/// HTTP client configured for preview fetches.
pub fn client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()
}

/// Fetch a page and return its title. Any failure yields `None`.
pub async fn fetch_title(client: &reqwest::Client, url: &str) -> Option<String> {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => {
            tracing::debug!(%url, error = %e, "Link preview request failed");
            return None;
        }
    };
    let response = match response.error_for_status() {
        Ok(response) => response,
        Err(e) => {
            tracing::debug!(%url, error = %e, "Link preview returned an error status");
            return None;
        }
    };
    match response.text().await {
        Ok(body) => extract_title(&body),
        Err(e) => {
            tracing::debug!(%url, error = %e, "Failed to read link preview body");
            None
        }
    }
}

/// Fetch titles for all URLs concurrently. URLs whose title cannot be
/// fetched are absent from the result.
pub async fn fetch_titles(urls: &[String]) -> LinkTitles {
    let client = match client() {
        Ok(client) => client,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to build HTTP client, skipping link previews");
            return LinkTitles::new();
        }
    };

    let lookups = urls.iter().map(|url| {
        let client = &client;
        async move { (url.clone(), fetch_title(client, url).await) }
    });

    let titles: LinkTitles = join_all(lookups)
        .await
        .into_iter()
        .filter_map(|(url, title)| title.map(|t| (url, t)))
        .collect();
    tracing::info!(requested = urls.len(), resolved = titles.len(), "Fetched link titles");
    titles
}
