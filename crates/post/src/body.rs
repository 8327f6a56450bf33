//! Post body rewriting: YouTube embeds, link previews, attached media.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::asset::{Asset, AssetKind};
use crate::links::LinkTitles;

fn youtube_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?:https?://)?(?:www\.)?(?:youtube\.com/watch\?v=|youtu\.be/)([\w\-]{11})",
        )
        .expect("youtube regex is valid")
    })
}

fn url_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"https?://[^\s)]+").expect("url regex is valid"))
}

/// Replace every YouTube URL with a `{% youtube ID %}` tag.
///
/// Only active when extras are enabled; otherwise the text is returned as is.
pub fn youtube_embed(text: &str, extras_enabled: bool) -> String {
    if !extras_enabled {
        return text.to_string();
    }
    youtube_re()
        .replace_all(text, "{% youtube ${1} %}")
        .into_owned()
}

/// Every URL in `text`, first occurrence order, without duplicates.
pub fn find_urls(text: &str) -> Vec<String> {
    let mut urls: Vec<String> = Vec::new();
    for m in url_re().find_iter(text) {
        if !urls.iter().any(|u| u == m.as_str()) {
            urls.push(m.as_str().to_string());
        }
    }
    urls
}

/// Replace each URL with a `[🌐 title](url)` Markdown link.
///
/// URLs without a known title use the URL itself as the title.
pub fn apply_link_previews(text: &str, titles: &LinkTitles) -> String {
    url_re()
        .replace_all(text, |caps: &Captures<'_>| {
            let url = &caps[0];
            let title = titles.get(url).map(String::as_str).unwrap_or(url);
            format!("[🌐 {title}]({url})")
        })
        .into_owned()
}

/// Build a body fragment from message text and an optional asset.
///
/// YouTube URLs are turned into tags before link previews run, so only the
/// remaining URLs become preview links. Photos are appended as Markdown
/// images, videos as `{% video name %}` tags. The fragment is wrapped in
/// single newlines so fragments can be concatenated.
pub fn parse_body_with_asset(
    body: &str,
    asset: Option<&Asset>,
    titles: &LinkTitles,
    extras_enabled: bool,
) -> String {
    let mut body = apply_link_previews(&youtube_embed(body, extras_enabled), titles);

    match asset {
        Some(asset) if asset.kind == AssetKind::Photo => {
            body.push_str(&format!(
                "\n\n![{}]({})\n",
                asset.name(),
                asset.path.display()
            ));
        }
        Some(asset) => {
            body.push_str(&format!("\n\n{{% video {} %}}\n", asset.name()));
        }
        None => {}
    }

    format!("\n{}\n", body.trim())
}
