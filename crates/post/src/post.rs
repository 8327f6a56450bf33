//! Post assembly: meta resolution, destination folder, front matter.

use std::path::{Path, PathBuf};

use blogkit_common::SiteConfig;
use chrono::{DateTime, FixedOffset};

use crate::asset::Asset;
use crate::body::parse_body_with_asset;
use crate::error::PostResult;
use crate::links::LinkTitles;
use crate::message::{self, parse_meta, split_message};
use crate::slug::slugify;

/// Structured data for a blog post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPost {
    pub title: String,
    /// Comma-separated categories, if any.
    pub categories: Option<String>,
    /// Comma-separated tags, if any.
    pub tags: Option<String>,
    /// Directory of the post file, relative to the site root.
    pub folder: PathBuf,
    pub author: String,
    pub layout: String,
    pub body: String,
}

/// A rendered post file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostFile {
    /// Path relative to the site root.
    pub path: PathBuf,
    pub content: String,
}

/// Inputs that stay fixed while parsing one message.
#[derive(Debug, Clone, Copy)]
pub struct ParseContext<'a> {
    pub site: &'a SiteConfig,
    pub site_root: &'a Path,
    pub link_titles: &'a LinkTitles,
}

/// Parse a full message (title, meta, body) plus an optional asset.
pub fn parse_text_and_asset(
    text: &str,
    author_fallback: &str,
    asset: Option<&Asset>,
    ctx: ParseContext<'_>,
) -> PostResult<ParsedPost> {
    let parts = split_message(text)?;

    let categories = parse_meta(&parts.meta, message::CATEGORY, "");
    let tags = parse_meta(&parts.meta, message::TAG, "");
    let mut authors = parse_meta(&parts.meta, message::AUTHOR, "");
    if authors.is_empty() {
        authors.push(author_fallback.to_string());
    }
    let layout = parse_meta(&parts.meta, message::LAYOUT, "/");
    let folder = parse_meta(&parts.meta, message::FOLDER, "/");

    let body = parse_body_with_asset(
        &parts.body,
        asset,
        ctx.link_titles,
        ctx.site.extras_enabled,
    );

    let folder = match folder.into_iter().next() {
        Some(explicit) => PathBuf::from(explicit),
        None => choose_destination_folder(ctx.site_root, &categories, &ctx.site.posts_dir),
    };

    Ok(ParsedPost {
        title: parts.title,
        categories: join_nonempty(&categories),
        tags: join_nonempty(&tags),
        folder,
        author: authors.join(", "),
        layout: layout
            .into_iter()
            .next()
            .unwrap_or_else(|| ctx.site.post_layout.clone()),
        body,
    })
}

fn join_nonempty(values: &[String]) -> Option<String> {
    (!values.is_empty()).then(|| values.join(", "))
}

/// Pick the posts folder for a set of categories.
///
/// The first category with an existing `<category>/_posts` directory under
/// the site root wins; otherwise `default` is used.
pub fn choose_destination_folder(site_root: &Path, categories: &[String], default: &Path) -> PathBuf {
    for category in categories {
        let folder = PathBuf::from(category).join("_posts");
        if site_root.join(&folder).is_dir() {
            tracing::debug!(%category, folder = %folder.display(), "Using category posts folder");
            return folder;
        }
    }
    default.to_path_buf()
}

/// Render the post file: dated, slugged file name plus YAML front matter.
pub fn create_post(parsed: &ParsedPost, now: DateTime<FixedOffset>) -> PostFile {
    let filename = format!("{}-{}.md", now.format("%Y-%m-%d"), slugify(&parsed.title, '-'));
    let path = parsed.folder.join(filename);

    let mut front = vec!["---".to_string(), format!("title: {}", parsed.title)];
    if let Some(categories) = &parsed.categories {
        front.push(format!("categories: {categories}"));
    }
    if let Some(tags) = &parsed.tags {
        front.push(format!("tags: {tags}"));
    }
    front.push(format!("author: {}", parsed.author));
    front.push(format!("layout: {}", parsed.layout));
    front.push(format!("date: {}", now.format("%Y-%m-%d %H:%M:%S %:z")));
    front.push("---".to_string());
    front.push(String::new());

    let content = format!("{}{}\n", front.join("\n"), parsed.body.trim());
    PostFile { path, content }
}
