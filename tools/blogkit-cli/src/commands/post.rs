//! Build a post from message files and write it into a site checkout.

use std::path::{Path, PathBuf};

use anyhow::Context;
use blogkit_common::{require_env, AppConfig};
use blogkit_post::asset::{AssetKind, Attachment};
use blogkit_post::body::{find_urls, youtube_embed};
use blogkit_post::{links, ActionOutcome, DraftAction, DraftSession, LinkTitles, PostOptions, PublishedPost};

pub struct PostArgs {
    pub message: PathBuf,
    pub append: Vec<PathBuf>,
    pub assets: Vec<PathBuf>,
    pub author: Option<String>,
    pub site: PathBuf,
    pub fetch_previews: bool,
    pub dry_run: bool,
}

pub async fn run(config: &AppConfig, args: PostArgs) -> anyhow::Result<()> {
    let mut messages = vec![read_message(&args.message)?];
    for path in &args.append {
        messages.push(read_message(path)?);
    }
    anyhow::ensure!(
        args.assets.len() <= messages.len(),
        "{} assets given for {} message(s); pass at most one asset per message",
        args.assets.len(),
        messages.len()
    );

    let author = match args.author {
        Some(author) => author,
        None => require_env("USER")?,
    };

    let link_titles = if args.fetch_previews {
        let urls = preview_urls(&messages, config.site.extras_enabled);
        links::fetch_titles(&urls).await
    } else {
        LinkTitles::new()
    };

    let mut session = DraftSession::new(PostOptions {
        site: config.site.clone(),
        site_root: args.site.clone(),
        link_titles,
    });

    let now = chrono::Local::now().fixed_offset();
    for (index, text) in messages.iter().enumerate() {
        if index > 0 {
            session.apply(DraftAction::Extend)?;
        }
        let attachment = args
            .assets
            .get(index)
            .map(|path| load_attachment(path))
            .transpose()?;
        session.submit(text, attachment, &author, now)?;
    }

    let preview = session
        .preview()
        .ok_or_else(|| anyhow::anyhow!("No post was produced"))?;
    println!("Preview of your post:\n\n{preview}\n");

    if args.dry_run {
        println!("Dry run: nothing written.");
        return Ok(());
    }

    match session.apply(DraftAction::Post)? {
        ActionOutcome::Published(published) => {
            write_published(&args.site, &published)?;
            println!("{}", published.commit_message());
            Ok(())
        }
        other => anyhow::bail!("Unexpected draft outcome: {other:?}"),
    }
}

fn read_message(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read message {}", path.display()))
}

fn load_attachment(path: &Path) -> anyhow::Result<Attachment> {
    let kind = AssetKind::from_path(path)?;
    let content =
        std::fs::read(path).with_context(|| format!("Failed to read asset {}", path.display()))?;
    Ok(Attachment::new(kind, content))
}

/// URLs that will become preview links. YouTube links are skipped when they
/// are rewritten into embed tags.
fn preview_urls(messages: &[String], extras_enabled: bool) -> Vec<String> {
    let mut urls: Vec<String> = Vec::new();
    for message in messages {
        for url in find_urls(&youtube_embed(message, extras_enabled)) {
            if !urls.contains(&url) {
                urls.push(url);
            }
        }
    }
    urls
}

/// Write the post and its assets under `site_root`.
pub fn write_published(site_root: &Path, published: &PublishedPost) -> anyhow::Result<()> {
    let post_path = site_root.join(&published.post.path);
    write_file(&post_path, published.post.content.as_bytes())?;
    tracing::info!(path = %post_path.display(), "Wrote post");

    for asset in &published.assets {
        let asset_path = site_root.join(&asset.path);
        write_file(&asset_path, &asset.content)?;
        tracing::info!(path = %asset_path.display(), bytes = asset.content.len(), "Wrote asset");
    }
    Ok(())
}

fn write_file(path: &Path, content: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}
