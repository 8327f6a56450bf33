//! Draft sessions: build a post over several messages, then publish it.
//!
//! A session starts empty. Each submitted message either starts a fresh
//! draft, extends the current one, or replaces its content, depending on the
//! mode chosen by the last [`DraftAction`].

use std::path::PathBuf;

use blogkit_common::SiteConfig;
use chrono::{DateTime, FixedOffset};

use crate::asset::{Asset, AssetNamer, Attachment};
use crate::body::parse_body_with_asset;
use crate::error::{PostError, PostResult};
use crate::links::LinkTitles;
use crate::post::{create_post, parse_text_and_asset, ParseContext, PostFile};

/// Settings shared by every message of a session.
#[derive(Debug, Clone, Default)]
pub struct PostOptions {
    pub site: SiteConfig,
    /// Site checkout the post will be written into.
    pub site_root: PathBuf,
    /// Known page titles for link previews.
    pub link_titles: LinkTitles,
}

/// What the author can do with a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftAction {
    Post,
    Cancel,
    Extend,
    Edit,
}

/// A post and the assets it references, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedPost {
    pub post: PostFile,
    pub assets: Vec<Asset>,
}

impl PublishedPost {
    /// Commit-style summary, e.g. `Create new post: 2024-05-17-hello.md`.
    pub fn commit_message(&self) -> String {
        let name = self
            .post
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        format!("Create new post: {name}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Published(PublishedPost),
    Cancelled,
    AwaitingExtension,
    /// The current content, to be corrected and sent back in full.
    AwaitingEdit { current: String },
}

#[derive(Debug, Clone)]
struct Draft {
    post: PostFile,
    assets: Vec<Asset>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Mode {
    #[default]
    New,
    Extend,
    Edit,
}

#[derive(Debug, Clone, Default)]
pub struct DraftSession {
    options: PostOptions,
    namer: AssetNamer,
    draft: Option<Draft>,
    mode: Mode,
}

impl DraftSession {
    pub fn new(options: PostOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn has_draft(&self) -> bool {
        self.draft.is_some()
    }

    pub fn is_extending(&self) -> bool {
        self.mode == Mode::Extend
    }

    pub fn is_editing(&self) -> bool {
        self.mode == Mode::Edit
    }

    /// Current post content, if a draft exists.
    pub fn content(&self) -> Option<&str> {
        self.draft.as_ref().map(|d| d.post.content.as_str())
    }

    /// Feed one message (and optional media) into the session.
    ///
    /// Edit mode is left after every submission; extend mode persists until
    /// the draft is posted or cancelled.
    pub fn submit(
        &mut self,
        text: &str,
        attachment: Option<Attachment>,
        author_fallback: &str,
        now: DateTime<FixedOffset>,
    ) -> PostResult<()> {
        match self.mode {
            Mode::Edit => {
                let draft = self.draft.as_mut().ok_or(PostError::NoDraft)?;
                if attachment.is_some() {
                    tracing::warn!("Ignoring attachment sent while editing");
                }
                draft.post.content = text.to_string();
                self.mode = Mode::New;
                tracing::info!("Replaced draft content");
            }
            Mode::Extend => {
                if self.draft.is_none() {
                    return Err(PostError::NoDraft);
                }
                let asset = self.name(attachment, text, now)?;
                let fragment = parse_body_with_asset(
                    text,
                    asset.as_ref(),
                    &self.options.link_titles,
                    self.options.site.extras_enabled,
                );
                let draft = self.draft.as_mut().ok_or(PostError::NoDraft)?;
                draft.post.content.push_str(&fragment);
                draft.assets.extend(asset);
                tracing::info!(assets = draft.assets.len(), "Extended draft");
            }
            Mode::New => {
                let asset = self.name(attachment, text, now)?;
                let ctx = ParseContext {
                    site: &self.options.site,
                    site_root: &self.options.site_root,
                    link_titles: &self.options.link_titles,
                };
                let parsed = parse_text_and_asset(text, author_fallback, asset.as_ref(), ctx)?;
                let post = create_post(&parsed, now);
                tracing::info!(path = %post.path.display(), "Started draft");
                self.draft = Some(Draft {
                    post,
                    assets: asset.into_iter().collect(),
                });
            }
        }
        Ok(())
    }

    fn name(
        &mut self,
        attachment: Option<Attachment>,
        text: &str,
        now: DateTime<FixedOffset>,
    ) -> PostResult<Option<Asset>> {
        attachment
            .map(|a| self.namer.name_attachment(a, text, now, &self.options.site))
            .transpose()
    }

    /// Apply an author decision to the current draft.
    pub fn apply(&mut self, action: DraftAction) -> PostResult<ActionOutcome> {
        match action {
            DraftAction::Post => {
                let draft = self.draft.take().ok_or(PostError::NoDraft)?;
                self.reset();
                let published = PublishedPost {
                    post: draft.post,
                    assets: draft.assets,
                };
                tracing::info!(message = %published.commit_message(), "Draft published");
                Ok(ActionOutcome::Published(published))
            }
            DraftAction::Cancel => {
                self.draft = None;
                self.reset();
                tracing::info!("Draft cancelled");
                Ok(ActionOutcome::Cancelled)
            }
            DraftAction::Extend => {
                if self.draft.is_none() {
                    return Err(PostError::NoDraft);
                }
                self.mode = Mode::Extend;
                Ok(ActionOutcome::AwaitingExtension)
            }
            DraftAction::Edit => {
                let current = self.content().ok_or(PostError::NoDraft)?.to_string();
                self.mode = Mode::Edit;
                Ok(ActionOutcome::AwaitingEdit { current })
            }
        }
    }

    fn reset(&mut self) {
        self.mode = Mode::New;
        self.namer.reset();
    }

    /// Post content followed by the list of attached assets.
    pub fn preview(&self) -> Option<String> {
        let draft = self.draft.as_ref()?;
        let assets = if draft.assets.is_empty() {
            "None".to_string()
        } else {
            draft
                .assets
                .iter()
                .map(|a| format!("- {}", a.name()))
                .collect::<Vec<_>>()
                .join("\n")
        };
        Some(format!("{}\n\nAssets:\n{}", draft.post.content, assets))
    }
}
