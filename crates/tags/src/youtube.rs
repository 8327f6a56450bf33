//! `{% youtube <id> %}`: responsive YouTube iframe.

use std::io::Write;

use liquid_core::error::ResultLiquidReplaceExt;
use liquid_core::{Language, ParseTag, Renderable, Result, Runtime, TagReflection, TagTokenIter};

pub const TAG_NAME: &str = "youtube";

pub const EMBED_BASE_URL: &str = "https://www.youtube.com/embed/";

const ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

/// A parsed `youtube` tag occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YouTubeEmbed {
    video_id: String,
}

impl YouTubeEmbed {
    pub fn new(markup: &str) -> Self {
        Self {
            video_id: markup.trim().to_string(),
        }
    }

    pub fn video_id(&self) -> &str {
        &self.video_id
    }

    /// The iframe `src` value.
    pub fn embed_url(&self) -> String {
        format!("{EMBED_BASE_URL}{}", self.video_id)
    }

    pub fn to_html(&self) -> String {
        format!(
            "<div class=\"video-container\">\n  \
             <iframe\n    \
             src=\"{src}\"\n    \
             frameborder=\"0\"\n    \
             allow=\"{ALLOW}\"\n    \
             allowfullscreen>\n  \
             </iframe>\n\
             </div>\n",
            src = self.embed_url()
        )
    }
}

impl Renderable for YouTubeEmbed {
    fn render_to(&self, writer: &mut dyn Write, _runtime: &dyn Runtime) -> Result<()> {
        writer
            .write_all(self.to_html().as_bytes())
            .replace("Failed to render youtube tag")?;
        Ok(())
    }
}

/// Parser registered under [`TAG_NAME`].
#[derive(Copy, Clone, Debug, Default)]
pub struct YouTubeTag;

impl TagReflection for YouTubeTag {
    fn tag(&self) -> &'static str {
        TAG_NAME
    }

    fn description(&self) -> &'static str {
        "Embeds a YouTube video by id."
    }
}

impl ParseTag for YouTubeTag {
    fn parse(
        &self,
        arguments: TagTokenIter<'_>,
        _options: &Language,
    ) -> Result<Box<dyn Renderable>> {
        let video_id = crate::tag_argument(arguments);
        tracing::trace!(%video_id, "Parsed youtube tag");
        Ok(Box::new(YouTubeEmbed::new(&video_id)))
    }

    fn reflection(&self) -> &dyn TagReflection {
        self
    }
}
