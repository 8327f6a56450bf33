//! `{% video <file> %}`: HTML5 player for a local MP4 asset.

use std::io::Write;

use liquid_core::error::ResultLiquidReplaceExt;
use liquid_core::{Language, ParseTag, Renderable, Result, Runtime, TagReflection, TagTokenIter};

pub const TAG_NAME: &str = "video";

/// A parsed `video` tag occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoEmbed {
    /// Asset path relative to `/assets/`, whitespace-trimmed.
    file: String,
}

impl VideoEmbed {
    pub fn new(input: &str) -> Self {
        Self {
            file: input.trim().to_string(),
        }
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn to_html(&self) -> String {
        format!(
            "<video controls>\n  \
             <source src=\"/assets/{file}\" type=\"video/mp4\">\n  \
             Your browser does not support the video.\n\
             </video>\n",
            file = self.file
        )
    }
}

impl Renderable for VideoEmbed {
    fn render_to(&self, writer: &mut dyn Write, _runtime: &dyn Runtime) -> Result<()> {
        writer
            .write_all(self.to_html().as_bytes())
            .replace("Failed to render video tag")?;
        Ok(())
    }
}

/// Parser registered under [`TAG_NAME`].
#[derive(Copy, Clone, Debug, Default)]
pub struct VideoTag;

impl TagReflection for VideoTag {
    fn tag(&self) -> &'static str {
        TAG_NAME
    }

    fn description(&self) -> &'static str {
        "Embeds an MP4 file from /assets/ in an HTML5 video player."
    }
}

impl ParseTag for VideoTag {
    fn parse(
        &self,
        arguments: TagTokenIter<'_>,
        _options: &Language,
    ) -> Result<Box<dyn Renderable>> {
        let file = crate::tag_argument(arguments);
        tracing::trace!(%file, "Parsed video tag");
        Ok(Box::new(VideoEmbed::new(&file)))
    }

    fn reflection(&self) -> &dyn TagReflection {
        self
    }
}
