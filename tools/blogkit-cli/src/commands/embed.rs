//! Print a single embed snippet.

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EmbedTag {
    Video,
    Youtube,
}

impl EmbedTag {
    pub fn tag_name(self) -> &'static str {
        match self {
            Self::Video => blogkit_tags::video::TAG_NAME,
            Self::Youtube => blogkit_tags::youtube::TAG_NAME,
        }
    }
}

pub fn run(tag: EmbedTag, argument: String) -> anyhow::Result<()> {
    let html = blogkit_tags::render_tag(tag.tag_name(), &argument)
        .ok_or_else(|| anyhow::anyhow!("Unknown tag: {}", tag.tag_name()))?;
    print!("{html}");
    Ok(())
}
