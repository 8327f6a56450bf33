//! Blogkit Tags
//!
//! Liquid tags that turn a one-line argument into an HTML embed:
//! - **`{% video clip.mp4 %}`:** HTML5 `<video>` player for a file under `/assets/`
//! - **`{% youtube dQw4w9WgXcQ %}`:** responsive YouTube `<iframe>`
//!
//! The argument is trimmed and substituted verbatim. Nothing is escaped or
//! validated, so the tags never fail on their input.
//!
//! Liquid tokenizes tag arguments, which would split ids such as
//! `9bZkp7q19f0` and reject paths such as `videos/clip (1).mp4`. Templates
//! therefore go through [`prepare_template`] first: the raw argument of every
//! embed tag is packed into a single string literal that the tag unpacks.

pub mod video;
pub mod youtube;

use std::borrow::Cow;
use std::sync::OnceLock;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use blogkit_common::{BlogkitError, BlogkitResult};
use liquid::ParserBuilder;
use regex::{Captures, Regex};

pub use video::{VideoEmbed, VideoTag};
pub use youtube::{YouTubeEmbed, YouTubeTag};

/// Names of every tag this crate registers.
pub const TAG_NAMES: [&str; 2] = [video::TAG_NAME, youtube::TAG_NAME];

/// Marks a string literal holding a packed raw argument.
const PACKED_PREFIX: &str = "blogkit-arg:";

fn embed_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\{%(-?)\s*(video|youtube)(?:\s+([^\n]*?))?\s*(-?)%\}")
            .expect("embed tag regex is valid")
    })
}

fn raw_block_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?s)\{%-?\s*raw\s*-?%\}.*?\{%-?\s*endraw\s*-?%\}")
            .expect("raw block regex is valid")
    })
}

/// Register the embed tags with a Liquid parser builder.
pub fn register_tags(parser_builder: ParserBuilder) -> ParserBuilder {
    tracing::debug!(tags = ?TAG_NAMES, "Registering embed tags");
    parser_builder.tag(VideoTag).tag(YouTubeTag)
}

/// Build a parser with the Liquid standard library and the embed tags.
pub fn parser() -> BlogkitResult<liquid::Parser> {
    register_tags(ParserBuilder::with_stdlib())
        .build()
        .map_err(|e| BlogkitError::template(e.to_string()))
}

/// Rewrite every `{% video ... %}` / `{% youtube ... %}` so its raw argument
/// survives Liquid's tokenizer. Whitespace-control dashes are kept and
/// `{% raw %}` blocks are left untouched.
pub fn prepare_template(template: &str) -> Cow<'_, str> {
    if !embed_tag_re().is_match(template) {
        return Cow::Borrowed(template);
    }
    let mut prepared = String::with_capacity(template.len());
    let mut last = 0;
    for block in raw_block_re().find_iter(template) {
        prepared.push_str(&pack_arguments(&template[last..block.start()]));
        prepared.push_str(block.as_str());
        last = block.end();
    }
    prepared.push_str(&pack_arguments(&template[last..]));
    Cow::Owned(prepared)
}

fn pack_arguments(text: &str) -> Cow<'_, str> {
    embed_tag_re().replace_all(text, |caps: &Captures<'_>| {
        let raw = caps.get(3).map_or("", |m| m.as_str());
        format!(
            "{{%{} {} \"{}{}\" {}%}}",
            &caps[1],
            &caps[2],
            PACKED_PREFIX,
            URL_SAFE_NO_PAD.encode(raw),
            &caps[4]
        )
    })
}

/// Parse a template with the embed tags available.
pub fn parse(template: &str) -> BlogkitResult<liquid::Template> {
    parser()?
        .parse(&prepare_template(template))
        .map_err(|e| BlogkitError::template(e.to_string()))
}

/// Render a template string with the embed tags available.
pub fn render_str(template: &str, globals: &liquid::Object) -> BlogkitResult<String> {
    parse(template)?
        .render(globals)
        .map_err(|e| BlogkitError::template(e.to_string()))
}

/// Render one tag directly, as if `{% name argument %}` appeared in a page.
///
/// Returns `None` for names this crate does not provide.
pub fn render_tag(name: &str, argument: &str) -> Option<String> {
    match name {
        video::TAG_NAME => Some(VideoEmbed::new(argument).to_html()),
        youtube::TAG_NAME => Some(YouTubeEmbed::new(argument).to_html()),
        _ => None,
    }
}

/// Recover a tag's argument from Liquid's tokens.
///
/// A packed literal from [`prepare_template`] yields the raw text. Templates
/// parsed without the rewrite fall back to the tokens joined by single spaces.
pub(crate) fn tag_argument(arguments: liquid_core::TagTokenIter<'_>) -> String {
    let tokens: Vec<String> = arguments.map(|token| token.as_str().to_string()).collect();
    if let [token] = tokens.as_slice() {
        if let Some(raw) = unpack_argument(token) {
            return raw;
        }
    }
    tokens.join(" ")
}

fn unpack_argument(token: &str) -> Option<String> {
    let literal = token
        .strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(token);
    let packed = literal.strip_prefix(PACKED_PREFIX)?;
    let bytes = URL_SAFE_NO_PAD.decode(packed).ok()?;
    String::from_utf8(bytes).ok()
}
