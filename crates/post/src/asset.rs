//! Media attached to a post.
//!
//! Photos are stored as `.webp`, videos as `.mp4`. Every asset of a draft
//! shares a short title taken from the first message, numbered from 1:
//! `my_trip-1.webp`, `my_trip-2.mp4`, ...

use std::path::{Path, PathBuf};

use blogkit_common::SiteConfig;
use chrono::{DateTime, FixedOffset};

use crate::error::{PostError, PostResult};
use crate::slug::slugify;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Photo,
    Video,
}

impl AssetKind {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Photo => "webp",
            Self::Video => "mp4",
        }
    }

    /// Classify a file by extension.
    pub fn from_path(path: &Path) -> PostResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("webp") => Ok(Self::Photo),
            Some("mp4") => Ok(Self::Video),
            _ => Err(PostError::UnsupportedAsset {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Raw media received alongside a message, not yet named.
#[derive(Debug, Clone)]
pub struct Attachment {
    pub kind: AssetKind,
    pub content: Vec<u8>,
}

impl Attachment {
    pub fn new(kind: AssetKind, content: Vec<u8>) -> Self {
        Self { kind, content }
    }
}

/// A named asset, ready to be written under the site root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub kind: AssetKind,
    /// Path relative to the site root, e.g. `assets/my_trip-1.webp`.
    pub path: PathBuf,
    pub content: Vec<u8>,
}

impl Asset {
    /// File name without directories.
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Hands out sequential asset names for one draft.
#[derive(Debug, Clone, Default)]
pub struct AssetNamer {
    short_title: Option<String>,
    count: u32,
}

impl AssetNamer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next base name (without extension).
    ///
    /// The first call fixes the short title from the first line of
    /// `message_text`, or from `now` when the message is empty.
    pub fn next_name(&mut self, message_text: &str, now: DateTime<FixedOffset>) -> String {
        let short_title = self.short_title.get_or_insert_with(|| {
            let first_line = message_text
                .lines()
                .next()
                .map(str::to_string)
                .unwrap_or_else(|| format!("{}-untitled", now.format("%Y-%m-%d_%H-%M-%S")));
            slugify(&first_line, '_')
        });
        self.count += 1;
        format!("{short_title}-{}", self.count)
    }

    pub fn short_title(&self) -> Option<&str> {
        self.short_title.as_deref()
    }

    pub fn reset(&mut self) {
        self.short_title = None;
        self.count = 0;
    }

    /// Name an attachment and place it in the site's asset directory.
    ///
    /// Videos are an extra and are refused unless extras are enabled.
    pub fn name_attachment(
        &mut self,
        attachment: Attachment,
        message_text: &str,
        now: DateTime<FixedOffset>,
        site: &SiteConfig,
    ) -> PostResult<Asset> {
        if attachment.kind == AssetKind::Video && !site.extras_enabled {
            return Err(PostError::extras_not_enabled("video support"));
        }

        let base = self.next_name(message_text, now);
        let path = site
            .assets_dir
            .join(format!("{base}.{}", attachment.kind.extension()));
        tracing::info!(
            short_title = self.short_title().unwrap_or("untitled"),
            path = %path.display(),
            "Named asset"
        );

        Ok(Asset {
            kind: attachment.kind,
            path,
            content: attachment.content,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(2 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 5, 17, 9, 30, 5)
            .unwrap()
    }

    #[test]
    fn names_are_numbered_under_first_title() {
        let mut namer = AssetNamer::new();
        assert_eq!(namer.next_name("My Trip\n===\n", now()), "my_trip-1");
        assert_eq!(namer.next_name("Another title", now()), "my_trip-2");

        namer.reset();
        assert_eq!(namer.next_name("Another title", now()), "another_title-1");
    }

    #[test]
    fn empty_message_falls_back_to_timestamp() {
        let mut namer = AssetNamer::new();
        assert_eq!(namer.next_name("", now()), "2024_05_17_09_30_05_untitled-1");
    }

    #[test]
    fn kind_from_extension() {
        assert_eq!(AssetKind::from_path(Path::new("a.WEBP")).unwrap(), AssetKind::Photo);
        assert_eq!(AssetKind::from_path(Path::new("dir/b.mp4")).unwrap(), AssetKind::Video);
        assert!(matches!(
            AssetKind::from_path(Path::new("c.png")),
            Err(PostError::UnsupportedAsset { .. })
        ));
    }

    #[test]
    fn videos_require_extras() {
        let mut namer = AssetNamer::new();
        let site = SiteConfig::default();
        let err = namer
            .name_attachment(Attachment::new(AssetKind::Video, vec![0]), "T", now(), &site)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Feature 'video support' is not enabled in the configuration."
        );
        assert_eq!(namer.short_title(), None);
    }

    #[test]
    fn photo_lands_in_assets_dir() {
        let mut namer = AssetNamer::new();
        let asset = namer
            .name_attachment(
                Attachment::new(AssetKind::Photo, vec![1, 2]),
                "Sunset",
                now(),
                &SiteConfig::default(),
            )
            .unwrap();
        assert_eq!(asset.path, PathBuf::from("assets/sunset-1.webp"));
        assert_eq!(asset.name(), "sunset-1.webp");
    }
}
