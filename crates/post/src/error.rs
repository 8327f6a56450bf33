//! Errors raised while building posts.

use std::path::PathBuf;

/// Shown to the author whenever a message cannot be split.
pub const USAGE_HINT: &str =
    "Title\n===\n+category #tag &layout @author /filepath\n===\nContent";

#[derive(Debug, thiserror::Error)]
pub enum PostError {
    #[error("Invalid format. Use:\n{}", USAGE_HINT)]
    InvalidFormat,

    #[error("Feature '{feature}' is not enabled in the configuration.")]
    ExtrasNotEnabled { feature: String },

    #[error("Unsupported asset type: {path} (expected .webp or .mp4)")]
    UnsupportedAsset { path: PathBuf },

    #[error("No post is in progress")]
    NoDraft,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type PostResult<T> = Result<T, PostError>;

impl PostError {
    pub fn extras_not_enabled(feature: impl Into<String>) -> Self {
        Self::ExtrasNotEnabled {
            feature: feature.into(),
        }
    }
}

impl From<PostError> for blogkit_common::BlogkitError {
    fn from(err: PostError) -> Self {
        match err {
            PostError::Io(e) => Self::Io(e),
            other => Self::post(other.to_string()),
        }
    }
}
