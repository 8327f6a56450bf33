//! Error types shared across Blogkit crates.

/// Top-level error type for Blogkit operations.
#[derive(Debug, thiserror::Error)]
pub enum BlogkitError {
    #[error("Template error: {message}")]
    Template { message: String },

    #[error("Post error: {message}")]
    Post { message: String },

    #[error("Environment variable '{key}' is not set.")]
    MissingEnv { key: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias using BlogkitError.
pub type BlogkitResult<T> = Result<T, BlogkitError>;

impl BlogkitError {
    pub fn template(msg: impl Into<String>) -> Self {
        Self::Template {
            message: msg.into(),
        }
    }

    pub fn post(msg: impl Into<String>) -> Self {
        Self::Post {
            message: msg.into(),
        }
    }

    pub fn missing_env(key: impl Into<String>) -> Self {
        Self::MissingEnv { key: key.into() }
    }
}
