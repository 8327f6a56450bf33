//! Blogkit Post Authoring
//!
//! Converts a short structured message into a Jekyll post:
//! - **Message:** `Title / === / meta / === / body` splitting and meta symbols
//! - **Body:** YouTube URL rewriting, link previews, asset embedding
//! - **Post:** front matter, dated file names, destination folders
//! - **Draft:** the post → extend → edit → publish workflow
//!
//! Everything except [`links`] is synchronous and free of network I/O.

pub mod asset;
pub mod body;
pub mod draft;
pub mod error;
pub mod links;
pub mod message;
pub mod post;
pub mod slug;

pub use asset::{Asset, AssetKind, AssetNamer, Attachment};
pub use draft::{ActionOutcome, DraftAction, DraftSession, PostOptions, PublishedPost};
pub use error::{PostError, PostResult};
pub use links::LinkTitles;
pub use post::{create_post, parse_text_and_asset, ParsedPost, PostFile};
