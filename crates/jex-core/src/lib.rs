//! jex-core - Core types and logic for the Jike post exporter.

pub mod api_url;
pub mod csv;
pub mod error;
pub mod feed;
pub mod post;
pub mod status;
pub mod token;

pub use api_url::{ApiUrl, DEFAULT_API_BASE};
pub use csv::{CsvDocument, export_filename};
pub use error::Error;
pub use feed::{CrawlRequest, FREE_TIER_CAP, FeedKind, FeedPage, PAGE_SIZE};
pub use post::{Picture, Post, PostAuthor, Topic};
pub use status::{NullObserver, StatusObserver, StatusUpdate};
pub use token::AccessToken;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
