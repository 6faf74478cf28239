//! Post record types as returned by the feed endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One crawled post. Immutable once retrieved; the aggregation loop
/// only ever appends these to its buffer.
///
/// All fields beyond `createdAt` are optional on the wire and default
/// to their empty forms, since picture-only and repost-only entries
/// omit them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Creation time of the post.
    pub created_at: DateTime<Utc>,

    /// Post body text.
    #[serde(default)]
    pub content: Option<String>,

    /// Topic (频道) the post was published to.
    #[serde(default)]
    pub topic: Option<Topic>,

    #[serde(default)]
    pub like_count: i64,

    #[serde(default)]
    pub comment_count: i64,

    #[serde(default)]
    pub repost_count: i64,

    /// Attached images, in display order.
    #[serde(default)]
    pub pictures: Vec<Picture>,

    /// Author as embedded in personal-feed responses.
    #[serde(default)]
    pub user: Option<PostAuthor>,
}

/// A topic label attached to a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    pub content: String,
}

/// One attached image.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Picture {
    pub pic_url: String,
}

/// The post author as embedded in feed responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostAuthor {
    #[serde(default)]
    pub screen_name: Option<String>,
}
