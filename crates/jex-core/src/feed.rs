//! The endpoint-variant strategy behind the aggregation loop.
//!
//! The personal feed and the collection feed answer with different
//! shapes; [`FeedKind`] captures the differences once so the loop
//! itself stays endpoint-agnostic.

use serde::Deserialize;
use serde_json::Value;

use crate::post::Post;
use crate::token::AccessToken;

/// Records requested per page.
pub const PAGE_SIZE: u32 = 20;

/// Export ceiling for non-activated installs.
pub const FREE_TIER_CAP: usize = 60;

/// Which of the two feed endpoints a crawl targets. Selected once per
/// crawl and never changed mid-loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedKind {
    /// The profile's own authored feed.
    Personal,
    /// The profile's saved (收藏) items.
    Collection,
}

impl FeedKind {
    /// API path for this variant.
    pub fn path(self) -> &'static str {
        match self {
            FeedKind::Personal => "1.0/personalUpdate/single",
            FeedKind::Collection => "1.0/users/collections/list",
        }
    }

    /// Whether this variant requires the web client's cross-origin
    /// marker headers.
    pub fn needs_origin_headers(self) -> bool {
        matches!(self, FeedKind::Collection)
    }

    /// Whether a response page carries usable data.
    ///
    /// The personal feed reports an explicit `success` flag; the
    /// collection endpoint signals success purely through a non-empty
    /// `data` array.
    pub fn is_success(self, page: &FeedPage) -> bool {
        match self {
            FeedKind::Personal => page.success == Some(true) && !page.data.is_empty(),
            FeedKind::Collection => !page.data.is_empty(),
        }
    }

    /// User-facing message for an empty first page.
    pub fn no_data_message(self) -> &'static str {
        match self {
            FeedKind::Personal => "API未返回任何数据",
            FeedKind::Collection => "收藏API未返回任何数据",
        }
    }

    /// Resolve the display name the export is filed under.
    ///
    /// Consulted for the first non-empty page only; once set the name
    /// is never overwritten within a crawl.
    pub fn resolve_author(self, username: &str, first: &Post) -> String {
        match self {
            FeedKind::Collection => format!("收藏_{}", username),
            FeedKind::Personal => first
                .user
                .as_ref()
                .and_then(|u| u.screen_name.clone())
                .unwrap_or_else(|| username.to_string()),
        }
    }
}

/// One page of either feed endpoint.
///
/// Missing fields deserialize to their empty forms so both response
/// shapes fit one struct.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedPage {
    #[serde(default)]
    pub success: Option<bool>,

    #[serde(default)]
    pub data: Vec<Post>,

    /// Opaque pagination cursor. The API hands back arbitrary JSON
    /// here; it is echoed into the next request untouched.
    #[serde(default)]
    pub load_more_key: Option<Value>,
}

impl FeedPage {
    /// The cursor for the next page, with a JSON `null` key treated
    /// the same as an absent one (end of data).
    pub fn next_cursor(&self) -> Option<&Value> {
        self.load_more_key.as_ref().filter(|v| !v.is_null())
    }
}

/// Input parameters for one crawl. Constructed once per invocation and
/// not reused across crawls.
#[derive(Debug, Clone)]
pub struct CrawlRequest {
    /// Profile identifier, the last path segment of the profile URL.
    pub username: String,
    /// Session token of the already-authenticated caller.
    pub token: AccessToken,
    /// Append an image-URL column to the export.
    pub include_images: bool,
    /// Lifts the [`FREE_TIER_CAP`] when true.
    pub is_activated: bool,
    /// Endpoint variant to crawl.
    pub feed: FeedKind,
}
