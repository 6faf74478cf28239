//! Error types for the jex libraries.
//!
//! One unified error enum with explicit variants, so callers can tell
//! a dead network apart from an endpoint that simply has no data.

use thiserror::Error;

use crate::feed::FeedKind;

/// The unified error type for crawl and export operations.
///
/// Variants whose `Display` text reaches the status stream keep the
/// user-facing wording of the tool (Chinese, like the rest of the UI);
/// purely internal failures render in English.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (DNS, TLS, connection).
    #[error("transport error: {message}")]
    Transport { message: String },

    /// The API answered with a non-2xx status code.
    #[error("API 请求失败，状态码: {status}")]
    Api { status: u16 },

    /// The first page of the feed carried no usable data.
    #[error("{}", .feed.no_data_message())]
    NoData { feed: FeedKind },

    /// A crawl was started while another one is still running.
    #[error("已有导出任务正在进行")]
    CrawlInProgress,

    /// Malformed caller input (e.g. a bad API base URL).
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
}
