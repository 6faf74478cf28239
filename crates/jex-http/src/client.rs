//! HTTP client for the two feed endpoints.

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, ORIGIN, REFERER};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument, trace};

use jex_core::{AccessToken, ApiUrl, Error, FeedKind, FeedPage, PAGE_SIZE, Result};

/// Header carrying the caller's session token.
const ACCESS_TOKEN_HEADER: &str = "x-jike-access-token";

/// Origin of the web client. The collection endpoint rejects requests
/// without these cross-origin markers.
const WEB_ORIGIN: &str = "https://web.okjike.com";

/// Request body for the personal feed. `loadMoreKey` is always
/// present, `null` on the first page.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PersonalFeedRequest<'a> {
    username: &'a str,
    limit: u32,
    load_more_key: Option<&'a Value>,
}

/// Request body for the collection feed. `loadMoreKey` is omitted
/// entirely until the first cursor arrives.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CollectionFeedRequest<'a> {
    limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    load_more_key: Option<&'a Value>,
}

/// Thin typed wrapper over reqwest for the feed endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base: ApiUrl,
}

impl ApiClient {
    /// Create a new client for the given API base URL.
    pub fn new(base: ApiUrl) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("jex/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");

        Self { client, base }
    }

    /// Returns the API base URL this client is configured for.
    #[allow(dead_code)]
    pub fn base(&self) -> &ApiUrl {
        &self.base
    }

    /// Fetch one page of the selected feed.
    #[instrument(skip(self, username, cursor, token), fields(base = %self.base))]
    pub async fn fetch_page(
        &self,
        feed: FeedKind,
        username: &str,
        cursor: Option<&Value>,
        token: &AccessToken,
    ) -> Result<FeedPage> {
        let url = self.base.endpoint(feed.path());
        debug!(path = feed.path(), "fetching feed page");
        trace!(?cursor, "page cursor");

        let request = self
            .client
            .post(&url)
            .headers(self.feed_headers(feed, token));

        let request = match feed {
            FeedKind::Personal => request.json(&PersonalFeedRequest {
                username,
                limit: PAGE_SIZE,
                load_more_key: cursor,
            }),
            FeedKind::Collection => request.json(&CollectionFeedRequest {
                limit: PAGE_SIZE,
                load_more_key: cursor,
            }),
        };

        let response = request.send().await.map_err(into_transport)?;

        let status = response.status();
        trace!(status = %status, "feed response");
        if !status.is_success() {
            return Err(Error::Api {
                status: status.as_u16(),
            });
        }

        response.json::<FeedPage>().await.map_err(into_transport)
    }

    fn feed_headers(&self, feed: FeedKind, token: &AccessToken) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            ACCESS_TOKEN_HEADER,
            HeaderValue::from_str(token.as_str()).expect("invalid token characters"),
        );

        if feed.needs_origin_headers() {
            headers.insert(ORIGIN, HeaderValue::from_static(WEB_ORIGIN));
            headers.insert(REFERER, HeaderValue::from_static("https://web.okjike.com/"));
        }

        headers
    }
}

fn into_transport(err: reqwest::Error) -> Error {
    Error::Transport {
        message: err.to_string(),
    }
}
