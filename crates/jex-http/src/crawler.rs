//! The pagination/aggregation loop.

use serde_json::Value;
use tracing::{debug, info, instrument};

use jex_core::{CrawlRequest, Error, FREE_TIER_CAP, Post, Result, StatusObserver, StatusUpdate};

use crate::client::ApiClient;

/// Everything a finished crawl hands to the export step.
#[derive(Debug, Clone)]
pub struct CrawlOutput {
    /// Aggregated posts, in retrieval order.
    pub posts: Vec<Post>,
    /// Display name resolved from the first page.
    pub author: String,
}

/// Drives the fetch loop for one crawl.
///
/// One request is in flight at a time; the loop runs until the cursor
/// is exhausted, the free-tier cap is hit, a later page comes back
/// empty, or an error aborts the whole crawl.
#[derive(Debug, Clone)]
pub struct Crawler {
    client: ApiClient,
}

impl Crawler {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Run the loop to one of its terminal conditions.
    ///
    /// A status update is pushed to `observer` before and after every
    /// network call. On any error the accumulated records are
    /// discarded; there is no partial result.
    #[instrument(
        skip(self, request, observer),
        fields(username = %request.username, feed = ?request.feed)
    )]
    pub async fn crawl(
        &self,
        request: &CrawlRequest,
        observer: &dyn StatusObserver,
    ) -> Result<CrawlOutput> {
        observer.on_status(StatusUpdate::progress("正在初始化..."));

        let mut posts: Vec<Post> = Vec::new();
        let mut cursor: Option<Value> = None;
        let mut page = 1u32;
        let mut author = request.username.clone();

        loop {
            observer.on_status(StatusUpdate::progress(format!("正在爬取第 {} 页...", page)));

            let feed_page = self
                .client
                .fetch_page(request.feed, &request.username, cursor.as_ref(), &request.token)
                .await?;

            if !request.feed.is_success(&feed_page) {
                // Page 1 with nothing usable is a contract mismatch;
                // any later page is just the end of the data.
                if page == 1 {
                    return Err(Error::NoData { feed: request.feed });
                }
                debug!(page, "empty page, end of data");
                break;
            }

            if page == 1 {
                if let Some(first) = feed_page.data.first() {
                    author = request.feed.resolve_author(&request.username, first);
                    debug!(%author, "resolved author name");
                }
            }

            cursor = feed_page.next_cursor().cloned();
            let mut data = feed_page.data;

            if !request.is_activated {
                let remaining = FREE_TIER_CAP.saturating_sub(posts.len());
                if data.len() >= remaining {
                    // Fill the remaining quota exactly and stop; the
                    // loop does not look for further pages past the cap.
                    data.truncate(remaining);
                    posts.extend(data);
                    observer.on_status(StatusUpdate::progress(format!(
                        "未激活版本最多导出 {} 条，已达到上限",
                        FREE_TIER_CAP
                    )));
                    info!(total = posts.len(), "free-tier cap reached");
                    break;
                }
            }

            posts.extend(data);
            observer.on_status(StatusUpdate::progress(format!(
                "已获取 {} 条笔记...",
                posts.len()
            )));

            if cursor.is_none() {
                debug!(total = posts.len(), "cursor exhausted");
                break;
            }
            page += 1;
        }

        info!(total = posts.len(), "crawl finished");
        Ok(CrawlOutput { posts, author })
    }
}
