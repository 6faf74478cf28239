//! Process-wide export context.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use tracing::{instrument, warn};

use jex_core::{ApiUrl, CrawlRequest, CsvDocument, Error, Result, StatusObserver, StatusUpdate};

use crate::client::ApiClient;
use crate::crawler::Crawler;

/// A finished export: the rendered CSV and the author it is named for.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub csv: CsvDocument,
    pub author: String,
}

/// Owns the process-wide crawl state: the busy flag and the most
/// recently completed artifact.
///
/// Construct one at startup and pass it around explicitly; cloning is
/// cheap and shares the same state. At most one crawl runs at a time
/// per context.
#[derive(Debug, Clone)]
pub struct Exporter {
    inner: Arc<ExporterInner>,
}

#[derive(Debug)]
struct ExporterInner {
    crawler: Crawler,
    busy: AtomicBool,
    artifact: RwLock<Option<ExportArtifact>>,
}

/// Clears the busy flag on every exit path.
struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl Exporter {
    /// Create an export context talking to the given API base.
    pub fn new(base: ApiUrl) -> Self {
        Self {
            inner: Arc::new(ExporterInner {
                crawler: Crawler::new(ApiClient::new(base)),
                busy: AtomicBool::new(false),
                artifact: RwLock::new(None),
            }),
        }
    }

    /// Run one crawl to completion and store the rendered CSV.
    ///
    /// Rejected with [`Error::CrawlInProgress`] while another crawl is
    /// active; re-entrant starts are never queued. Crawl errors are
    /// pushed to `observer` as a terminal `error` status and also
    /// returned; on error the previous artifact stays cleared.
    #[instrument(skip(self, request, observer), fields(username = %request.username))]
    pub async fn start_crawl(
        &self,
        request: CrawlRequest,
        observer: &dyn StatusObserver,
    ) -> Result<()> {
        if self
            .inner
            .busy
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            warn!("crawl already in progress, rejecting start");
            return Err(Error::CrawlInProgress);
        }
        let _busy = BusyGuard(&self.inner.busy);

        // The previous artifact is stale the moment a new crawl starts.
        *self.inner.artifact.write().unwrap() = None;

        match self.inner.crawler.crawl(&request, observer).await {
            Ok(output) if !output.posts.is_empty() => {
                observer.on_status(StatusUpdate::progress(format!(
                    "爬取完成，共 {} 条笔记！",
                    output.posts.len()
                )));

                let csv = CsvDocument::encode(&output.posts, request.include_images);
                *self.inner.artifact.write().unwrap() = Some(ExportArtifact {
                    csv,
                    author: output.author,
                });

                observer.on_status(StatusUpdate::done("数据处理完成，可以下载了！"));
                Ok(())
            }
            Ok(_) => {
                observer.on_status(StatusUpdate::progress("未找到任何笔记或数据为空。"));
                Ok(())
            }
            Err(err) => {
                observer.on_status(StatusUpdate::error(format!("错误: {}", err)));
                Err(err)
            }
        }
    }

    /// The most recently completed export, if any.
    pub fn latest(&self) -> Option<ExportArtifact> {
        self.inner.artifact.read().unwrap().clone()
    }
}
