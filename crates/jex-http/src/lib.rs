//! jex-http - reqwest-backed client and crawl loop for the Jike API.

mod client;
mod crawler;
mod exporter;

pub use client::ApiClient;
pub use crawler::{CrawlOutput, Crawler};
pub use exporter::{ExportArtifact, Exporter};
