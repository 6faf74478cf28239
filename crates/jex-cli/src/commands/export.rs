//! Export command implementation.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use clap::Args;
use colored::Colorize;

use jex_core::{AccessToken, ApiUrl, CrawlRequest, CsvDocument, FeedKind, export_filename};
use jex_http::Exporter;

use crate::config;
use crate::output::{self, ConsoleObserver};

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Profile username (the last path segment of the profile URL)
    #[arg(long)]
    pub username: String,

    /// Session access token copied from a logged-in web session
    #[arg(long)]
    pub token: String,

    /// Export the profile's collection (收藏) instead of its own feed
    #[arg(long)]
    pub collection: bool,

    /// Append an image-URL column to the CSV
    #[arg(long)]
    pub include_images: bool,

    /// Directory the CSV file is written to
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// API base URL
    #[arg(long, default_value = jex_core::DEFAULT_API_BASE)]
    pub api_base: String,
}

pub async fn run(args: ExportArgs) -> Result<()> {
    let base = ApiUrl::new(&args.api_base).context("Invalid API base URL")?;
    let activated = config::load()?.activated;
    tracing::debug!(activated, "loaded activation state");

    let request = CrawlRequest {
        username: args.username,
        token: AccessToken::new(args.token),
        include_images: args.include_images,
        is_activated: activated,
        feed: if args.collection {
            FeedKind::Collection
        } else {
            FeedKind::Personal
        },
    };

    let exporter = Exporter::new(base);
    exporter
        .start_crawl(request, &ConsoleObserver)
        .await
        .context("爬取失败")?;

    let Some(artifact) = exporter.latest() else {
        // The crawl finished but produced nothing to save.
        return Ok(());
    };

    fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("Failed to create {}", args.output_dir.display()))?;

    let filename = export_filename(&artifact.author, Local::now().date_naive());
    let path = args.output_dir.join(&filename);
    save_csv(&path, &artifact.csv)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    output::success(&format!("已保存 {}", path.display()));
    if !activated {
        println!(
            "{}",
            "未激活版本最多导出 60 条，使用 jex activate 解锁。".dimmed()
        );
    }

    Ok(())
}

/// Write the document with its byte-order marker as one self-contained
/// file.
fn save_csv(path: &Path, csv: &CsvDocument) -> std::io::Result<()> {
    fs::write(path, csv.to_bom_bytes())
}
