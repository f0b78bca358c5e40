//! One-time download of the observations CSV.
//!
//! The dataset is published on Google Drive. It is fetched only when the
//! local file is missing (or on `fetch --force`), written to a `.part`
//! sibling first and renamed into place once complete.

use crate::config::DashboardConfig;
use anyhow::Context;
use gwl_core::GwlError;
use log::info;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Direct-download URL for a public Drive file. `confirm=t` skips the
/// virus-scan interstitial Drive serves for large files.
pub fn drive_download_url(file_id: &str) -> String {
    format!("https://drive.google.com/uc?id={file_id}&export=download&confirm=t")
}

/// Make sure the CSV named by `config` exists locally and return its path.
pub async fn ensure_csv(config: &DashboardConfig, force: bool) -> anyhow::Result<PathBuf> {
    let path = config.csv_path.clone();
    if path.exists() && !force {
        info!("bootstrap: using existing {}", path.display());
        return Ok(path);
    }

    let url = config.download_url();
    info!("bootstrap: downloading dataset from {} to {}", url, path.display());
    let bytes = download(&url, &path).await?;
    info!("bootstrap: downloaded {} bytes to {}", bytes, path.display());
    Ok(path)
}

async fn download(url: &str, dest: &Path) -> anyhow::Result<usize> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(300))
        .build()?;

    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("failed to request {url}"))?;

    if !response.status().is_success() {
        return Err(GwlError::Download(format!("{} returned {}", url, response.status())).into());
    }

    let body = response.bytes().await?;
    if looks_like_html(&body) {
        return Err(GwlError::Download(format!(
            "{url} returned an HTML page instead of CSV (is the file shared publicly?)"
        ))
        .into());
    }

    let part = part_path(dest);
    tokio::fs::write(&part, &body)
        .await
        .with_context(|| format!("failed to write {}", part.display()))?;
    tokio::fs::rename(&part, dest)
        .await
        .with_context(|| format!("failed to move {} into place", part.display()))?;
    Ok(body.len())
}

/// Drive answers quota and permission problems with an HTML page and 200.
fn looks_like_html(body: &[u8]) -> bool {
    let head = &body[..body.len().min(512)];
    let text = String::from_utf8_lossy(head).trim_start().to_ascii_lowercase();
    text.starts_with("<!doctype html") || text.starts_with("<html")
}

fn part_path(dest: &Path) -> PathBuf {
    let mut name = dest.file_name().unwrap_or_default().to_os_string();
    name.push(".part");
    dest.with_file_name(name)
}
