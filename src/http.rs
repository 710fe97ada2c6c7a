//! 共通HTTPヘルパー

use crate::error::{GalleryError, Result};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use reqwest::Client;
use std::future::Future;
use std::time::Duration;

/// デフォルトのリトライ回数（初回を含まない）
pub const DEFAULT_MAX_RETRIES: u32 = 2;
/// 初回リトライまでの待機時間
const RETRY_BASE_DELAY: Duration = Duration::from_millis(500);
/// Content-Length に基づく事前確保の上限
const MAX_PREALLOCATION: u64 = 64 << 20;

/// リトライ対象のエラーか
///
/// ネットワークエラー・5xx に加え、429 (Too Many Requests) も対象とする。
pub fn is_retriable_error(error: &GalleryError) -> bool {
    match error {
        GalleryError::PortalApi { status: 429, .. } => true,
        other => other.is_retryable(),
    }
}

/// リトライ可能なエラーの間、指数バックオフで再実行する
pub async fn with_retry<F, Fut, T>(mut op: F, max_retries: u32) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut attempt = 0;
    loop {
        match op().await {
            Err(e) if attempt < max_retries && is_retriable_error(&e) => {
                let delay = RETRY_BASE_DELAY * 2u32.pow(attempt);
                tracing::warn!(error = %e, attempt = attempt + 1, ?delay, "retrying request");
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            result => return result,
        }
    }
}

fn progress_bar(total_size: u64) -> ProgressBar {
    if total_size > 0 {
        let pb = ProgressBar::new(total_size);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")
        {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb
    } else {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} Downloading...") {
            pb.set_style(style);
        }
        pb
    }
}

/// プログレスバー付きダウンロード
///
/// バーは `progress` に追加されるため、並列ダウンロードでも行が重ならない。
pub async fn download_with_progress(
    client: &Client,
    url: &str,
    progress: &MultiProgress,
) -> Result<Vec<u8>> {
    let mut response = client.get(url).send().await?;
    let status = response.status().as_u16();

    if !response.status().is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(GalleryError::PortalApi { status, message });
    }

    let total_size = response.content_length().unwrap_or(0);
    let pb = progress.add(progress_bar(total_size));

    // Content-Length はサーバーの申告値のため、事前確保は上限まで
    let mut bytes = Vec::with_capacity(total_size.min(MAX_PREALLOCATION) as usize);
    let read = loop {
        match response.chunk().await {
            Ok(Some(chunk)) => {
                bytes.extend_from_slice(&chunk);
                pb.inc(chunk.len() as u64);
            }
            Ok(None) => break Ok(()),
            Err(e) => break Err(e),
        }
    };
    pb.finish_and_clear();
    progress.remove(&pb);
    read?;

    tracing::debug!(%url, size = bytes.len(), "download finished");
    Ok(bytes)
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;
