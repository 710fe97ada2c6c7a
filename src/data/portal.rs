//! ポータルのデータアイテム取得
//!
//! `ItemSource` trait でアイテム取得を抽象化し、`PortalClient` が
//! ArcGIS 互換ポータルの REST API で実装する。

use crate::config::GalleryConfig;
use crate::error::{GalleryError, Result};
use crate::http;
use chrono::{DateTime, Utc};
use indicatif::MultiProgress;
use reqwest::Client;
use serde::Deserialize;
use std::future::Future;
use std::pin::Pin;

/// ポータルアイテムのメタデータ
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PortalItem {
    pub id: String,
    /// ファイル名（データアイテムの場合）
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    /// 最終更新日時（エポックミリ秒）
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub modified: DateTime<Utc>,
}

impl PortalItem {
    /// ダウンロードしたデータの保存ファイル名
    pub fn file_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.id)
    }
}

/// ポータルのエラーレスポンス（HTTP 200 で返る）
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    code: u16,
    #[serde(default)]
    message: String,
}

/// アイテム JSON を解釈する
pub(crate) fn parse_item(body: &str) -> Result<PortalItem> {
    if let Ok(ErrorBody { error }) = serde_json::from_str::<ErrorBody>(body) {
        return Err(GalleryError::PortalApi {
            status: error.code,
            message: error.message,
        });
    }
    Ok(serde_json::from_str(body)?)
}

/// データアイテムの取得元
pub trait ItemSource: Send + Sync {
    /// アイテムのメタデータを取得
    fn fetch_item<'a>(
        &'a self,
        item_id: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<PortalItem>> + Send + 'a>>;

    /// アイテムのデータ本体をダウンロード
    fn download_data<'a>(
        &'a self,
        item_id: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<u8>>> + Send + 'a>>;
}

/// ポータル REST API クライアント
pub struct PortalClient {
    http: Client,
    portal_url: String,
    /// 並列ダウンロードのプログレスバーをまとめて描画する
    progress: MultiProgress,
}

impl PortalClient {
    pub fn new(config: &GalleryConfig) -> Self {
        Self {
            http: config.http.build_client(),
            portal_url: config.portal_url.trim_end_matches('/').to_string(),
            progress: MultiProgress::new(),
        }
    }

    /// アイテムURL
    fn item_url(&self, item_id: &str) -> String {
        format!(
            "{}/sharing/rest/content/items/{}",
            self.portal_url, item_id
        )
    }
}

impl ItemSource for PortalClient {
    fn fetch_item<'a>(
        &'a self,
        item_id: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<PortalItem>> + Send + 'a>> {
        Box::pin(async move {
            let url = format!("{}?f=json", self.item_url(item_id));
            tracing::debug!(%url, "fetching item metadata");

            let response = self.http.get(&url).send().await?;
            let status = response.status().as_u16();

            if !response.status().is_success() {
                let message = response.text().await.unwrap_or_default();
                return Err(GalleryError::PortalApi { status, message });
            }

            parse_item(&response.text().await?)
        })
    }

    fn download_data<'a>(
        &'a self,
        item_id: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<u8>>> + Send + 'a>> {
        Box::pin(async move {
            let url = format!("{}/data", self.item_url(item_id));
            http::with_retry(
                || http::download_with_progress(&self.http, &url, &self.progress),
                http::DEFAULT_MAX_RETRIES,
            )
            .await
        })
    }
}
