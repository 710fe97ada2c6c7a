//! ギャラリー設定とHTTP設定
//!
//! `~/.sgal/config.toml` を読み込み、環境変数で上書きする。
//! ファイルが存在しない場合はデフォルト値を使用する。

use crate::env::EnvVar;
use crate::error::{GalleryError, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// 設定ディレクトリ名（$HOME 直下）
const CONFIG_DIR: &str = ".sgal";
/// 設定ファイル名
const CONFIG_FILE: &str = "config.toml";
/// データディレクトリ名（設定ディレクトリ配下）
const DATA_DIR: &str = "data";

/// デフォルトのポータルURL
pub const DEFAULT_PORTAL_URL: &str = "https://www.arcgis.com";

/// データディレクトリの上書き用環境変数
pub const ENV_DATA_DIR: &str = "SGAL_DATA_DIR";
/// ポータルURLの上書き用環境変数
pub const ENV_PORTAL_URL: &str = "SGAL_PORTAL_URL";

/// HTTP設定
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// タイムアウト（秒）。0 はタイムアウトなし
    pub timeout_secs: u64,
    /// User-Agent
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: "sgal-cli".to_string(),
        }
    }
}

impl HttpConfig {
    /// タイムアウトを取得
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }

    /// reqwest::Client を構築
    pub fn build_client(&self) -> Client {
        let mut builder = Client::builder().user_agent(&self.user_agent);

        if let Some(timeout) = self.timeout() {
            builder = builder.timeout(timeout);
        }

        builder.build().unwrap_or_else(|_| Client::new())
    }
}

/// config.toml のルート構造
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct ConfigFile {
    data_dir: Option<PathBuf>,
    portal_url: Option<String>,
    http: HttpConfig,
}

/// ギャラリー設定
#[derive(Debug, Clone)]
pub struct GalleryConfig {
    /// オフラインデータの保存先
    pub data_dir: PathBuf,
    /// ポータルのベースURL
    pub portal_url: String,
    /// HTTP設定
    pub http: HttpConfig,
}

impl GalleryConfig {
    /// デフォルトパス（~/.sgal/config.toml）から読み込む
    pub fn load() -> Result<Self> {
        let home = EnvVar::home()
            .ok_or_else(|| GalleryError::Config("HOME environment variable not set".into()))?;
        let root = PathBuf::from(home).join(CONFIG_DIR);
        Self::load_from(&root.join(CONFIG_FILE), &root.join(DATA_DIR))
    }

    /// 指定パスから読み込む
    ///
    /// `default_data_dir` は設定ファイルにも環境変数にも指定がない場合に使用する。
    pub fn load_from(path: &Path, default_data_dir: &Path) -> Result<Self> {
        let file = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str::<ConfigFile>(&content)?
        } else {
            ConfigFile::default()
        };

        let config = Self {
            data_dir: file
                .data_dir
                .unwrap_or_else(|| default_data_dir.to_path_buf()),
            portal_url: file
                .portal_url
                .unwrap_or_else(|| DEFAULT_PORTAL_URL.to_string()),
            http: file.http,
        };

        Ok(config.with_env_overrides())
    }

    /// 環境変数による上書きを適用
    fn with_env_overrides(mut self) -> Self {
        if let Some(dir) = EnvVar::get(ENV_DATA_DIR) {
            self.data_dir = PathBuf::from(dir);
        }
        if let Some(url) = EnvVar::get(ENV_PORTAL_URL) {
            self.portal_url = url;
        }
        self.portal_url = self.portal_url.trim_end_matches('/').to_string();
        self
    }

    /// データアイテムのディレクトリ
    pub fn item_dir(&self, item_id: &str) -> PathBuf {
        self.data_dir.join(item_id)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
