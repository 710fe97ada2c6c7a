//! ポータル検索クエリ

use crate::error::{GalleryError, Result};
use reqwest::Url;

/// ポータル検索の条件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalQuery {
    keyword: String,
    item_type: Option<String>,
    limit: u32,
}

impl PortalQuery {
    /// Web マップのみを対象にした検索
    pub fn web_maps(keyword: &str) -> Self {
        Self {
            keyword: keyword.trim().to_string(),
            item_type: Some("Web Map".to_string()),
            limit: 20,
        }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit.clamp(1, 100);
        self
    }

    /// `q` パラメータ
    pub fn query_text(&self) -> String {
        match &self.item_type {
            Some(item_type) => format!("{} type:\"{}\"", self.keyword, item_type),
            None => self.keyword.clone(),
        }
    }

    /// `<portal>/sharing/rest/search` のリクエスト URL
    pub fn search_url(&self, portal_url: &str) -> Result<Url> {
        let endpoint = format!("{}/sharing/rest/search", portal_url.trim_end_matches('/'));
        let limit = self.limit.to_string();
        Url::parse_with_params(
            &endpoint,
            &[
                ("q", self.query_text().as_str()),
                ("sortField", "numViews"),
                ("sortOrder", "desc"),
                ("num", limit.as_str()),
                ("f", "json"),
            ],
        )
        .map_err(|e| GalleryError::Activation {
            sample: "Search Portal Maps".to_string(),
            message: format!("invalid portal URL '{}': {}", portal_url, e),
        })
    }
}
