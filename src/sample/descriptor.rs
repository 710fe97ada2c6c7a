//! サンプル記述子
//!
//! カタログ構築時に一度だけ生成され、以後は `Arc` で共有される不変値。

use super::metadata::{AuxiliaryFile, AuxiliaryFileKind, SampleMetadata};
use super::view::SampleFactory;
use serde::Serialize;

/// サンプル記述子
#[derive(Clone, Serialize)]
pub struct SampleDescriptor {
    name: String,
    category: String,
    description: String,
    instructions: String,
    tags: Vec<String>,
    offline_data_ids: Vec<String>,
    auxiliary_files: Vec<AuxiliaryFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<String>,
    #[serde(skip)]
    factory: SampleFactory,
}

impl SampleDescriptor {
    /// 記述子を作成（名前・カテゴリの検証は呼び出し側の責務）
    pub(crate) fn new(metadata: SampleMetadata, category: String, factory: SampleFactory) -> Self {
        Self {
            name: metadata.name,
            category,
            description: metadata.description,
            instructions: metadata.instructions,
            tags: metadata.tags,
            offline_data_ids: Vec::new(),
            auxiliary_files: Vec::new(),
            path: None,
            image: None,
            factory,
        }
    }

    pub(crate) fn with_offline_data(mut self, ids: Vec<String>) -> Self {
        self.offline_data_ids = ids;
        self
    }

    pub(crate) fn with_auxiliary_files(mut self, files: Vec<AuxiliaryFile>) -> Self {
        self.auxiliary_files = files;
        self
    }

    pub(crate) fn with_path(mut self, path: Option<String>) -> Self {
        self.path = path;
        self
    }

    pub(crate) fn with_image(mut self, image: Option<String>) -> Self {
        self.image = image;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn offline_data_ids(&self) -> &[String] {
        &self.offline_data_ids
    }

    pub fn auxiliary_files(&self) -> &[AuxiliaryFile] {
        &self.auxiliary_files
    }

    /// 指定種別の補助ファイル名一覧
    pub fn auxiliary_files_of(&self, kind: AuxiliaryFileKind) -> Vec<&str> {
        self.auxiliary_files
            .iter()
            .filter(|f| f.kind == kind)
            .map(|f| f.name.as_str())
            .collect()
    }

    /// 実装ソースファイルのパス
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// サムネイル画像
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn has_offline_data(&self) -> bool {
        !self.offline_data_ids.is_empty()
    }

    /// `Category/Name` 形式の識別子
    pub fn qualified_name(&self) -> String {
        format!("{}/{}", self.category, self.name)
    }

    /// "view source" 用のファイル名一覧（実装ファイル + 補助ファイル）
    pub fn source_file_names(&self) -> Vec<String> {
        let main = self.path.as_deref().map(|p| {
            p.rsplit(['/', '\\'])
                .next()
                .unwrap_or(p)
                .to_string()
        });
        main.into_iter()
            .chain(self.auxiliary_files.iter().map(|f| f.name.clone()))
            .collect()
    }

    /// 検索テキストに一致するか
    ///
    /// 名前・説明・タグのいずれかに case-insensitive な部分一致で判定する。
    pub fn matches_text(&self, text: &str) -> bool {
        let query = text.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
            || self.tags.iter().any(|t| t.to_lowercase().contains(&query))
    }

    pub(crate) fn factory(&self) -> &SampleFactory {
        &self.factory
    }
}

// ファクトリーは比較対象外
impl PartialEq for SampleDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.category == other.category
            && self.description == other.description
            && self.instructions == other.instructions
            && self.tags == other.tags
            && self.offline_data_ids == other.offline_data_ids
            && self.auxiliary_files == other.auxiliary_files
            && self.path == other.path
            && self.image == other.image
    }
}

impl Eq for SampleDescriptor {}

impl std::fmt::Debug for SampleDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SampleDescriptor")
            .field("name", &self.name)
            .field("category", &self.category)
            .field("tags", &self.tags)
            .field("offline_data_ids", &self.offline_data_ids)
            .finish()
    }
}

#[cfg(test)]
#[path = "descriptor_test.rs"]
mod tests;
