//! サンプルのメタデータ定義

use serde::{Deserialize, Serialize};

/// サンプル登録時に宣言する必須メタデータ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleMetadata {
    /// サンプル名（カテゴリ内で一意）
    pub name: String,
    /// 説明
    pub description: String,
    /// 操作手順
    pub instructions: String,
    /// 検索用タグ
    pub tags: Vec<String>,
}

impl SampleMetadata {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        instructions: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            instructions: instructions.into(),
            tags: Vec::new(),
        }
    }

    /// タグを設定
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

/// 補助ファイル種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuxiliaryFileKind {
    /// XAML レイアウト
    Xaml,
    /// Android レイアウト
    Android,
    /// 補助クラスのソース
    Class,
}

impl AuxiliaryFileKind {
    /// 識別子文字列を取得
    pub fn as_str(&self) -> &'static str {
        match self {
            AuxiliaryFileKind::Xaml => "xaml",
            AuxiliaryFileKind::Android => "android",
            AuxiliaryFileKind::Class => "class",
        }
    }

    /// 表示名を取得
    pub fn display_name(&self) -> &'static str {
        match self {
            AuxiliaryFileKind::Xaml => "XAML layouts",
            AuxiliaryFileKind::Android => "Android layouts",
            AuxiliaryFileKind::Class => "Class files",
        }
    }

    /// 全種別を取得
    pub fn all() -> &'static [AuxiliaryFileKind] {
        &[
            AuxiliaryFileKind::Xaml,
            AuxiliaryFileKind::Android,
            AuxiliaryFileKind::Class,
        ]
    }
}

impl std::fmt::Display for AuxiliaryFileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 補助ファイル（表示専用）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuxiliaryFile {
    pub kind: AuxiliaryFileKind,
    pub name: String,
}

impl AuxiliaryFile {
    pub fn new(kind: AuxiliaryFileKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }
}
