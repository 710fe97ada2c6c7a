//! サンプル候補（静的登録レコード）
//!
//! 各サンプル実装はコンパイル時に `SampleCandidate` として登録され、
//! カタログビルダーがここから記述子を生成する。

use crate::sample::{AuxiliaryFile, AuxiliaryFileKind, SampleFactory, SampleMetadata};

/// サンプル候補
///
/// `namespace` はサンプルの論理グループのパス（例: `samples::Network_Analysis`）。
/// カテゴリはこのパスの最終セグメントから導出される。
#[derive(Debug, Clone)]
pub struct SampleCandidate {
    namespace: String,
    metadata: Option<SampleMetadata>,
    offline_data: Vec<String>,
    auxiliary_files: Vec<AuxiliaryFile>,
    path: Option<String>,
    image: Option<String>,
    factory: SampleFactory,
}

impl SampleCandidate {
    pub fn new(namespace: impl Into<String>, factory: SampleFactory) -> Self {
        Self {
            namespace: namespace.into(),
            metadata: None,
            offline_data: Vec::new(),
            auxiliary_files: Vec::new(),
            path: None,
            image: None,
            factory,
        }
    }

    /// 必須メタデータを設定（未設定の候補はカタログから除外される）
    pub fn with_metadata(mut self, metadata: SampleMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// 実行前にダウンロードが必要なデータアイテムIDを設定
    pub fn with_offline_data<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.offline_data = ids.into_iter().map(Into::into).collect();
        self
    }

    /// 補助ファイルを追加
    pub fn with_auxiliary_files<I, S>(mut self, kind: AuxiliaryFileKind, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.auxiliary_files
            .extend(files.into_iter().map(|f| AuxiliaryFile::new(kind, f)));
        self
    }

    /// 実装ソースファイルのパスを設定（通常は `file!()`）
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// サムネイル画像を設定
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub(crate) fn into_parts(self) -> CandidateParts {
        CandidateParts {
            namespace: self.namespace,
            metadata: self.metadata,
            offline_data: self.offline_data,
            auxiliary_files: self.auxiliary_files,
            path: self.path,
            image: self.image,
            factory: self.factory,
        }
    }
}

/// ビルダー内部で使用する分解済みの候補
pub(crate) struct CandidateParts {
    pub namespace: String,
    pub metadata: Option<SampleMetadata>,
    pub offline_data: Vec<String>,
    pub auxiliary_files: Vec<AuxiliaryFile>,
    pub path: Option<String>,
    pub image: Option<String>,
    pub factory: SampleFactory,
}

/// サンプル候補の供給元
///
/// ホスト環境（静的登録リスト、テスト用の候補一覧など）が実装する。
pub trait SampleSource {
    /// 候補を列挙
    fn candidates(&self) -> Vec<SampleCandidate>;
}

impl SampleSource for [SampleCandidate] {
    fn candidates(&self) -> Vec<SampleCandidate> {
        self.to_vec()
    }
}

impl SampleSource for Vec<SampleCandidate> {
    fn candidates(&self) -> Vec<SampleCandidate> {
        self.clone()
    }
}
