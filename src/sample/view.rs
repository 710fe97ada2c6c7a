//! サンプル画面の trait とファクトリー

use crate::error::Result;
use std::path::PathBuf;
use std::sync::Arc;

/// サンプル描画時のコンテキスト
#[derive(Debug, Clone)]
pub struct SampleContext {
    data_dir: PathBuf,
}

impl SampleContext {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// データアイテムのディレクトリ
    pub fn item_dir(&self, item_id: &str) -> PathBuf {
        self.data_dir.join(item_id)
    }
}

/// サンプル画面
///
/// アクティベーションごとに新しいインスタンスが生成される。
pub trait SampleView: Send {
    /// 画面タイトル
    fn title(&self) -> &str;

    /// 画面を行単位で描画
    fn render(&self, ctx: &SampleContext) -> Result<Vec<String>>;
}

type FactoryFn = dyn Fn() -> Result<Box<dyn SampleView>> + Send + Sync;

/// サンプル画面のファクトリー
#[derive(Clone)]
pub struct SampleFactory(Arc<FactoryFn>);

impl SampleFactory {
    /// 任意のコンストラクタからファクトリーを作成
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn() -> Result<Box<dyn SampleView>> + Send + Sync + 'static,
    {
        Self(Arc::new(factory))
    }

    /// `Default` で生成するファクトリー
    pub fn of<T>() -> Self
    where
        T: SampleView + Default + 'static,
    {
        Self::new(|| Ok(Box::new(T::default())))
    }

    /// 新しいインスタンスを生成
    pub fn create(&self) -> Result<Box<dyn SampleView>> {
        (self.0)()
    }
}

impl std::fmt::Debug for SampleFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SampleFactory")
    }
}
