//! テスト用ヘルパー

use crate::catalog::SampleCandidate;
use crate::error::Result;
use crate::sample::{SampleContext, SampleDescriptor, SampleFactory, SampleMetadata, SampleView};
use std::sync::Arc;

/// 何も描画しないテスト用サンプル画面
#[derive(Debug, Default)]
pub struct StubView;

impl SampleView for StubView {
    fn title(&self) -> &str {
        "stub"
    }

    fn render(&self, _ctx: &SampleContext) -> Result<Vec<String>> {
        Ok(vec!["stub".to_string()])
    }
}

/// テスト用の記述子を作成
pub fn descriptor(category: &str, name: &str) -> Arc<SampleDescriptor> {
    descriptor_with_tags(category, name, &[])
}

/// タグ付きのテスト用記述子を作成
pub fn descriptor_with_tags(category: &str, name: &str, tags: &[&str]) -> Arc<SampleDescriptor> {
    let metadata = SampleMetadata::new(name, format!("{} sample", name), "").with_tags(tags.iter().copied());
    Arc::new(SampleDescriptor::new(
        metadata,
        category.to_string(),
        SampleFactory::of::<StubView>(),
    ))
}

/// テスト用の候補を作成
pub fn candidate(namespace: &str, name: &str) -> SampleCandidate {
    SampleCandidate::new(namespace, SampleFactory::of::<StubView>())
        .with_metadata(SampleMetadata::new(name, format!("{} sample", name), "Run it."))
}
