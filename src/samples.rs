//! 同梱サンプルの静的登録リスト
//!
//! 新しいサンプルを追加する場合は、モジュールに `candidate()` を実装し
//! [`registrations`] に追加する。

mod convex_hull;
mod edit_and_sync_features;
mod geodesic_operations;
mod search_portal_maps;
mod wmts_layer;

use crate::catalog::{SampleCandidate, SampleSource};

/// 同梱サンプルの候補一覧
pub fn registrations() -> Vec<SampleCandidate> {
    vec![
        convex_hull::candidate(),
        geodesic_operations::candidate(),
        wmts_layer::candidate(),
        search_portal_maps::candidate(),
        edit_and_sync_features::candidate(),
    ]
}

/// 同梱サンプルの供給元
#[derive(Debug, Default, Clone, Copy)]
pub struct BundledSamples;

impl SampleSource for BundledSamples {
    fn candidates(&self) -> Vec<SampleCandidate> {
        registrations()
    }
}
