//! サンプルのモデル
//!
//! - `metadata`: 登録時に宣言するメタデータと補助ファイル
//! - `descriptor`: カタログが保持するサンプル記述子
//! - `view`: サンプル画面の trait とファクトリー

mod descriptor;
mod metadata;
mod view;

pub use descriptor::SampleDescriptor;
pub use metadata::{AuxiliaryFile, AuxiliaryFileKind, SampleMetadata};
pub use view::{SampleContext, SampleFactory, SampleView};
