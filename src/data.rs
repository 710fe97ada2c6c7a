//! オフラインデータの準備
//!
//! サンプルが宣言したデータアイテムを `<data_dir>/<item_id>/` にダウンロードし、
//! マーカーファイルでダウンロード日時を管理する。

mod marker;
mod portal;
mod provision;

pub use marker::{is_data_present, read_marker, write_marker, MARKER_FILE};
pub use portal::{ItemSource, PortalClient, PortalItem};
pub use provision::{DataProvisioner, ItemOutcome, ItemStatus, ProvisionReport};
