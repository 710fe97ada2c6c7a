//! ダウンロード済みマーカー（`__sample.config`）
//!
//! アイテムディレクトリ直下に置かれ、1 行目にダウンロード日時を
//! RFC 3339 形式（ロケール非依存）で記録する。

use crate::error::Result;
use chrono::{DateTime, SecondsFormat, Utc};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// マーカーファイル名
pub const MARKER_FILE: &str = "__sample.config";

/// ダウンロード日時をマーカーに書き込む
pub fn write_marker(item_dir: &Path, downloaded_at: DateTime<Utc>) -> Result<()> {
    fs::create_dir_all(item_dir)?;
    let marker_path = item_dir.join(MARKER_FILE);

    let mut temp_file = NamedTempFile::new_in(item_dir)?;
    writeln!(
        temp_file,
        "{}",
        downloaded_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    )?;
    temp_file.flush()?;

    match temp_file.persist(&marker_path) {
        Ok(_) => Ok(()),
        Err(e) if e.error.kind() == std::io::ErrorKind::AlreadyExists => {
            let _ = fs::remove_file(&marker_path);
            e.file.persist(&marker_path).map_err(|e| e.error)?;
            Ok(())
        }
        Err(e) => Err(e.error.into()),
    }
}

/// マーカーからダウンロード日時を読み込む
///
/// 欠損・読み込み失敗・1 行目が解釈できない場合は `None`。
pub fn read_marker(item_dir: &Path) -> Option<DateTime<Utc>> {
    let content = fs::read_to_string(item_dir.join(MARKER_FILE)).ok()?;
    let first_line = content.lines().next()?.trim();
    DateTime::parse_from_rfc3339(first_line)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

/// アイテムのデータが最新の状態で存在するか
///
/// ディレクトリかマーカーが無い、マーカーが壊れている、または
/// ダウンロード日時がアイテムの更新日時より古い場合は `false`。
pub fn is_data_present(item_dir: &Path, modified: DateTime<Utc>) -> bool {
    if !item_dir.is_dir() {
        return false;
    }
    match read_marker(item_dir) {
        Some(downloaded_at) => downloaded_at >= modified,
        None => false,
    }
}
