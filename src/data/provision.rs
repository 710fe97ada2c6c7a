//! サンプル実行前のオフラインデータ準備
//!
//! サンプルが必要とするデータアイテムごとに、ポータル上の更新日時と
//! マーカーを比較し、古いものだけを並列にダウンロードする。

use super::marker::{is_data_present, write_marker};
use super::portal::ItemSource;
use crate::error::{GalleryError, Result};
use crate::sample::SampleDescriptor;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::io::Cursor;
use std::path::{Component as PathComponent, Path, PathBuf};
use std::sync::Arc;
use tokio::task::JoinSet;
use zip::ZipArchive;

/// アイテムの準備結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemStatus {
    /// 今回ダウンロードした
    Downloaded,
    /// 既に最新
    UpToDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemOutcome {
    pub item_id: String,
    pub status: ItemStatus,
    pub path: PathBuf,
}

/// データ準備レポート
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProvisionReport {
    items: Vec<ItemOutcome>,
}

impl ProvisionReport {
    /// 要求順のアイテム結果
    pub fn items(&self) -> &[ItemOutcome] {
        &self.items
    }

    pub fn downloaded(&self) -> impl Iterator<Item = &ItemOutcome> {
        self.items
            .iter()
            .filter(|o| o.status == ItemStatus::Downloaded)
    }

    pub fn up_to_date(&self) -> impl Iterator<Item = &ItemOutcome> {
        self.items
            .iter()
            .filter(|o| o.status == ItemStatus::UpToDate)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// オフラインデータの準備担当
pub struct DataProvisioner {
    source: Arc<dyn ItemSource>,
    data_dir: PathBuf,
}

impl DataProvisioner {
    pub fn new(source: Arc<dyn ItemSource>, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            source,
            data_dir: data_dir.into(),
        }
    }

    /// サンプルが必要とするデータを準備する
    pub async fn ensure_sample_data(&self, sample: &SampleDescriptor) -> Result<ProvisionReport> {
        if !sample.has_offline_data() {
            return Ok(ProvisionReport::default());
        }
        tracing::debug!(sample = %sample.qualified_name(), "ensuring offline data");
        self.ensure_items(sample.offline_data_ids()).await
    }

    /// 指定アイテムを準備する
    ///
    /// 重複するIDは1回だけ処理する。いずれかのアイテムが失敗した場合は
    /// 最初に観測したエラーを返す。
    pub async fn ensure_items(&self, item_ids: &[String]) -> Result<ProvisionReport> {
        let mut seen = HashSet::new();
        let ids: Vec<&String> = item_ids.iter().filter(|id| seen.insert(*id)).collect();

        for id in &ids {
            validate_item_id(id)?;
        }

        let mut tasks = JoinSet::new();
        for (index, id) in ids.iter().enumerate() {
            let source = Arc::clone(&self.source);
            let data_dir = self.data_dir.clone();
            let id = (*id).clone();
            tasks.spawn(async move {
                let outcome = provision_item(source.as_ref(), &data_dir, &id).await;
                (index, outcome)
            });
        }

        let mut outcomes = Vec::with_capacity(ids.len());
        while let Some(joined) = tasks.join_next().await {
            let (index, outcome) = joined.map_err(|e| GalleryError::Io(std::io::Error::other(e)))?;
            outcomes.push((index, outcome?));
        }
        outcomes.sort_by_key(|(index, _)| *index);

        Ok(ProvisionReport {
            items: outcomes.into_iter().map(|(_, outcome)| outcome).collect(),
        })
    }
}

fn validate_item_id(item_id: &str) -> Result<()> {
    if item_id.is_empty() || !item_id.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(GalleryError::InvalidItem(format!(
            "item id must be alphanumeric: '{}'",
            item_id
        )));
    }
    Ok(())
}

async fn provision_item(source: &dyn ItemSource, data_dir: &Path, item_id: &str) -> Result<ItemOutcome> {
    let item = source.fetch_item(item_id).await?;
    let item_dir = data_dir.join(item_id);

    if is_data_present(&item_dir, item.modified) {
        tracing::debug!(item_id, "offline data is up to date");
        return Ok(ItemOutcome {
            item_id: item_id.to_string(),
            status: ItemStatus::UpToDate,
            path: item_dir,
        });
    }

    tracing::info!(
        item_id,
        title = item.title.as_deref(),
        file = item.file_name(),
        "downloading offline data"
    );
    let content = source.download_data(item_id).await?;
    let path = store_item(data_dir, item_id, item.file_name(), &content, Utc::now())?;

    Ok(ItemOutcome {
        item_id: item_id.to_string(),
        status: ItemStatus::Downloaded,
        path,
    })
}

/// ダウンロードしたデータをアイテムディレクトリに配置する
///
/// 作業ディレクトリに展開してマーカーを書き込んだ後、既存のアイテムディレクトリと
/// 置き換える。`.zip` は展開し、それ以外はファイル名のまま保存する。
pub(crate) fn store_item(
    data_dir: &Path,
    item_id: &str,
    file_name: &str,
    content: &[u8],
    downloaded_at: DateTime<Utc>,
) -> Result<PathBuf> {
    let file_path = Path::new(file_name);
    let is_plain_name = matches!(
        file_path.components().collect::<Vec<_>>().as_slice(),
        [PathComponent::Normal(_)]
    );
    if !is_plain_name {
        return Err(GalleryError::InvalidItem(format!(
            "invalid file name for item {}: '{}'",
            item_id, file_name
        )));
    }

    fs::create_dir_all(data_dir)?;
    let staging = tempfile::Builder::new()
        .prefix(".staging-")
        .tempdir_in(data_dir)?;

    let is_archive = file_path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("zip"));
    if is_archive {
        let extracted = extract_archive(content, staging.path())?;
        tracing::debug!(item_id, files = extracted, "archive extracted");
    } else {
        fs::write(staging.path().join(file_name), content)?;
    }
    write_marker(staging.path(), downloaded_at)?;

    let item_dir = data_dir.join(item_id);
    replace_dir(staging.path(), &item_dir, data_dir)?;

    Ok(item_dir)
}

/// `target` を `replacement` で置き換える
///
/// 既存の `target` は退避ディレクトリへ移動し、置き換えに成功した後で削除する。
/// 置き換えに失敗した場合は元の位置へ戻す。
pub(crate) fn replace_dir(replacement: &Path, target: &Path, data_dir: &Path) -> Result<()> {
    if !target.exists() {
        fs::rename(replacement, target)?;
        return Ok(());
    }

    let trash = tempfile::Builder::new().prefix(".old-").tempdir_in(data_dir)?;
    let previous = trash.path().join("item");
    fs::rename(target, &previous)?;

    if let Err(e) = fs::rename(replacement, target) {
        if let Err(restore) = fs::rename(&previous, target) {
            tracing::warn!(path = %target.display(), error = %restore, "could not restore previous data");
        }
        return Err(e.into());
    }

    Ok(())
}

/// zip アーカイブを展開し、展開したファイル数を返す
///
/// 通常のパス要素以外（`..`、絶対パスなど）やシンボリックリンクを含むエントリが
/// 1 つでもあれば、アーカイブ全体を拒否する。
pub(crate) fn extract_archive(archive: &[u8], dest: &Path) -> Result<usize> {
    let mut zip = ZipArchive::new(Cursor::new(archive))?;
    let mut rejected = Vec::new();
    let mut files_extracted = 0usize;

    for i in 0..zip.len() {
        let mut file = zip.by_index(i)?;
        let name = file.name().replace('\\', "/");
        let relative = PathBuf::from(&name);

        if relative.as_os_str().is_empty() {
            continue;
        }

        // zip-slip 対策: Normal コンポーネントのみ許容
        let has_unsafe_component = relative
            .components()
            .any(|c| !matches!(c, PathComponent::Normal(_)));
        #[cfg(unix)]
        let is_symlink = file
            .unix_mode()
            .is_some_and(|mode| (mode & 0o170000) == 0o120000);
        #[cfg(not(unix))]
        let is_symlink = false;

        if has_unsafe_component || is_symlink {
            rejected.push(name);
            continue;
        }

        let target = dest.join(&relative);
        if file.is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut out = fs::File::create(&target)?;
            std::io::copy(&mut file, &mut out)?;
            files_extracted += 1;
        }
    }

    if !rejected.is_empty() {
        return Err(GalleryError::InvalidItem(format!(
            "archive contains unsafe entries: {}",
            rejected.join(", ")
        )));
    }

    Ok(files_extracted)
}

#[cfg(test)]
#[path = "provision_test.rs"]
mod tests;
