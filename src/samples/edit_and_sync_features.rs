//! Edit And Sync Features サンプル
//!
//! 事前にダウンロードしたオフラインデータを参照する。

use crate::catalog::SampleCandidate;
use crate::data::MARKER_FILE;
use crate::error::{GalleryError, Result};
use crate::sample::{SampleContext, SampleFactory, SampleMetadata, SampleView};
use walkdir::WalkDir;

const NAMESPACE: &str = "samples::Data";
const NAME: &str = "Edit And Sync Features";

/// タイルパッケージのデータアイテム
pub const OFFLINE_ITEM_ID: &str = "3f1bbf0ec70b409a975f5c91f363fe7d";

pub fn candidate() -> SampleCandidate {
    SampleCandidate::new(NAMESPACE, SampleFactory::of::<EditAndSyncFeatures>())
        .with_metadata(
            SampleMetadata::new(
                NAME,
                "Synchronize offline edits with a feature service.",
                "The downloaded basemap package is opened from local storage and its \
                 contents are listed before a sync job would run.",
            )
            .with_tags(["Data", "feature service", "offline", "sync", "tile package"]),
        )
        .with_offline_data([OFFLINE_ITEM_ID])
        .with_path(file!())
        .with_image("edit_and_sync_features.jpg")
}

#[derive(Debug, Default)]
pub struct EditAndSyncFeatures;

impl SampleView for EditAndSyncFeatures {
    fn title(&self) -> &str {
        NAME
    }

    fn render(&self, ctx: &SampleContext) -> Result<Vec<String>> {
        let item_dir = ctx.item_dir(OFFLINE_ITEM_ID);
        if !item_dir.is_dir() {
            return Err(GalleryError::Activation {
                sample: NAME.to_string(),
                message: format!("offline data not found at {}", item_dir.display()),
            });
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&item_dir).sort_by_file_name() {
            let entry = entry.map_err(|e| GalleryError::Io(e.into()))?;
            if !entry.file_type().is_file() || entry.file_name() == MARKER_FILE {
                continue;
            }
            let relative = entry.path().strip_prefix(&item_dir).unwrap_or(entry.path());
            let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
            files.push(format!("  {} ({} bytes)", relative.display(), size));
        }

        let mut lines = vec![
            format!("Offline data: {}", item_dir.display()),
            format!("Files: {}", files.len()),
        ];
        lines.extend(files);
        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_render_without_data_is_activation_error() {
        let temp = TempDir::new().unwrap();
        let ctx = SampleContext::new(temp.path());

        let err = EditAndSyncFeatures.render(&ctx).unwrap_err();

        assert!(matches!(err, GalleryError::Activation { .. }));
        assert!(err.to_string().contains("offline data not found"));
    }

    #[test]
    fn test_render_lists_files_without_marker() {
        let temp = TempDir::new().unwrap();
        let item_dir = temp.path().join(OFFLINE_ITEM_ID);
        fs::create_dir_all(item_dir.join("tiles")).unwrap();
        fs::write(item_dir.join(MARKER_FILE), "2026-01-01T00:00:00Z").unwrap();
        fs::write(item_dir.join("SanFrancisco.tpkx"), b"12345").unwrap();
        fs::write(item_dir.join("tiles").join("0.bin"), b"ab").unwrap();

        let lines = EditAndSyncFeatures
            .render(&SampleContext::new(temp.path()))
            .unwrap();

        assert_eq!(lines[1], "Files: 2");
        assert!(lines.iter().any(|l| l.contains("SanFrancisco.tpkx (5 bytes)")));
        assert!(!lines.iter().any(|l| l.contains(MARKER_FILE)));
    }
}
