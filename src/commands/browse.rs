//! sgal browse コマンド
//!
//! ターミナル上でカテゴリツリーを閲覧し、サンプルを実行する。

use crate::config::GalleryConfig;
use crate::sample::SampleContext;
use crate::tui;
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {
    /// Start with the search box pre-filled
    #[arg(long)]
    pub filter: Option<String>,
}

pub async fn run(args: Args) -> Result<(), String> {
    let config = GalleryConfig::load().map_err(|e| e.to_string())?;
    let catalog = super::load_catalog();
    let ctx = SampleContext::new(&config.data_dir);

    tui::run_gallery(catalog, ctx, args.filter.as_deref())
        .map_err(|e| format!("Terminal error: {}", e))
}
