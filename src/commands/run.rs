//! sgal run コマンド
//!
//! 必要なオフラインデータを準備してからサンプルを生成し、描画結果を表示する。

use crate::catalog::activate;
use crate::config::GalleryConfig;
use crate::data::{DataProvisioner, PortalClient};
use crate::output::ProvisionSummary;
use crate::sample::{SampleContext, SampleDescriptor};
use clap::Parser;
use owo_colors::OwoColorize;
use std::sync::Arc;

#[derive(Debug, Parser)]
pub struct Args {
    /// サンプル名（Category/Name 形式も可）
    pub name: String,

    /// Skip downloading offline data
    #[arg(long)]
    pub skip_data: bool,
}

pub async fn run(args: Args) -> Result<(), String> {
    let config = GalleryConfig::load().map_err(|e| e.to_string())?;
    let catalog = super::load_catalog();
    let sample = catalog.find(&args.name).map_err(|e| e.to_string())?;

    if sample.has_offline_data() && !args.skip_data {
        provision(&config, sample).await?;
    }

    let ctx = SampleContext::new(&config.data_dir);
    for line in render_sample(sample, &ctx)? {
        println!("{line}");
    }

    Ok(())
}

async fn provision(config: &GalleryConfig, sample: &SampleDescriptor) -> Result<(), String> {
    println!("Preparing offline data for {}...", sample.name().bold());

    let provisioner = DataProvisioner::new(Arc::new(PortalClient::new(config)), &config.data_dir);
    let report = provisioner
        .ensure_sample_data(sample)
        .await
        .map_err(|e| e.to_string())?;

    let summary = ProvisionSummary::format(&report);
    println!("{} {}", summary.prefix, summary.message);
    Ok(())
}

/// サンプルを生成して描画する
///
/// 生成・描画のエラーはそのまま呼び出し元へ返す。
fn render_sample(sample: &SampleDescriptor, ctx: &SampleContext) -> Result<Vec<String>, String> {
    let view = activate(sample).map_err(|e| e.to_string())?;
    let body = view.render(ctx).map_err(|e| e.to_string())?;

    let title = view.title().to_string();
    let mut lines = vec![title.bold().to_string(), "=".repeat(title.chars().count())];
    lines.extend(body);
    Ok(lines)
}
