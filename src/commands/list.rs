//! sgal list コマンド
//!
//! 同梱サンプルの一覧をカテゴリ → 名前順で表示する。

use crate::sample::SampleDescriptor;
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};
use std::sync::Arc;

#[derive(Debug, Parser)]
pub struct Args {
    /// Filter by category (case-insensitive)
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// Output in JSON format
    #[arg(long, conflicts_with = "simple")]
    pub json: bool,

    /// Output only qualified sample names (Category/Name)
    #[arg(long, conflicts_with = "json")]
    pub simple: bool,
}

pub async fn run(args: Args) -> Result<(), String> {
    let catalog = super::load_catalog();
    let total_count = catalog.len();

    let filtered = filter_by_category(catalog.samples(), args.category.as_deref());

    if args.json {
        print_json(&filtered)?;
    } else if args.simple {
        print_simple(&filtered, total_count);
    } else {
        print_table(&filtered, total_count);
    }

    Ok(())
}

fn filter_by_category<'a>(
    samples: &'a [Arc<SampleDescriptor>],
    category: Option<&str>,
) -> Vec<&'a Arc<SampleDescriptor>> {
    samples
        .iter()
        .filter(|s| match category {
            None => true,
            Some(c) => s.category().eq_ignore_ascii_case(c.trim()),
        })
        .collect()
}

fn print_empty(total_count: usize) {
    if total_count == 0 {
        println!("No samples registered");
    } else {
        println!("No samples matched");
    }
}

fn print_table(samples: &[&Arc<SampleDescriptor>], total_count: usize) {
    if samples.is_empty() {
        print_empty(total_count);
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Category", "Name", "Description", "Offline Data"]);

    for sample in samples {
        let offline = if sample.has_offline_data() {
            sample.offline_data_ids().len().to_string()
        } else {
            "-".to_string()
        };
        table.add_row(vec![
            sample.category(),
            sample.name(),
            sample.description(),
            offline.as_str(),
        ]);
    }

    println!("{table}");
    println!("{} sample(s)", samples.len());
}

fn print_json(samples: &[&Arc<SampleDescriptor>]) -> Result<(), String> {
    // 空の場合も [] を出力
    serde_json::to_string_pretty(samples)
        .map(|json| println!("{json}"))
        .map_err(|e| format!("Failed to serialize samples: {}", e))
}

fn print_simple(samples: &[&Arc<SampleDescriptor>], total_count: usize) {
    if samples.is_empty() {
        print_empty(total_count);
        return;
    }
    for sample in samples {
        println!("{}", sample.qualified_name());
    }
}

#[cfg(test)]
#[path = "list_test.rs"]
mod tests;
