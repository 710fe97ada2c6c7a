//! sgal info コマンド
//!
//! サンプルの詳細情報を表示する。

use crate::sample::{AuxiliaryFileKind, SampleDescriptor};
use clap::{Parser, ValueEnum};
use comfy_table::{presets::UTF8_FULL, Table};

/// 出力形式
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

#[derive(Debug, Parser)]
pub struct Args {
    /// サンプル名（Category/Name 形式も可）
    pub name: String,

    /// 出力形式
    #[arg(long, short = 'f', value_enum, default_value = "table")]
    pub format: OutputFormat,
}

pub async fn run(args: Args) -> Result<(), String> {
    let catalog = super::load_catalog();
    let sample = catalog.find(&args.name).map_err(|e| e.to_string())?;

    match args.format {
        OutputFormat::Table => print_table(sample),
        OutputFormat::Json => print_json(sample)?,
        OutputFormat::Yaml => print_yaml(sample)?,
    }

    Ok(())
}

fn print_table(sample: &SampleDescriptor) {
    println!("Sample Information");
    println!("==================");
    println!();

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Field", "Value"]);

    table.add_row(vec!["Name", sample.name()]);
    table.add_row(vec!["Category", sample.category()]);
    table.add_row(vec!["Description", sample.description()]);
    table.add_row(vec!["Instructions", sample.instructions()]);
    table.add_row(vec!["Tags", &format_list(sample.tags())]);
    table.add_row(vec!["Image", sample.image().unwrap_or("-")]);

    println!("{table}");
    println!();

    println!("Offline Data");
    println!("------------");

    let mut data_table = Table::new();
    data_table.load_preset(UTF8_FULL);
    data_table.set_header(vec!["Item ID"]);
    for id in sample.offline_data_ids() {
        data_table.add_row(vec![id.as_str()]);
    }
    if sample.offline_data_ids().is_empty() {
        data_table.add_row(vec!["none"]);
    }

    println!("{data_table}");
    println!();

    println!("Source Files");
    println!("------------");

    let mut source_table = Table::new();
    source_table.load_preset(UTF8_FULL);
    source_table.set_header(vec!["Type", "Files"]);

    source_table.add_row(vec!["Main", sample.path().unwrap_or("-")]);
    for kind in AuxiliaryFileKind::all() {
        let files = sample.auxiliary_files_of(*kind);
        if !files.is_empty() {
            source_table.add_row(vec![kind.display_name(), &files.join(", ")]);
        }
    }

    println!("{source_table}");
}

fn format_list(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}

fn print_json(sample: &SampleDescriptor) -> Result<(), String> {
    serde_json::to_string_pretty(sample)
        .map(|json| println!("{json}"))
        .map_err(|e| format!("Failed to serialize to JSON: {}", e))
}

fn print_yaml(sample: &SampleDescriptor) -> Result<(), String> {
    serde_yaml::to_string(sample)
        .map(|yaml| print!("{yaml}"))
        .map_err(|e| format!("Failed to serialize to YAML: {}", e))
}
