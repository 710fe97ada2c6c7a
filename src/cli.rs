use clap::{Parser, Subcommand};

use crate::commands::{browse, info, list, run, search};

#[derive(Debug, Parser)]
#[command(name = "sgal")]
#[command(about = "Sample Gallery CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// サンプル一覧
    #[command(after_help = "OUTPUT FORMATS:
  (default)  Table with category, name, description and offline data
  --json     JSON array of sample descriptors
  --simple   One qualified name (Category/Name) per line")]
    List(list::Args),

    /// サンプルを検索してカテゴリツリーを表示
    #[command(after_help = "MATCHING:
  Case-insensitive substring match on sample name, description and tags.
  Categories without a matching sample are omitted.")]
    Search(search::Args),

    /// サンプルの詳細表示
    #[command(after_help = "SECTIONS DISPLAYED:
  Sample Information  name, category, description, tags
  Offline Data        portal item ids required by the sample
  Source Files        main source path and auxiliary files")]
    Info(info::Args),

    /// オフラインデータを準備してサンプルを実行
    #[command(after_help = "OFFLINE DATA:
  Portal items are downloaded into the data directory before the sample
  starts. Items whose local copy is newer than the portal are skipped.")]
    Run(run::Args),

    /// ターミナルでギャラリーを閲覧
    #[command(after_help = "KEYS:
  Up/Down  move    Enter  open    Left/Right  collapse/expand
  /        search  Esc    back    q           quit")]
    Browse(browse::Args),
}
