use crate::catalog::SampleCatalog;
use crate::cli::{Cli, Command};
use crate::samples::BundledSamples;

pub mod browse;
pub mod info;
pub mod list;
pub mod run;
pub mod search;

pub async fn dispatch(cli: Cli) -> Result<(), String> {
    match cli.command {
        Command::List(args) => list::run(args).await,
        Command::Search(args) => search::run(args).await,
        Command::Info(args) => info::run(args).await,
        Command::Run(args) => run::run(args).await,
        Command::Browse(args) => browse::run(args).await,
    }
}

/// 同梱サンプルからカタログを構築
pub(crate) fn load_catalog() -> SampleCatalog {
    SampleCatalog::build(&BundledSamples)
}
