mod catalog;
mod cli;
mod commands;
mod config;
mod data;
mod env;
mod error;
mod http;
mod output;
mod sample;
mod samples;
mod tui;

#[cfg(test)]
mod test_support;

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// ログレベル指定用の環境変数
const ENV_LOG: &str = "SGAL_LOG";

fn init_tracing() {
    let filter = EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();
    init_tracing();

    if let Err(err) = commands::dispatch(cli).await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
