//! Petalo storefront CLI

use std::process;

use clap::Parser;
use petalo_app::config::AppConfig;

use crate::cli::Cli;

mod cli;

#[tokio::main]
pub async fn main() {
    AppConfig::load_env();

    let cli = Cli::parse();

    if let Err(error) = cli.run().await {
        eprintln!("{error}");
        process::exit(1);
    }
}
