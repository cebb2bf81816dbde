#[macro_use]
extern crate log;

mod cli;

use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();
    cli::run(cli::Args::parse()).await
}
