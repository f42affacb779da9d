//! CCM CLI - Command line tool for the COVID case map dataset.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "ccm-cli",
    version,
    about = "COVID-19 case map data toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: ccm_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    ccm_cmd::run(cli.command).await
}
