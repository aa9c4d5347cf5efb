use clap::Parser;
use punchline::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Check(args) => cli::check::run(args).await,
        Command::Fetch(args) => cli::fetch::run(args).await,
        Command::Transports => cli::transports::run().await,
    }
}
