use crate::{pkg::server::listen, prelude::Result};
use clap::{Parser, Subcommand};

mod ping;

#[derive(Parser)]
#[command(about = "job listing service")]
struct Cmd {
    #[command(subcommand)]
    command: Option<SubCommandType>,
}

#[derive(Subcommand)]
enum SubCommandType {
    /// Serve the job listing api
    Listen,
    /// Check that the configured mongodb primary is reachable
    Ping,
}

pub async fn run() -> Result<()> {
    let args = Cmd::parse();
    match args.command {
        Some(SubCommandType::Listen) => {
            listen().await?;
        }
        Some(SubCommandType::Ping) => {
            ping::check().await?;
        }
        None => {
            tracing::error!("no subcommand passed");
        }
    }
    Ok(())
}
