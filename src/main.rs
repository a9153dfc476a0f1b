//! batchdesk - training-batch administration from the command line

#![allow(missing_docs)]

use anyhow::Context;
use batchdesk::cli::Cli;
use batchdesk::utils::init_logging;
use clap::Parser;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_format());

    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            // Alternate form prints the whole context chain
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<bool> {
    cli.run().await.context("batchdesk command failed")
}
