// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::Context;
use clap::Parser;
use wprime_runner::config::CliArgs;
use wprime_runner::driver::{self, DriverOptions};
use wprime_runner::observability::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliArgs::parse();
    logging::init(&cli.log_level);

    let args = cli.resolve()?;
    let options = DriverOptions {
        processor_command: cli.processor_command.clone(),
        worktree: std::env::current_dir().context("cannot determine working directory")?,
    };

    let outcome = driver::execute(args, &options).await?;
    tracing::info!(
        artifact = %outcome.written.artifact.display(),
        metadata = %outcome.written.metadata.display(),
        "Run finished in {:?}",
        outcome.elapsed
    );
    Ok(())
}
