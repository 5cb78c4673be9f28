// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use kubectl_imp::cli::Cli;
use kubectl_imp::config::Config;
use kubectl_imp::constants::{env, DEFAULT_LOG_FILTER};
use kubectl_imp::credentials::synthesize;
use kubectl_imp::error::ImpError;
use kubectl_imp::launcher::Launcher;

/// Exit code when the tool fails before running the subcommand
const EXIT_FATAL: i32 = 1;
/// Exit code when the shell could not be started
const EXIT_SPAWN_FAILED: i32 = 127;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Logs go to stderr so they never mix with the subcommand's output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(env::LOG_FILTER)
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            match e.downcast_ref::<ImpError>() {
                Some(ImpError::Spawn { .. }) => EXIT_SPAWN_FAILED,
                _ => EXIT_FATAL,
            }
        }
    };

    std::process::exit(code)
}

async fn run(cli: Cli) -> Result<i32> {
    let config = Config::from_env()?;

    let bundle = synthesize(&config, cli.namespace.as_deref(), &cli.service_account)
        .await
        .context("Unable to create kubeconfig")?;
    info!(
        "Impersonating {}/{} on cluster {}",
        bundle.namespace(),
        cli.service_account,
        bundle.cluster_name()
    );

    Ok(Launcher::new(&config).launch(&bundle, &cli.command).await?)
}
