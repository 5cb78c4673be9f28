// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use clap::Parser;

/// Impersonates a service account
#[derive(Debug, Parser)]
#[command(
    name = "kubectl-imp",
    version,
    after_help = "Examples:\n  kubectl imp r2d2 -- kubectl get pods\n  kubectl imp c3po -n rebel -- kubectl delete deploy --all"
)]
pub struct Cli {
    /// Namespace of Service Account
    #[arg(short, long)]
    pub namespace: Option<String>,

    /// Service account to run the command as
    pub service_account: String,

    /// Command to run, with its arguments
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}
