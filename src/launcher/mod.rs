// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Runs a subcommand with its `KUBECONFIG` pointing at a synthesized kubeconfig.

pub mod environment;
pub mod storage;

pub use environment::{child_environment, shell_command_line};
pub use storage::{kubeconfig_path, persist};

use crate::config::Config;
use crate::credentials::CredentialBundle;
use crate::error::{ImpError, Result};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;
use tracing::{debug, info, instrument};

pub struct Launcher {
    shell: String,
    temp_root: PathBuf,
    environment: Vec<(OsString, OsString)>,
}

impl Launcher {
    pub fn new(config: &Config) -> Self {
        Self {
            shell: config.shell.clone(),
            temp_root: config.temp_root.clone(),
            environment: config.environment.clone(),
        }
    }

    /// Persist the bundle, run `command` through the shell with the rewritten
    /// environment and wait for it. Returns the child's exit code.
    #[instrument(skip(self, bundle), fields(cluster = %bundle.cluster_name(), shell = %self.shell))]
    pub async fn launch(&self, bundle: &CredentialBundle, command: &[String]) -> Result<i32> {
        let kubeconfig = persist(bundle, &self.temp_root)?;
        let command_line = shell_command_line(command);

        let mut cmd = Command::new(&self.shell);
        cmd.arg("-c")
            .arg(&command_line)
            .env_clear()
            .envs(child_environment(self.environment.iter().cloned(), &kubeconfig))
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        info!("Running '{}' with KUBECONFIG={}", command_line, kubeconfig.display());

        let status = cmd.status().await.map_err(|e| ImpError::Spawn {
            shell: self.shell.clone(),
            source: e,
        })?;

        debug!("Subcommand exited with status: {:?}", status);
        Ok(exit_code(status))
    }
}

/// The child's exit code, or `128 + signal` when it was killed by a signal
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
