// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{env as env_vars, kubeconfig, DEFAULT_SHELL};
use crate::error::{ImpError, Result};
use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

/// Runtime configuration captured from the process environment at startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Ambient kubeconfig files, in merge order
    pub kubeconfig_paths: Vec<PathBuf>,
    /// Shell that runs the subcommand via `-c`
    pub shell: String,
    /// Root below which generated kubeconfigs are stored
    pub temp_root: PathBuf,
    /// Snapshot of the parent environment the child environment is derived from
    pub environment: Vec<(OsString, OsString)>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let kubeconfig_paths =
            kubeconfig_paths(env::var_os(env_vars::KUBECONFIG), dirs::home_dir())?;
        // An empty SHELL is treated like an unset one, `-c` needs a real program
        let shell = env::var(env_vars::SHELL)
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_SHELL.to_string());

        Ok(Config {
            kubeconfig_paths,
            shell,
            temp_root: env::temp_dir(),
            environment: env::vars_os().collect(),
        })
    }
}

/// Resolve the ambient kubeconfig locations: every entry of `KUBECONFIG`,
/// or `<home>/.kube/config` when it is unset or empty.
fn kubeconfig_paths(
    kubeconfig_var: Option<OsString>,
    home: Option<PathBuf>,
) -> Result<Vec<PathBuf>> {
    let from_var: Vec<PathBuf> = kubeconfig_var
        .as_deref()
        .map(|v| {
            env::split_paths(v)
                .filter(|p| !p.as_os_str().is_empty())
                .collect()
        })
        .unwrap_or_default();

    if !from_var.is_empty() {
        return Ok(from_var);
    }

    match home {
        Some(home) => Ok(vec![home.join(kubeconfig::DIR).join(kubeconfig::FILE)]),
        None => Err(ImpError::ConfigLoad {
            message: "Unable to resolve kubeconfig path: KUBECONFIG is not set and no home directory was found".to_string(),
            source: None,
        }),
    }
}
