// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Environment variables read by kubectl-imp
pub mod env {
    /// Location(s) of the ambient kubeconfig, rewritten for the child process
    pub const KUBECONFIG: &str = "KUBECONFIG";
    /// Shell used to run the subcommand
    pub const SHELL: &str = "SHELL";
    /// Log filter directives for the tracing subscriber
    pub const LOG_FILTER: &str = "KUBECTL_IMP_LOG";
}

/// Shell used when `SHELL` is not set
pub const DEFAULT_SHELL: &str = "sh";

/// Default log filter when `KUBECTL_IMP_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Kubeconfig location relative to the home directory
pub mod kubeconfig {
    pub const DIR: &str = ".kube";
    pub const FILE: &str = "config";
}

/// Layout of the generated kubeconfig files below the OS temp directory
pub mod storage {
    pub const APP_DIR: &str = "kubectl-imp";
    pub const KUBECONFIG_DIR: &str = "kubeconfig";
}

/// Data keys of a `kubernetes.io/service-account-token` secret
pub mod secret_keys {
    pub const TOKEN: &str = "token";
    pub const CA_CRT: &str = "ca.crt";
}
