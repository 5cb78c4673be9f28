// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImpError {
    #[error("Unable to load kubeconfig: {message}")]
    ConfigLoad {
        message: String,
        #[source]
        source: Option<kube::config::KubeconfigError>,
    },

    #[error("Unable to create Kubernetes client: {message}")]
    ClientBuild {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Unable to resolve namespace: no --namespace given and context '{context}' has no default namespace")]
    NamespaceResolution { context: String },

    #[error("Unable to get service account {namespace}/{name}")]
    ServiceAccountLookup {
        namespace: String,
        name: String,
        #[source]
        source: kube::Error,
    },

    #[error("Service account {namespace}/{name} does not have any secrets")]
    NoSecret { namespace: String, name: String },

    #[error("Unable to get secret {namespace}/{name}")]
    SecretFetch {
        namespace: String,
        name: String,
        #[source]
        source: kube::Error,
    },

    #[error("Failed writing kubeconfig to {}", path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The shell could not be started. Kept apart from the fatal errors above
    /// only so the binary can exit with 127 like a shell does for a missing
    /// command; once the child runs, its own exit code is the result.
    #[error("Failed to start '{shell}'")]
    Spawn {
        shell: String,
        #[source]
        source: std::io::Error,
    },
}

impl ImpError {
    pub(crate) fn client_build(message: impl Into<String>) -> Self {
        ImpError::ClientBuild {
            message: message.into(),
            source: None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ImpError>;
