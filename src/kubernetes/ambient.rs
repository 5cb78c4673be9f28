// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Loading and reifying the operator's own kubeconfig

use crate::error::{ImpError, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::Client;
use std::path::PathBuf;
use tracing::{debug, instrument};

/// The operator's kubeconfig together with its resolved current context.
#[derive(Debug, Clone)]
pub struct AmbientConfig {
    kubeconfig: Kubeconfig,
    context_name: String,
    cluster_name: String,
    server: String,
    namespace: Option<String>,
}

impl AmbientConfig {
    /// Read and merge the kubeconfig files, first file wins on conflicts.
    #[instrument]
    pub fn load(paths: &[PathBuf]) -> Result<Self> {
        let mut merged: Option<Kubeconfig> = None;

        for path in paths {
            let next = Kubeconfig::read_from(path).map_err(|e| ImpError::ConfigLoad {
                message: format!("Unable to load kubeconfig file at path {}", path.display()),
                source: Some(e),
            })?;
            debug!("Loaded kubeconfig from {}", path.display());

            merged = Some(match merged {
                Some(current) => current.merge(next).map_err(|e| ImpError::ConfigLoad {
                    message: format!("Unable to merge kubeconfig file at path {}", path.display()),
                    source: Some(e),
                })?,
                None => next,
            });
        }

        let kubeconfig = merged.ok_or_else(|| ImpError::ConfigLoad {
            message: "Unable to resolve kubeconfig path".to_string(),
            source: None,
        })?;

        Self::from_kubeconfig(kubeconfig)
    }

    /// Resolve the current context, its cluster and the cluster's server.
    pub fn from_kubeconfig(kubeconfig: Kubeconfig) -> Result<Self> {
        let context_name = kubeconfig
            .current_context
            .clone()
            .filter(|c| !c.is_empty())
            .ok_or_else(|| ImpError::client_build("kubeconfig has no current context"))?;

        let context = kubeconfig
            .contexts
            .iter()
            .find(|c| c.name == context_name)
            .and_then(|c| c.context.as_ref())
            .ok_or_else(|| {
                ImpError::client_build(format!("context '{}' not found in kubeconfig", context_name))
            })?;

        let cluster_name = context.cluster.clone();
        let server = kubeconfig
            .clusters
            .iter()
            .find(|c| c.name == cluster_name)
            .and_then(|c| c.cluster.as_ref())
            .ok_or_else(|| {
                ImpError::client_build(format!("cluster '{}' not found in kubeconfig", cluster_name))
            })?
            .server
            .clone()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                ImpError::client_build(format!("cluster '{}' has no server", cluster_name))
            })?;
        let namespace = context.namespace.clone();

        debug!(
            "Current context '{}' points at cluster '{}' ({})",
            context_name, cluster_name, server
        );

        Ok(AmbientConfig {
            kubeconfig,
            context_name,
            cluster_name,
            server,
            namespace,
        })
    }

    pub fn context_name(&self) -> &str {
        &self.context_name
    }

    pub fn cluster_name(&self) -> &str {
        &self.cluster_name
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    /// Build a client authenticated as the operator
    #[instrument(skip(self), fields(context = %self.context_name))]
    pub async fn client(&self) -> Result<Client> {
        let client_config =
            kube::Config::from_custom_kubeconfig(self.kubeconfig.clone(), &KubeConfigOptions::default())
                .await
                .map_err(|e| ImpError::ClientBuild {
                    message: "Failed to create config".to_string(),
                    source: Some(Box::new(e)),
                })?;

        Client::try_from(client_config).map_err(|e| ImpError::ClientBuild {
            message: "Failed to create client".to_string(),
            source: Some(Box::new(e)),
        })
    }

    /// Explicit override first, then the current context's namespace.
    pub fn resolve_namespace(&self, namespace_override: Option<&str>) -> Result<String> {
        namespace_override
            .filter(|ns| !ns.is_empty())
            .or(self.namespace.as_deref().filter(|ns| !ns.is_empty()))
            .map(str::to_string)
            .ok_or_else(|| ImpError::NamespaceResolution {
                context: self.context_name.clone(),
            })
    }
}
