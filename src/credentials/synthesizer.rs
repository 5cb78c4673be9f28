// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Derive a ServiceAccount credential bundle from the operator's credentials.

use crate::config::Config;
use crate::credentials::CredentialBundle;
use crate::error::Result;
use crate::kubernetes::{
    first_secret_name, get_secret, get_service_account, token_fields, AmbientConfig,
};
use kube::Client;
use tracing::{info, instrument};

/// Looks up ServiceAccount tokens through the operator's ambient connection
pub struct Synthesizer {
    ambient: AmbientConfig,
    client: Client,
}

impl Synthesizer {
    pub fn new(ambient: AmbientConfig, client: Client) -> Self {
        Self { ambient, client }
    }

    /// Create a synthesizer with a client built from the ambient kubeconfig
    pub async fn from_ambient(ambient: AmbientConfig) -> Result<Self> {
        let client = ambient.client().await?;
        Ok(Self::new(ambient, client))
    }

    /// Build the credential bundle for `service_account`.
    ///
    /// The namespace is `namespace_override` when non-empty, otherwise the
    /// current context's namespace. The token comes from the first secret
    /// referenced by the ServiceAccount; a missing `token` or `ca.crt` key
    /// results in empty bytes rather than an error.
    #[instrument(skip(self), fields(cluster = %self.ambient.cluster_name()))]
    pub async fn synthesize(
        &self,
        namespace_override: Option<&str>,
        service_account: &str,
    ) -> Result<CredentialBundle> {
        let namespace = self.ambient.resolve_namespace(namespace_override)?;

        let sa = get_service_account(&self.client, &namespace, service_account).await?;
        let secret_name = first_secret_name(&sa)?;
        let secret = get_secret(&self.client, &namespace, &secret_name).await?;
        let (token, ca_data) = token_fields(&secret);

        info!(
            "Using secret {}/{} for service account {}",
            namespace, secret_name, service_account
        );

        Ok(CredentialBundle::new(
            self.ambient.cluster_name(),
            self.ambient.server(),
            ca_data,
            namespace,
            token,
        ))
    }
}

/// Load the ambient kubeconfig, connect, and build the bundle for `service_account`
pub async fn synthesize(
    config: &Config,
    namespace_override: Option<&str>,
    service_account: &str,
) -> Result<CredentialBundle> {
    let ambient = AmbientConfig::load(&config.kubeconfig_paths)?;
    Synthesizer::from_ambient(ambient)
        .await?
        .synthesize(namespace_override, service_account)
        .await
}
