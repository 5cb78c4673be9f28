// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::credentials::kubeconfig::Kubeconfig;
use std::fmt;
use std::string::FromUtf8Error;

/// Everything needed to talk to one cluster as one ServiceAccount.
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialBundle {
    cluster_name: String,
    server: String,
    ca_data: Vec<u8>,
    namespace: String,
    token: Vec<u8>,
}

impl CredentialBundle {
    pub fn new(
        cluster_name: impl Into<String>,
        server: impl Into<String>,
        ca_data: Vec<u8>,
        namespace: impl Into<String>,
        token: Vec<u8>,
    ) -> Self {
        Self {
            cluster_name: cluster_name.into(),
            server: server.into(),
            ca_data,
            namespace: namespace.into(),
            token,
        }
    }

    /// Name of the source cluster, also used for the context and the user
    pub fn cluster_name(&self) -> &str {
        &self.cluster_name
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    pub fn ca_data(&self) -> &[u8] {
        &self.ca_data
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn token(&self) -> &[u8] {
        &self.token
    }

    /// Render the kubeconfig file. Fails when the token is not valid UTF-8,
    /// the token is never rewritten.
    pub fn to_kubeconfig(&self) -> Result<Kubeconfig, FromUtf8Error> {
        let token = String::from_utf8(self.token.clone())?;

        Ok(Kubeconfig::single(
            &self.cluster_name,
            &self.server,
            &self.ca_data,
            &self.namespace,
            &token,
        ))
    }
}

impl fmt::Debug for CredentialBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialBundle")
            .field("cluster_name", &self.cluster_name)
            .field("server", &self.server)
            .field("ca_data", &format_args!("<{} bytes>", self.ca_data.len()))
            .field("namespace", &self.namespace)
            .field("token", &"<redacted>")
            .finish()
    }
}
