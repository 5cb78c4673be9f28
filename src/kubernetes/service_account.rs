// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! ServiceAccount and token Secret lookup

use crate::constants::secret_keys;
use crate::error::{ImpError, Result};
use k8s_openapi::api::core::v1::{Secret, ServiceAccount};
use kube::{Api, Client};
use tracing::{debug, instrument};

/// Get a ServiceAccount, any API failure is a lookup error
#[instrument(skip(client))]
pub async fn get_service_account(
    client: &Client,
    namespace: &str,
    name: &str,
) -> Result<ServiceAccount> {
    let service_accounts: Api<ServiceAccount> = Api::namespaced(client.clone(), namespace);

    service_accounts
        .get(name)
        .await
        .map_err(|e| ImpError::ServiceAccountLookup {
            namespace: namespace.to_string(),
            name: name.to_string(),
            source: e,
        })
}

/// Name of the first secret referenced by the ServiceAccount.
/// Only the first reference is considered, even when there are more.
pub fn first_secret_name(service_account: &ServiceAccount) -> Result<String> {
    service_account
        .secrets
        .as_ref()
        .and_then(|secrets| secrets.first())
        .and_then(|secret| secret.name.clone())
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ImpError::NoSecret {
            namespace: service_account.metadata.namespace.clone().unwrap_or_default(),
            name: service_account.metadata.name.clone().unwrap_or_default(),
        })
}

#[instrument(skip(client))]
pub async fn get_secret(client: &Client, namespace: &str, name: &str) -> Result<Secret> {
    let secrets: Api<Secret> = Api::namespaced(client.clone(), namespace);

    let secret = secrets
        .get(name)
        .await
        .map_err(|e| ImpError::SecretFetch {
            namespace: namespace.to_string(),
            name: name.to_string(),
            source: e,
        })?;

    debug!(
        "Fetched secret {}/{} with {} data keys",
        namespace,
        name,
        secret.data.as_ref().map_or(0, |d| d.len())
    );

    Ok(secret)
}

/// Extract the `token` and `ca.crt` bytes. Missing keys yield empty bytes.
pub fn token_fields(secret: &Secret) -> (Vec<u8>, Vec<u8>) {
    let field = |key: &str| {
        secret
            .data
            .as_ref()
            .and_then(|d| d.get(key))
            .map(|v| v.0.clone())
            .unwrap_or_default()
    };

    (field(secret_keys::TOKEN), field(secret_keys::CA_CRT))
}
