// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The kubeconfig file written for the subcommand.
//!
//! It always holds exactly one cluster, one context and one user, all sharing
//! the cluster's name, with the current context pointing at that context.

use base64::Engine;
use serde::{Deserialize, Serialize};

// region: Cluster
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct ClusterSpec {
    pub server: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_authority_data: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    pub name: String,
    pub cluster: ClusterSpec,
}
// endregion

// region: Context
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ContextSpec {
    pub cluster: String,
    pub user: String,
    pub namespace: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Context {
    pub name: String,
    pub context: ContextSpec,
}
// endregion

// region: User
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct UserSpec {
    pub token: String,
}

impl std::fmt::Debug for UserSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserSpec").field("token", &"<redacted>").finish()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub user: UserSpec,
}
// endregion

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct Kubeconfig {
    #[serde(rename = "apiVersion")]
    pub api_version: String,
    pub kind: String,
    pub clusters: Vec<Cluster>,
    pub contexts: Vec<Context>,
    pub users: Vec<User>,
    pub current_context: String,
    pub preferences: serde_yaml::Mapping,
}

impl Kubeconfig {
    /// Build a kubeconfig with a single cluster, context and user named `name`.
    /// Empty CA data is left out so clients fall back to the system roots.
    pub fn single(name: &str, server: &str, ca_data: &[u8], namespace: &str, token: &str) -> Self {
        let certificate_authority_data = (!ca_data.is_empty())
            .then(|| base64::engine::general_purpose::STANDARD.encode(ca_data));

        Kubeconfig {
            api_version: "v1".to_string(),
            kind: "Config".to_string(),
            clusters: vec![Cluster {
                name: name.to_string(),
                cluster: ClusterSpec {
                    server: server.to_string(),
                    certificate_authority_data,
                },
            }],
            contexts: vec![Context {
                name: name.to_string(),
                context: ContextSpec {
                    cluster: name.to_string(),
                    user: name.to_string(),
                    namespace: namespace.to_string(),
                },
            }],
            users: vec![User {
                name: name.to_string(),
                user: UserSpec {
                    token: token.to_string(),
                },
            }],
            current_context: name.to_string(),
            preferences: serde_yaml::Mapping::new(),
        }
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_consistent(kubeconfig: &Kubeconfig, name: &str) {
        assert_eq!(kubeconfig.clusters.len(), 1);
        assert_eq!(kubeconfig.contexts.len(), 1);
        assert_eq!(kubeconfig.users.len(), 1);
        assert_eq!(kubeconfig.current_context, name);
        assert_eq!(kubeconfig.clusters[0].name, name);
        assert_eq!(kubeconfig.contexts[0].name, name);
        assert_eq!(kubeconfig.contexts[0].context.cluster, name);
        assert_eq!(kubeconfig.contexts[0].context.user, name);
        assert_eq!(kubeconfig.users[0].name, name);
    }

    #[test]
    fn test_single_names_are_consistent() {
        for name in ["c1", "gke_project_europe-west1_prod", "arn:aws:eks:eu-west-1:1234:cluster/x"] {
            let kubeconfig = Kubeconfig::single(name, "https://x", b"", "ns1", "T");
            assert_consistent(&kubeconfig, name);
        }
    }

    #[test]
    fn test_single_omits_empty_ca() {
        let kubeconfig = Kubeconfig::single("c1", "https://x", b"", "ns1", "T");

        assert_eq!(kubeconfig.clusters[0].cluster.certificate_authority_data, None);
        assert!(!kubeconfig.to_yaml().unwrap().contains("certificate-authority-data"));
    }

    #[test]
    fn test_yaml_layout() {
        let yaml = Kubeconfig::single("c1", "https://x", b"CA", "ns1", "T")
            .to_yaml()
            .unwrap();

        let value: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(value["apiVersion"], "v1");
        assert_eq!(value["kind"], "Config");
        assert_eq!(value["current-context"], "c1");
        assert_eq!(value["clusters"][0]["cluster"]["server"], "https://x");
        assert_eq!(value["clusters"][0]["cluster"]["certificate-authority-data"], "Q0E=");
        assert_eq!(value["contexts"][0]["context"]["namespace"], "ns1");
        assert_eq!(value["users"][0]["user"]["token"], "T");
    }

    #[test]
    fn test_yaml_is_readable_by_kube() {
        let yaml = Kubeconfig::single("c1", "https://x", b"CA", "ns1", "T")
            .to_yaml()
            .unwrap();

        let parsed: kube::config::Kubeconfig = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(parsed.current_context.as_deref(), Some("c1"));
        assert_eq!(parsed.clusters.len(), 1);
        assert_eq!(
            parsed.clusters[0].cluster.as_ref().unwrap().server.as_deref(),
            Some("https://x")
        );
        assert_eq!(parsed.contexts[0].context.as_ref().unwrap().namespace.as_deref(), Some("ns1"));
        assert_eq!(parsed.auth_infos[0].name, "c1");
    }

    #[test]
    fn test_debug_redacts_token() {
        let kubeconfig = Kubeconfig::single("c1", "https://x", b"", "ns1", "s3cr3t");

        assert!(!format!("{:?}", kubeconfig).contains("s3cr3t"));
    }
}
