// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Persisting credential bundles below the temp directory

use crate::constants::storage::{APP_DIR, KUBECONFIG_DIR};
use crate::credentials::CredentialBundle;
use crate::error::{ImpError, Result};
use std::io::Write;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, instrument};

/// `<temp_root>/kubectl-imp/kubeconfig/<cluster_name>`.
/// Root, prefix and `.`/`..` components of the cluster name are dropped so the
/// file always stays below the kubeconfig directory.
pub fn kubeconfig_path(temp_root: &Path, cluster_name: &str) -> PathBuf {
    let mut path = temp_root.join(APP_DIR).join(KUBECONFIG_DIR);
    path.extend(
        Path::new(cluster_name)
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part),
                _ => None,
            }),
    );
    path
}

/// Write the bundle as a kubeconfig file, replacing any previous file for the
/// same cluster, and return its path.
#[instrument(skip(bundle), fields(cluster = %bundle.cluster_name()))]
pub fn persist(bundle: &CredentialBundle, temp_root: &Path) -> Result<PathBuf> {
    let path = kubeconfig_path(temp_root, bundle.cluster_name());
    let storage_error = |source: std::io::Error| ImpError::Storage {
        path: path.clone(),
        source,
    };

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(storage_error)?;
    }

    let yaml = bundle
        .to_kubeconfig()
        .map_err(|e| storage_error(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))?
        .to_yaml()
        .map_err(|e| storage_error(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))?;

    let mut options = std::fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(&path).map_err(storage_error)?;
    file.write_all(yaml.as_bytes()).map_err(storage_error)?;

    debug!("Wrote kubeconfig to {}", path.display());
    Ok(path)
}
