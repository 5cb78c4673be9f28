// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::env::KUBECONFIG;
use std::ffi::{OsStr, OsString};
use std::path::Path;

/// Derive the child's environment from `parent`: every `KUBECONFIG` entry is
/// dropped and a single one pointing at `kubeconfig_path` is appended.
/// The parent's own environment is never modified.
pub fn child_environment<I>(parent: I, kubeconfig_path: &Path) -> Vec<(OsString, OsString)>
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    let mut env: Vec<(OsString, OsString)> = parent
        .into_iter()
        .filter(|(key, _)| key != OsStr::new(KUBECONFIG))
        .collect();
    env.push((OsString::from(KUBECONFIG), kubeconfig_path.as_os_str().to_owned()));
    env
}

/// Join the command line into the single argument passed to `<shell> -c`
pub fn shell_command_line<S: AsRef<str>>(args: &[S]) -> String {
    args.iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ")
}
