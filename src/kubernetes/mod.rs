// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for ambient kubeconfig handling and ServiceAccount token lookup.

pub mod ambient;
pub mod service_account;

pub use ambient::AmbientConfig;
pub use service_account::{first_secret_name, get_secret, get_service_account, token_fields};
