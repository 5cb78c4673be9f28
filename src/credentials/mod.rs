// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Synthesizing a single-cluster kubeconfig for a ServiceAccount.

pub mod bundle;
pub mod kubeconfig;
pub mod synthesizer;

pub use bundle::CredentialBundle;
pub use kubeconfig::Kubeconfig;
pub use synthesizer::{synthesize, Synthesizer};
