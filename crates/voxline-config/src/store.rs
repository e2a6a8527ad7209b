// SPDX-FileCopyrightText: 2026 Voxline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Config-backed credential store.
//!
//! Serves the `[integrations.*]` sections of `voxline.toml` through the
//! [`CredentialStore`] trait so adapters stay decoupled from where
//! credentials actually live.

use async_trait::async_trait;
use secrecy::SecretString;

use voxline_core::error::VoxlineError;
use voxline_core::traits::{CredentialStore, PluginAdapter};
use voxline_core::types::{AdapterType, HealthStatus, IntegrationRecord};

use crate::model::IntegrationsConfig;

/// [`CredentialStore`] backed by the loaded configuration.
///
/// Missing credential halves are served as empty strings; completeness is
/// the consuming adapter's call to make.
pub struct ConfigCredentialStore {
    integrations: IntegrationsConfig,
}

impl ConfigCredentialStore {
    /// Creates a store serving the given integration sections.
    pub fn new(integrations: IntegrationsConfig) -> Self {
        Self { integrations }
    }
}

#[async_trait]
impl PluginAdapter for ConfigCredentialStore {
    fn name(&self) -> &str {
        "config-credentials"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Credentials
    }

    async fn health_check(&self) -> Result<HealthStatus, VoxlineError> {
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), VoxlineError> {
        Ok(())
    }
}

#[async_trait]
impl CredentialStore for ConfigCredentialStore {
    async fn integration(
        &self,
        provider: &str,
    ) -> Result<Option<IntegrationRecord>, VoxlineError> {
        if provider != "connexcs" {
            return Ok(None);
        }

        let entry = &self.integrations.connexcs;
        if entry.username.is_none() && entry.password.is_none() {
            return Ok(None);
        }

        Ok(Some(IntegrationRecord {
            username: entry.username.clone().unwrap_or_default(),
            password: SecretString::from(entry.password.clone().unwrap_or_default()),
            enabled: entry.enabled,
        }))
    }
}
