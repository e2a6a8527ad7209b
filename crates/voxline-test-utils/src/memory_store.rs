// SPDX-FileCopyrightText: 2026 Voxline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory credential store for deterministic testing.

use std::collections::HashMap;

use async_trait::async_trait;
use secrecy::SecretString;

use voxline_core::VoxlineError;
use voxline_core::traits::{CredentialStore, PluginAdapter};
use voxline_core::types::{AdapterType, HealthStatus, IntegrationRecord};

/// A [`CredentialStore`] holding records in memory.
///
/// Supports error injection so the degrade-to-mock path of consuming
/// adapters can be exercised.
#[derive(Default)]
pub struct MemoryCredentialStore {
    records: HashMap<String, IntegrationRecord>,
    fail: bool,
}

impl MemoryCredentialStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a complete, enabled record for `provider`.
    pub fn with_credentials(mut self, provider: &str, username: &str, password: &str) -> Self {
        self.records.insert(
            provider.to_string(),
            IntegrationRecord {
                username: username.to_string(),
                password: SecretString::from(password.to_string()),
                enabled: true,
            },
        );
        self
    }

    /// Adds an arbitrary record for `provider`.
    pub fn with_record(mut self, provider: &str, record: IntegrationRecord) -> Self {
        self.records.insert(provider.to_string(), record);
        self
    }

    /// Creates a store whose lookups always fail.
    pub fn failing() -> Self {
        Self {
            records: HashMap::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl PluginAdapter for MemoryCredentialStore {
    fn name(&self) -> &str {
        "memory-credentials"
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
impl CredentialStore for MemoryCredentialStore {
    async fn integration(
        &self,
        provider: &str,
    ) -> Result<Option<IntegrationRecord>, VoxlineError> {
        if self.fail {
            return Err(VoxlineError::Internal(
                "injected credential store failure".into(),
            ));
        }
        Ok(self.records.get(provider).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_stored_record() {
        let store = MemoryCredentialStore::new().with_credentials("connexcs", "ops", "secret");
        let record = store.integration("connexcs").await.unwrap();
        assert_eq!(record.unwrap().username, "ops");
    }

    #[tokio::test]
    async fn missing_provider_is_none() {
        let store = MemoryCredentialStore::new();
        assert!(store.integration("connexcs").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn failing_store_returns_error() {
        let store = MemoryCredentialStore::failing();
        assert!(store.integration("connexcs").await.is_err());
    }
}
