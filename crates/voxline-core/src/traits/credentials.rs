// SPDX-FileCopyrightText: 2026 Voxline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Credential store trait for integration credentials.

use async_trait::async_trait;

use crate::error::VoxlineError;
use crate::traits::adapter::PluginAdapter;
use crate::types::IntegrationRecord;

/// Supplies per-provider integration credentials.
///
/// Consulted exactly once when a provider adapter is constructed. A missing
/// record, a disabled record, or a store error all leave the consuming
/// adapter in mock mode; the store is never re-polled afterwards.
#[async_trait]
pub trait CredentialStore: PluginAdapter {
    /// Returns the stored credentials for `provider`, if any are configured.
    async fn integration(
        &self,
        provider: &str,
    ) -> Result<Option<IntegrationRecord>, VoxlineError>;
}
