// SPDX-FileCopyrightText: 2026 Voxline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Voice-agent adapter trait for telephony provider integrations.

use async_trait::async_trait;

use crate::error::VoxlineError;
use crate::traits::adapter::PluginAdapter;
use crate::types::{
    AdapterMode, AgentCallStats, AgentConfig, CallLogEntry, FlowConfig, KnowledgeEntry,
};

/// Adapter for provisioning AI voice agents on a telephony provider.
///
/// Every operation is a single independent request/response exchange. The
/// only persistent state is the operating mode, fixed for the adapter
/// instance's lifetime: in [`AdapterMode::Mock`] no operation performs
/// network I/O.
#[async_trait]
pub trait VoiceAgentAdapter: PluginAdapter {
    /// The operating mode selected at construction.
    fn mode(&self) -> AdapterMode;

    /// Creates the agent on the provider and returns its assigned numeric id.
    async fn sync_agent(&self, agent: &AgentConfig) -> Result<u64, VoxlineError>;

    /// Updates a previously synced agent. Fire-and-forget: a provider failure
    /// is logged and reported as `false`, with no reconciliation for stale ids.
    async fn update_agent(
        &self,
        provider_id: u64,
        agent: &AgentConfig,
    ) -> Result<bool, VoxlineError>;

    /// Deletes a previously synced agent. Fire-and-forget like [`update_agent`].
    ///
    /// [`update_agent`]: VoiceAgentAdapter::update_agent
    async fn delete_agent(&self, provider_id: u64) -> Result<bool, VoxlineError>;

    /// Publishes a call-flow graph as a provider IVR tree and returns its id.
    async fn publish_flow(&self, name: &str, flow: &FlowConfig) -> Result<u64, VoxlineError>;

    /// Creates a provider-side knowledge store and returns its id.
    async fn create_knowledge_store(
        &self,
        name: &str,
        description: &str,
    ) -> Result<u64, VoxlineError>;

    /// Pushes a batch of entries to a knowledge store (content and metadata
    /// only; embeddings are dropped). No diffing against earlier pushes.
    async fn push_knowledge_entries(
        &self,
        store_id: u64,
        entries: &[KnowledgeEntry],
    ) -> Result<bool, VoxlineError>;

    /// Deletes a whole knowledge store by id. No existence check: an id that
    /// was never created follows the same success path as a real delete.
    async fn delete_knowledge_store(&self, store_id: u64) -> Result<bool, VoxlineError>;

    /// Associates a DID phone number with an agent's provider id.
    async fn assign_did(&self, did_id: &str, provider_id: u64) -> Result<bool, VoxlineError>;

    /// Retrieves aggregated call statistics for an agent.
    async fn agent_call_stats(&self, provider_id: u64) -> Result<AgentCallStats, VoxlineError>;

    /// Retrieves recent call detail records for an agent.
    async fn agent_call_logs(
        &self,
        provider_id: u64,
    ) -> Result<Vec<CallLogEntry>, VoxlineError>;
}
