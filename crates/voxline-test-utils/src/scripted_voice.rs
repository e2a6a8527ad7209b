// SPDX-FileCopyrightText: 2026 Voxline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scripted voice adapter for deterministic testing.
//!
//! `ScriptedVoiceAdapter` implements [`VoiceAgentAdapter`] with a FIFO queue
//! of provider ids, enabling tests of application code that provisions
//! agents without touching a real (or even mocked-HTTP) provider.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use voxline_core::VoxlineError;
use voxline_core::traits::{PluginAdapter, VoiceAgentAdapter};
use voxline_core::types::{
    AdapterMode, AdapterType, AgentCallStats, AgentConfig, CallLogEntry, FlowConfig,
    HealthStatus, KnowledgeEntry,
};

/// A voice adapter that returns pre-scripted provider ids.
///
/// Ids are popped from a FIFO queue; when the queue is empty a fixed
/// fallback id is returned. All boolean operations succeed.
pub struct ScriptedVoiceAdapter {
    ids: Arc<Mutex<VecDeque<u64>>>,
}

const FALLBACK_ID: u64 = 9_000;

impl ScriptedVoiceAdapter {
    /// Creates an adapter with an empty id queue.
    pub fn new() -> Self {
        Self {
            ids: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    /// Creates an adapter pre-loaded with the given provider ids.
    pub fn with_ids(ids: Vec<u64>) -> Self {
        Self {
            ids: Arc::new(Mutex::new(VecDeque::from(ids))),
        }
    }

    async fn next_id(&self) -> u64 {
        self.ids.lock().await.pop_front().unwrap_or(FALLBACK_ID)
    }
}

impl Default for ScriptedVoiceAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PluginAdapter for ScriptedVoiceAdapter {
    fn name(&self) -> &str {
        "scripted-voice"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Voice
    }

    async fn health_check(&self) -> Result<HealthStatus, VoxlineError> {
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), VoxlineError> {
        Ok(())
    }
}

#[async_trait]
impl VoiceAgentAdapter for ScriptedVoiceAdapter {
    fn mode(&self) -> AdapterMode {
        AdapterMode::Mock
    }

    async fn sync_agent(&self, _agent: &AgentConfig) -> Result<u64, VoxlineError> {
        Ok(self.next_id().await)
    }

    async fn update_agent(
        &self,
        _provider_id: u64,
        _agent: &AgentConfig,
    ) -> Result<bool, VoxlineError> {
        Ok(true)
    }

    async fn delete_agent(&self, _provider_id: u64) -> Result<bool, VoxlineError> {
        Ok(true)
    }

    async fn publish_flow(
        &self,
        _name: &str,
        flow: &FlowConfig,
    ) -> Result<u64, VoxlineError> {
        if flow.nodes.is_empty() {
            return Err(VoxlineError::Flow("flow graph has no nodes".into()));
        }
        Ok(self.next_id().await)
    }

    async fn create_knowledge_store(
        &self,
        _name: &str,
        _description: &str,
    ) -> Result<u64, VoxlineError> {
        Ok(self.next_id().await)
    }

    async fn push_knowledge_entries(
        &self,
        _store_id: u64,
        _entries: &[KnowledgeEntry],
    ) -> Result<bool, VoxlineError> {
        Ok(true)
    }

    async fn delete_knowledge_store(&self, _store_id: u64) -> Result<bool, VoxlineError> {
        Ok(true)
    }

    async fn assign_did(&self, _did_id: &str, _provider_id: u64) -> Result<bool, VoxlineError> {
        Ok(true)
    }

    async fn agent_call_stats(&self, _provider_id: u64) -> Result<AgentCallStats, VoxlineError> {
        Ok(AgentCallStats {
            total_calls: 12,
            total_duration_secs: 1_440,
            average_duration_secs: 120,
            success_rate: 90.0,
        })
    }

    async fn agent_call_logs(
        &self,
        provider_id: u64,
    ) -> Result<Vec<CallLogEntry>, VoxlineError> {
        Ok(vec![CallLogEntry {
            id: format!("scripted-call-{provider_id}"),
            from_number: "+15550100".into(),
            to_number: "+15550199".into(),
            duration_secs: 60,
            status: "answered".into(),
            started_at: Utc::now(),
            recording_url: None,
            transcript: None,
        }])
    }
}
