// SPDX-FileCopyrightText: 2026 Voxline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Customer-portal API request/response types.
//!
//! Wire structs follow the provider's snake_case JSON; conversions into the
//! application's camelCase-serialized DTOs live next to them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use voxline_core::types::{AgentCallStats, AgentConfig, CallLogEntry, KnowledgeEntry};

// --- Authentication ---

/// Response of `POST auth/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for subsequent calls.
    pub token: String,
}

// --- Generic responses ---

/// A provider-assigned id returned by create endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedResource {
    pub id: u64,
}

/// Acknowledgement of a mutating call.
///
/// Some portal endpoints reply with a bare 200 and no body fields, so
/// `success` defaults to true.
#[derive(Debug, Clone, Deserialize)]
pub struct AckResponse {
    #[serde(default = "default_true")]
    pub success: bool,
}

fn default_true() -> bool {
    true
}

// --- Agents ---

/// Provider-side agent shape sent on create and update.
#[derive(Debug, Clone, Serialize)]
pub struct AgentPayload {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub provider: String,
    pub model: String,
    pub voice: String,
    pub language: String,
    pub greeting: String,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub knowledge_store_id: Option<u64>,
    /// Maximum call duration in seconds.
    pub max_call_duration: u32,
    pub recording: bool,
    pub transcription: bool,
}

impl AgentPayload {
    /// Maps a local agent into the provider shape.
    ///
    /// `provider` and `model` are fixed per deployment; the local duration is
    /// kept in minutes and converted here.
    pub fn from_agent(agent: &AgentConfig, provider: &str, model: &str) -> Self {
        Self {
            name: agent.name.clone(),
            kind: agent.kind.to_string(),
            provider: provider.to_string(),
            model: model.to_string(),
            voice: agent.voice.clone(),
            language: agent.language.clone(),
            greeting: agent.greeting.clone(),
            prompt: agent.system_prompt.clone(),
            knowledge_store_id: agent.knowledge_store_id,
            max_call_duration: agent.max_call_duration_mins * 60,
            recording: agent.recording,
            transcription: agent.transcription,
        }
    }
}

// --- IVR ---

/// A published IVR tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IvrTree {
    pub name: String,
    /// Id of the node answering the call.
    pub entry: String,
    pub nodes: Vec<IvrNode>,
}

/// One node of a published IVR tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IvrNode {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<IvrOption>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branches: Option<IvrBranches>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

/// A digit-keyed menu option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IvrOption {
    pub digit: String,
    pub next: String,
}

/// Branch targets of a conditional node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IvrBranches {
    pub on_true: String,
    pub on_false: String,
}

// --- Knowledge store ---

/// Payload of `POST knowledge/stores`.
#[derive(Debug, Clone, Serialize)]
pub struct KnowledgeStorePayload {
    pub name: String,
    pub description: String,
}

/// One entry of a knowledge batch. Embeddings are local-only and dropped.
#[derive(Debug, Clone, Serialize)]
pub struct KnowledgeEntryPayload {
    pub content: String,
    pub metadata: serde_json::Value,
}

impl From<&KnowledgeEntry> for KnowledgeEntryPayload {
    fn from(entry: &KnowledgeEntry) -> Self {
        Self {
            content: entry.content.clone(),
            metadata: entry.metadata.clone(),
        }
    }
}

/// Payload of `POST knowledge/stores/:id/entries`.
#[derive(Debug, Clone, Serialize)]
pub struct KnowledgeBatchPayload {
    pub entries: Vec<KnowledgeEntryPayload>,
}

// --- DID ---

/// Payload of `PATCH did/:id`.
#[derive(Debug, Clone, Serialize)]
pub struct DidPayload {
    pub agent_id: u64,
}

// --- Stats & call logs ---

/// Provider wire shape of agent call statistics.
#[derive(Debug, Clone, Deserialize)]
pub struct AgentStatsWire {
    #[serde(default)]
    pub total_calls: u64,
    /// Total talk time in seconds.
    #[serde(default)]
    pub total_duration: u64,
    #[serde(default)]
    pub average_duration: u64,
    #[serde(default)]
    pub success_rate: f64,
}

impl From<AgentStatsWire> for AgentCallStats {
    fn from(wire: AgentStatsWire) -> Self {
        Self {
            total_calls: wire.total_calls,
            total_duration_secs: wire.total_duration,
            average_duration_secs: wire.average_duration,
            success_rate: wire.success_rate,
        }
    }
}

/// Provider wire shape of one call detail record.
#[derive(Debug, Clone, Deserialize)]
pub struct CallLogWire {
    pub id: String,
    #[serde(rename = "from")]
    pub from_number: String,
    #[serde(rename = "to")]
    pub to_number: String,
    /// Call duration in seconds.
    #[serde(default)]
    pub duration: u64,
    pub status: String,
    pub started_at: DateTime<Utc>,
    #[serde(default)]
    pub recording_url: Option<String>,
    #[serde(default)]
    pub transcript: Option<String>,
}

impl From<CallLogWire> for CallLogEntry {
    fn from(wire: CallLogWire) -> Self {
        Self {
            id: wire.id,
            from_number: wire.from_number,
            to_number: wire.to_number,
            duration_secs: wire.duration,
            status: wire.status,
            started_at: wire.started_at,
            recording_url: wire.recording_url,
            transcript: wire.transcript,
        }
    }
}

/// Response of `GET voicehub/agents/:id/calls`.
#[derive(Debug, Clone, Deserialize)]
pub struct CallsResponse {
    #[serde(default)]
    pub calls: Vec<CallLogWire>,
}
