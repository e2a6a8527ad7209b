// SPDX-FileCopyrightText: 2026 Voxline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types used across adapter traits and the Voxline platform.
//!
//! The DTOs here are transient: they are owned by the application, mapped into
//! provider-specific shapes on sync, and never cached or versioned by the
//! adapters themselves.

use chrono::{DateTime, Utc};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Health status reported by adapter health checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// Adapter is fully operational.
    Healthy,
    /// Adapter is operational but experiencing issues.
    Degraded(String),
    /// Adapter is not operational.
    Unhealthy(String),
}

/// Identifies the type of adapter in the plugin registry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum AdapterType {
    Voice,
    Credentials,
}

/// Operating mode of a provider-backed adapter, fixed at construction.
///
/// `Mock` means every provider call is answered from the canned catalog and
/// no network I/O happens for the adapter's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AdapterMode {
    Live,
    Mock,
}

/// Integration credentials handed out by a [`CredentialStore`].
///
/// Loaded once at adapter construction; the bearer token derived from them is
/// cached inside the client, never written back to the store.
///
/// [`CredentialStore`]: crate::traits::CredentialStore
#[derive(Debug, Clone)]
pub struct IntegrationRecord {
    pub username: String,
    pub password: SecretString,
    pub enabled: bool,
}

/// The role a voice agent plays on a call.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    Inbound,
    Outbound,
    Ivr,
    Assistant,
}

/// Locally-owned configuration of an AI voice agent.
///
/// Mapped one-way into the provider's shape on sync; the provider-assigned
/// numeric id is the only state reflected back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentConfig {
    /// Local application id for the agent.
    pub id: String,
    pub name: String,
    pub kind: AgentKind,
    pub voice: String,
    pub language: String,
    pub greeting: String,
    pub system_prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub knowledge_store_id: Option<u64>,
    /// Maximum call duration in minutes (converted to seconds on sync).
    pub max_call_duration_mins: u32,
    pub recording: bool,
    pub transcription: bool,
}

/// A directed call-flow graph edited by the application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlowConfig {
    pub nodes: Vec<FlowNode>,
    pub edges: Vec<FlowEdge>,
}

/// A node in a call-flow graph.
///
/// `kind` is free-form ("greeting", "menu", "condition", ...); unrecognized
/// kinds publish as plain prompts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowNode {
    pub id: String,
    pub kind: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

/// A directed edge between flow nodes.
///
/// `condition` selects branch targets: digit-keyed for menu nodes,
/// `"true"`/`"false"` for conditional nodes, `None` for unconditional flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowEdge {
    pub source: String,
    pub target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
}

/// A single knowledge-base entry pushed to the provider-side store.
///
/// Embeddings are local-only and dropped on push.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    pub id: String,
    pub content: String,
    #[serde(default)]
    pub metadata: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embedding: Option<Vec<f32>>,
}

/// Aggregated call statistics for one agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentCallStats {
    pub total_calls: u64,
    pub total_duration_secs: u64,
    pub average_duration_secs: u64,
    pub success_rate: f64,
}

/// One call detail record retrieved from the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallLogEntry {
    pub id: String,
    #[serde(rename = "from")]
    pub from_number: String,
    #[serde(rename = "to")]
    pub to_number: String,
    pub duration_secs: u64,
    pub status: String,
    pub started_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recording_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcript: Option<String>,
}
