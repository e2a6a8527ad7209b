// SPDX-FileCopyrightText: 2026 Voxline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Voxline voice-agent platform.
//!
//! This crate provides the foundational trait definitions, error types, and
//! common types used throughout the Voxline workspace. All adapter plugins
//! implement traits defined here.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::VoxlineError;
pub use types::{AdapterMode, AdapterType, HealthStatus, IntegrationRecord};

// Re-export all adapter traits at crate root.
pub use traits::{CredentialStore, PluginAdapter, VoiceAgentAdapter};

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::types::{AgentConfig, AgentKind};

    #[test]
    fn voxline_error_has_all_variants() {
        // Verify all 6 error variants exist and can be constructed.
        let _config = VoxlineError::Config("test".into());
        let _provider = VoxlineError::Provider {
            status: Some(401),
            message: "test".into(),
            source: None,
        };
        let _flow = VoxlineError::Flow("test".into());
        let _not_found = VoxlineError::AdapterNotFound {
            adapter_type: "Voice".into(),
            name: "test".into(),
        };
        let _health = VoxlineError::HealthCheckFailed {
            name: "test".into(),
            source: Box::new(std::io::Error::other("test")),
        };
        let _internal = VoxlineError::Internal("test".into());
    }

    #[test]
    fn provider_error_exposes_status() {
        let err = VoxlineError::provider_status(502, "bad gateway");
        assert_eq!(err.status(), Some(502));
        assert_eq!(VoxlineError::Config("x".into()).status(), None);
    }

    #[test]
    fn adapter_type_round_trips() {
        for variant in [AdapterType::Voice, AdapterType::Credentials] {
            let s = variant.to_string();
            let parsed = AdapterType::from_str(&s).expect("should parse back");
            assert_eq!(variant, parsed);
        }
    }

    #[test]
    fn agent_kind_serializes_lowercase() {
        let json = serde_json::to_string(&AgentKind::Inbound).expect("should serialize");
        assert_eq!(json, "\"inbound\"");
        let parsed: AgentKind = serde_json::from_str("\"ivr\"").expect("should deserialize");
        assert_eq!(parsed, AgentKind::Ivr);
    }

    #[test]
    fn agent_config_serializes_camel_case() {
        let agent = AgentConfig {
            id: "agent-1".into(),
            name: "Front desk".into(),
            kind: AgentKind::Inbound,
            voice: "alloy".into(),
            language: "en-US".into(),
            greeting: "Hello".into(),
            system_prompt: "Be brief.".into(),
            knowledge_store_id: None,
            max_call_duration_mins: 30,
            recording: true,
            transcription: false,
        };
        let json = serde_json::to_value(&agent).expect("should serialize");
        assert_eq!(json["systemPrompt"], "Be brief.");
        assert_eq!(json["maxCallDurationMins"], 30);
        assert!(json.get("knowledgeStoreId").is_none());
    }

    #[test]
    fn adapter_mode_displays_lowercase() {
        assert_eq!(AdapterMode::Live.to_string(), "live");
        assert_eq!(AdapterMode::Mock.to_string(), "mock");
    }
}
