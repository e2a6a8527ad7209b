// SPDX-FileCopyrightText: 2026 Voxline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Structured catalog of customer-portal API endpoints.
//!
//! Every provider call names its target through this sum type instead of a
//! free-form path string, so the mock catalog can dispatch on structure
//! rather than substring matching.

use std::fmt;

/// A relative endpoint under the customer-portal API base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// `POST auth/login` with HTTP Basic credentials.
    Login,
    /// Agent collection: create on POST.
    Agents,
    /// One agent by provider id: update on PUT, remove on DELETE.
    Agent(u64),
    /// Aggregated call statistics for one agent.
    AgentStats(u64),
    /// Recent call detail records for one agent.
    AgentCalls(u64),
    /// IVR tree collection: publish on POST.
    Ivr,
    /// Knowledge store collection: create on POST.
    KnowledgeStores,
    /// One knowledge store by id: remove on DELETE.
    KnowledgeStore(u64),
    /// Entry batch endpoint of one knowledge store.
    KnowledgeEntries(u64),
    /// One DID by identifier: agent assignment on PATCH.
    Did(String),
}

impl Endpoint {
    /// Renders the relative path under the API base URL (no leading slash).
    pub fn path(&self) -> String {
        match self {
            Endpoint::Login => "auth/login".to_string(),
            Endpoint::Agents => "voicehub/agents".to_string(),
            Endpoint::Agent(id) => format!("voicehub/agents/{id}"),
            Endpoint::AgentStats(id) => format!("voicehub/agents/{id}/stats"),
            Endpoint::AgentCalls(id) => format!("voicehub/agents/{id}/calls"),
            Endpoint::Ivr => "ivr".to_string(),
            Endpoint::KnowledgeStores => "knowledge/stores".to_string(),
            Endpoint::KnowledgeStore(id) => format!("knowledge/stores/{id}"),
            Endpoint::KnowledgeEntries(id) => format!("knowledge/stores/{id}/entries"),
            Endpoint::Did(id) => format!("did/{id}"),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_render_without_leading_slash() {
        assert_eq!(Endpoint::Login.path(), "auth/login");
        assert_eq!(Endpoint::Agents.path(), "voicehub/agents");
        assert_eq!(Endpoint::Agent(42).path(), "voicehub/agents/42");
        assert_eq!(Endpoint::AgentStats(42).path(), "voicehub/agents/42/stats");
        assert_eq!(Endpoint::AgentCalls(42).path(), "voicehub/agents/42/calls");
        assert_eq!(Endpoint::Ivr.path(), "ivr");
        assert_eq!(Endpoint::KnowledgeStores.path(), "knowledge/stores");
        assert_eq!(Endpoint::KnowledgeStore(7).path(), "knowledge/stores/7");
        assert_eq!(
            Endpoint::KnowledgeEntries(7).path(),
            "knowledge/stores/7/entries"
        );
        assert_eq!(Endpoint::Did("d-1".into()).path(), "did/d-1");
    }

    #[test]
    fn display_matches_path() {
        assert_eq!(Endpoint::AgentStats(9).to_string(), "voicehub/agents/9/stats");
    }
}
