// SPDX-FileCopyrightText: 2026 Voxline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! ConnexCS VoiceHub provider adapter for the Voxline platform.
//!
//! This crate implements [`VoiceAgentAdapter`] against the ConnexCS
//! customer-portal API: agent provisioning, call-flow publication as IVR
//! trees, knowledge store management, DID assignment, and call statistics.
//!
//! The adapter runs in one of two modes, fixed at construction: **live**
//! when the credential store supplies a complete, enabled integration
//! record, **mock** otherwise. In mock mode every call is answered from the
//! canned catalog and no network I/O happens at all.

pub mod client;
pub mod endpoint;
pub mod flow;
mod mock;
pub mod types;

use async_trait::async_trait;
use reqwest::Method;
use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{error, info, trace, warn};

use voxline_config::VoxlineConfig;
use voxline_core::VoxlineError;
use voxline_core::traits::{CredentialStore, PluginAdapter, VoiceAgentAdapter};
use voxline_core::types::{
    AdapterMode, AdapterType, AgentCallStats, AgentConfig, CallLogEntry, FlowConfig,
    HealthStatus, KnowledgeEntry,
};

use crate::client::{ConnexcsClient, Credentials};
use crate::endpoint::Endpoint;
use crate::types::{
    AckResponse, AgentPayload, AgentStatsWire, CallsResponse, CreatedResource, DidPayload,
    KnowledgeBatchPayload, KnowledgeEntryPayload, KnowledgeStorePayload,
};

/// Name of the integration record consulted at construction.
const PROVIDER: &str = "connexcs";

/// ConnexCS VoiceHub adapter implementing [`VoiceAgentAdapter`].
pub struct ConnexcsAdapter {
    mode: AdapterMode,
    /// Present in live mode only.
    client: Option<ConnexcsClient>,
    agent_provider: String,
    agent_model: String,
}

impl ConnexcsAdapter {
    /// Builds the adapter, selecting its mode from the credential store.
    ///
    /// Live mode requires a record that is enabled and carries both a
    /// username and a password. Anything else — a missing record, a disabled
    /// or incomplete one, or a store error — leaves the adapter in mock mode
    /// for its whole lifetime; the store is consulted exactly once.
    pub async fn from_store(config: &VoxlineConfig, store: &dyn CredentialStore) -> Self {
        let record = match store.integration(PROVIDER).await {
            Ok(record) => record,
            Err(e) => {
                warn!(error = %e, "credential store lookup failed, staying in mock mode");
                None
            }
        };

        let client = record
            .filter(|r| {
                r.enabled && !r.username.is_empty() && !r.password.expose_secret().is_empty()
            })
            .and_then(|r| {
                let credentials = Credentials {
                    username: r.username,
                    password: r.password,
                };
                match ConnexcsClient::new(&config.connexcs.base_url, credentials) {
                    Ok(client) => Some(client),
                    Err(e) => {
                        warn!(error = %e, "failed to build portal client, staying in mock mode");
                        None
                    }
                }
            });

        let mode = if client.is_some() {
            AdapterMode::Live
        } else {
            AdapterMode::Mock
        };
        info!(mode = %mode, "connexcs adapter initialized");

        Self {
            mode,
            client,
            agent_provider: config.connexcs.agent_provider.clone(),
            agent_model: config.connexcs.agent_model.clone(),
        }
    }

    /// Dispatches one request: canned response in mock mode, authenticated
    /// HTTP call in live mode.
    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &Endpoint,
        body: Option<&serde_json::Value>,
    ) -> Result<T, VoxlineError> {
        match &self.client {
            Some(client) => client.send(method, endpoint, body).await,
            None => {
                trace!(endpoint = %endpoint, "serving canned mock response");
                let canned = mock::respond(endpoint, &method);
                serde_json::from_value(canned).map_err(|e| {
                    VoxlineError::Internal(format!("mock response shape mismatch: {e}"))
                })
            }
        }
    }

    fn encode<T: Serialize>(payload: &T) -> Result<serde_json::Value, VoxlineError> {
        serde_json::to_value(payload)
            .map_err(|e| VoxlineError::Internal(format!("failed to encode payload: {e}")))
    }

    fn agent_payload(&self, agent: &AgentConfig) -> Result<serde_json::Value, VoxlineError> {
        Self::encode(&AgentPayload::from_agent(
            agent,
            &self.agent_provider,
            &self.agent_model,
        ))
    }
}

#[async_trait]
impl PluginAdapter for ConnexcsAdapter {
    fn name(&self) -> &str {
        "connexcs"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Voice
    }

    async fn health_check(&self) -> Result<HealthStatus, VoxlineError> {
        match &self.client {
            None => Ok(HealthStatus::Degraded(
                "mock mode, no portal credentials configured".into(),
            )),
            Some(client) => match client.authenticate().await {
                Ok(_) => Ok(HealthStatus::Healthy),
                Err(e) => Ok(HealthStatus::Unhealthy(format!("portal unreachable: {e}"))),
            },
        }
    }

    async fn shutdown(&self) -> Result<(), VoxlineError> {
        // Stateless HTTP client, nothing to release.
        Ok(())
    }
}

#[async_trait]
impl VoiceAgentAdapter for ConnexcsAdapter {
    fn mode(&self) -> AdapterMode {
        self.mode
    }

    async fn sync_agent(&self, agent: &AgentConfig) -> Result<u64, VoxlineError> {
        let payload = self.agent_payload(agent)?;
        let created: CreatedResource = self
            .request(Method::POST, &Endpoint::Agents, Some(&payload))
            .await
            .inspect_err(|e| error!(agent = %agent.id, error = %e, "agent sync failed"))?;
        info!(agent = %agent.id, provider_id = created.id, "agent created on provider");
        Ok(created.id)
    }

    async fn update_agent(
        &self,
        provider_id: u64,
        agent: &AgentConfig,
    ) -> Result<bool, VoxlineError> {
        let payload = self.agent_payload(agent)?;
        match self
            .request::<AckResponse>(Method::PUT, &Endpoint::Agent(provider_id), Some(&payload))
            .await
        {
            Ok(ack) => Ok(ack.success),
            Err(e) => {
                error!(provider_id, error = %e, "agent update failed");
                Ok(false)
            }
        }
    }

    async fn delete_agent(&self, provider_id: u64) -> Result<bool, VoxlineError> {
        match self
            .request::<AckResponse>(Method::DELETE, &Endpoint::Agent(provider_id), None)
            .await
        {
            Ok(ack) => Ok(ack.success),
            Err(e) => {
                error!(provider_id, error = %e, "agent delete failed");
                Ok(false)
            }
        }
    }

    async fn publish_flow(&self, name: &str, flow: &FlowConfig) -> Result<u64, VoxlineError> {
        let tree = flow::build_ivr_tree(name, flow)?;
        let payload = Self::encode(&tree)?;
        let created: CreatedResource = self
            .request(Method::POST, &Endpoint::Ivr, Some(&payload))
            .await
            .inspect_err(|e| error!(flow = name, error = %e, "IVR publish failed"))?;
        info!(flow = name, provider_id = created.id, nodes = tree.nodes.len(), "IVR published");
        Ok(created.id)
    }

    async fn create_knowledge_store(
        &self,
        name: &str,
        description: &str,
    ) -> Result<u64, VoxlineError> {
        let payload = Self::encode(&KnowledgeStorePayload {
            name: name.to_string(),
            description: description.to_string(),
        })?;
        let created: CreatedResource = self
            .request(Method::POST, &Endpoint::KnowledgeStores, Some(&payload))
            .await
            .inspect_err(|e| error!(store = name, error = %e, "knowledge store create failed"))?;
        info!(store = name, provider_id = created.id, "knowledge store created");
        Ok(created.id)
    }

    async fn push_knowledge_entries(
        &self,
        store_id: u64,
        entries: &[KnowledgeEntry],
    ) -> Result<bool, VoxlineError> {
        let payload = Self::encode(&KnowledgeBatchPayload {
            entries: entries.iter().map(KnowledgeEntryPayload::from).collect(),
        })?;
        let ack: AckResponse = self
            .request(
                Method::POST,
                &Endpoint::KnowledgeEntries(store_id),
                Some(&payload),
            )
            .await
            .inspect_err(|e| error!(store_id, error = %e, "knowledge push failed"))?;
        info!(store_id, count = entries.len(), "knowledge entries pushed");
        Ok(ack.success)
    }

    async fn delete_knowledge_store(&self, store_id: u64) -> Result<bool, VoxlineError> {
        // No existence check: an id that was never created follows the same
        // success path as a real delete.
        match self
            .request::<AckResponse>(Method::DELETE, &Endpoint::KnowledgeStore(store_id), None)
            .await
        {
            Ok(ack) => Ok(ack.success),
            Err(e) => {
                error!(store_id, error = %e, "knowledge store delete failed");
                Ok(false)
            }
        }
    }

    async fn assign_did(&self, did_id: &str, provider_id: u64) -> Result<bool, VoxlineError> {
        let payload = Self::encode(&DidPayload {
            agent_id: provider_id,
        })?;
        match self
            .request::<AckResponse>(
                Method::PATCH,
                &Endpoint::Did(did_id.to_string()),
                Some(&payload),
            )
            .await
        {
            Ok(ack) => Ok(ack.success),
            Err(e) => {
                error!(did = did_id, provider_id, error = %e, "DID assignment failed");
                Ok(false)
            }
        }
    }

    async fn agent_call_stats(&self, provider_id: u64) -> Result<AgentCallStats, VoxlineError> {
        let wire: AgentStatsWire = self
            .request(Method::GET, &Endpoint::AgentStats(provider_id), None)
            .await
            .inspect_err(|e| error!(provider_id, error = %e, "stats retrieval failed"))?;
        Ok(wire.into())
    }

    async fn agent_call_logs(
        &self,
        provider_id: u64,
    ) -> Result<Vec<CallLogEntry>, VoxlineError> {
        let response: CallsResponse = self
            .request(Method::GET, &Endpoint::AgentCalls(provider_id), None)
            .await
            .inspect_err(|e| error!(provider_id, error = %e, "call log retrieval failed"))?;
        Ok(response.calls.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxline_core::types::AgentKind;
    use voxline_test_utils::MemoryCredentialStore;
    use wiremock::matchers::{any, body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(base_url: &str) -> VoxlineConfig {
        let mut config = VoxlineConfig::default();
        config.connexcs.base_url = base_url.to_string();
        config
    }

    fn agent() -> AgentConfig {
        AgentConfig {
            id: "agent-1".into(),
            name: "Front desk".into(),
            kind: AgentKind::Inbound,
            voice: "alloy".into(),
            language: "en-US".into(),
            greeting: "Welcome".into(),
            system_prompt: "Be helpful.".into(),
            knowledge_store_id: None,
            max_call_duration_mins: 30,
            recording: true,
            transcription: false,
        }
    }

    fn two_node_flow() -> FlowConfig {
        serde_json::from_value(serde_json::json!({
            "nodes": [
                {"id": "a", "kind": "greeting", "data": {"text": "Welcome"}},
                {"id": "b", "kind": "menu", "data": {"options": [{"digit": "1"}]}}
            ],
            "edges": [
                {"source": "a", "target": "b"},
                {"source": "b", "target": "a", "condition": "1"}
            ]
        }))
        .unwrap()
    }

    async fn live_adapter(server: &MockServer) -> ConnexcsAdapter {
        let store =
            MemoryCredentialStore::new().with_credentials("connexcs", "ops@example.com", "hunter2");
        ConnexcsAdapter::from_store(&test_config(&server.uri()), &store).await
    }

    fn login_mock(token: &str) -> Mock {
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "token": token })),
            )
    }

    #[tokio::test]
    async fn complete_credentials_select_live_mode() {
        let server = MockServer::start().await;
        let adapter = live_adapter(&server).await;
        assert_eq!(adapter.mode(), AdapterMode::Live);
    }

    #[tokio::test]
    async fn missing_credentials_select_mock_mode() {
        let store = MemoryCredentialStore::new();
        let adapter =
            ConnexcsAdapter::from_store(&test_config("https://unused.example"), &store).await;
        assert_eq!(adapter.mode(), AdapterMode::Mock);
    }

    #[tokio::test]
    async fn disabled_integration_stays_mock() {
        use secrecy::SecretString;
        use voxline_core::types::IntegrationRecord;

        let store = MemoryCredentialStore::new().with_record(
            "connexcs",
            IntegrationRecord {
                username: "ops@example.com".into(),
                password: SecretString::from("hunter2".to_string()),
                enabled: false,
            },
        );
        let adapter =
            ConnexcsAdapter::from_store(&test_config("https://unused.example"), &store).await;
        assert_eq!(adapter.mode(), AdapterMode::Mock);
    }

    #[tokio::test]
    async fn store_error_degrades_to_mock_mode() {
        let store = MemoryCredentialStore::failing();
        let adapter =
            ConnexcsAdapter::from_store(&test_config("https://unused.example"), &store).await;
        assert_eq!(adapter.mode(), AdapterMode::Mock);
    }

    #[tokio::test]
    async fn mock_mode_issues_no_network_requests() {
        let server = MockServer::start().await;
        // Any request reaching the server fails the test on drop.
        Mock::given(any())
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&server)
            .await;

        let store = MemoryCredentialStore::new();
        let adapter = ConnexcsAdapter::from_store(&test_config(&server.uri()), &store).await;

        let provider_id = adapter.sync_agent(&agent()).await.unwrap();
        assert!(provider_id >= 1_000);
        assert!(adapter.update_agent(provider_id, &agent()).await.unwrap());
        assert!(adapter.delete_agent(provider_id).await.unwrap());
        let ivr_id = adapter.publish_flow("main", &two_node_flow()).await.unwrap();
        assert!(ivr_id >= 1_000);
        let stats = adapter.agent_call_stats(provider_id).await.unwrap();
        assert!(stats.total_calls < 1000);
        let logs = adapter.agent_call_logs(provider_id).await.unwrap();
        assert!(!logs.is_empty());
        assert!(adapter.assign_did("d-1", provider_id).await.unwrap());
    }

    #[tokio::test]
    async fn authenticate_once_within_token_window() {
        let server = MockServer::start().await;
        login_mock("tok-1").expect(1).mount(&server).await;
        Mock::given(method("GET"))
            .and(path("/voicehub/agents/7/stats"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "total_calls": 10,
                "total_duration": 600,
                "average_duration": 60,
                "success_rate": 92.0
            })))
            .expect(2)
            .mount(&server)
            .await;

        let adapter = live_adapter(&server).await;
        adapter.agent_call_stats(7).await.unwrap();
        adapter.agent_call_stats(7).await.unwrap();
        // MockServer verifies the single login on drop.
    }

    #[tokio::test]
    async fn sync_agent_sends_provider_shape() {
        let server = MockServer::start().await;
        login_mock("tok-2").mount(&server).await;
        Mock::given(method("POST"))
            .and(path("/voicehub/agents"))
            .and(body_partial_json(serde_json::json!({
                "type": "inbound",
                "provider": "openai",
                "model": "gpt-4o",
                "max_call_duration": 1800
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "id": 42 })),
            )
            .mount(&server)
            .await;

        let adapter = live_adapter(&server).await;
        let provider_id = adapter.sync_agent(&agent()).await.unwrap();
        assert_eq!(provider_id, 42);
    }

    #[tokio::test]
    async fn publish_flow_sends_ivr_tree() {
        let server = MockServer::start().await;
        login_mock("tok-3").mount(&server).await;
        Mock::given(method("POST"))
            .and(path("/ivr"))
            .and(body_partial_json(serde_json::json!({
                "entry": "a",
                "nodes": [
                    {"id": "a", "type": "prompt"},
                    {"id": "b", "type": "menu", "options": [{"digit": "1", "next": "a"}]}
                ]
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "id": 7 })),
            )
            .mount(&server)
            .await;

        let adapter = live_adapter(&server).await;
        let ivr_id = adapter.publish_flow("main", &two_node_flow()).await.unwrap();
        assert_eq!(ivr_id, 7);
    }

    #[tokio::test]
    async fn provider_error_carries_status_and_body() {
        let server = MockServer::start().await;
        login_mock("tok-4").mount(&server).await;
        Mock::given(method("GET"))
            .and(path("/voicehub/agents/9/stats"))
            .respond_with(ResponseTemplate::new(404).set_body_string("no such agent"))
            .mount(&server)
            .await;

        let adapter = live_adapter(&server).await;
        let err = adapter
            .agent_call_stats(9)
            .await
            .expect_err("missing agent should fail");
        assert_eq!(err.status(), Some(404));
        assert!(err.to_string().contains("no such agent"), "got: {err}");
    }

    #[tokio::test]
    async fn update_agent_reports_false_on_provider_error() {
        let server = MockServer::start().await;
        login_mock("tok-5").mount(&server).await;
        Mock::given(method("PUT"))
            .and(path("/voicehub/agents/3"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let adapter = live_adapter(&server).await;
        let updated = adapter.update_agent(3, &agent()).await.unwrap();
        assert!(!updated);
    }

    #[tokio::test]
    async fn deleting_unknown_knowledge_store_succeeds() {
        let store = MemoryCredentialStore::new();
        let adapter =
            ConnexcsAdapter::from_store(&test_config("https://unused.example"), &store).await;
        // No existence check anywhere in the path: an arbitrary id deletes
        // exactly like one returned by create.
        assert!(adapter.delete_knowledge_store(999_999_999).await.unwrap());
    }

    #[tokio::test]
    async fn knowledge_push_drops_embeddings() {
        let server = MockServer::start().await;
        login_mock("tok-6").mount(&server).await;
        Mock::given(method("POST"))
            .and(path("/knowledge/stores/5/entries"))
            .and(body_partial_json(serde_json::json!({
                "entries": [{"content": "Opening hours are 9-5."}]
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "success": true })),
            )
            .mount(&server)
            .await;

        let adapter = live_adapter(&server).await;
        let entries = vec![KnowledgeEntry {
            id: "k-1".into(),
            content: "Opening hours are 9-5.".into(),
            metadata: serde_json::json!({"topic": "hours"}),
            embedding: Some(vec![0.5; 8]),
        }];
        assert!(adapter.push_knowledge_entries(5, &entries).await.unwrap());
    }

    #[tokio::test]
    async fn mock_stats_stay_inside_documented_ranges() {
        let store = MemoryCredentialStore::new();
        let adapter =
            ConnexcsAdapter::from_store(&test_config("https://unused.example"), &store).await;
        for _ in 0..20 {
            let stats = adapter.agent_call_stats(1).await.unwrap();
            assert!(stats.total_calls < 1000);
            assert!((85.0..95.0).contains(&stats.success_rate));
        }
    }

    #[tokio::test]
    async fn empty_flow_graph_is_rejected_before_any_request() {
        let server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&server)
            .await;

        let adapter = live_adapter(&server).await;
        let err = adapter
            .publish_flow("main", &FlowConfig::default())
            .await
            .expect_err("empty flow should fail");
        assert!(matches!(err, VoxlineError::Flow(_)));
    }

    #[tokio::test]
    async fn health_check_reports_degraded_in_mock_mode() {
        let store = MemoryCredentialStore::new();
        let adapter =
            ConnexcsAdapter::from_store(&test_config("https://unused.example"), &store).await;
        let status = adapter.health_check().await.unwrap();
        assert!(matches!(status, HealthStatus::Degraded(_)));
    }
}
