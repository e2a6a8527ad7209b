// SPDX-FileCopyrightText: 2026 Voxline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Voxline voice-agent platform.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Voxline configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable
/// overrides. All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct VoxlineConfig {
    /// Application identity and logging settings.
    #[serde(default)]
    pub app: AppConfig,

    /// ConnexCS VoiceHub provider settings.
    #[serde(default)]
    pub connexcs: ConnexcsConfig,

    /// Per-provider integration credentials.
    #[serde(default)]
    pub integrations: IntegrationsConfig,
}

/// Application identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Display name of the application instance.
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_app_name() -> String {
    "voxline".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// ConnexCS VoiceHub provider configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ConnexcsConfig {
    /// Base URL of the customer-portal API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// LLM provider name sent with every agent payload.
    #[serde(default = "default_agent_provider")]
    pub agent_provider: String,

    /// LLM model identifier sent with every agent payload.
    #[serde(default = "default_agent_model")]
    pub agent_model: String,
}

impl Default for ConnexcsConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            agent_provider: default_agent_provider(),
            agent_model: default_agent_model(),
        }
    }
}

fn default_base_url() -> String {
    "https://app.connexcs.com/api/cp/".to_string()
}

fn default_agent_provider() -> String {
    "openai".to_string()
}

fn default_agent_model() -> String {
    "gpt-4o".to_string()
}

/// Per-provider integration credential sections.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct IntegrationsConfig {
    /// ConnexCS portal credentials.
    #[serde(default)]
    pub connexcs: IntegrationEntry,
}

/// Credentials for one integration.
///
/// Both `username` and `password` must be set for the integration to go
/// live; an incomplete or disabled entry leaves its adapter in mock mode.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct IntegrationEntry {
    /// Portal login username. `None` keeps the integration in mock mode.
    #[serde(default)]
    pub username: Option<String>,

    /// Portal login password.
    #[serde(default)]
    pub password: Option<String>,

    /// Whether the integration may go live when credentials are complete.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl Default for IntegrationEntry {
    fn default() -> Self {
        Self {
            username: None,
            password: None,
            enabled: default_enabled(),
        }
    }
}

fn default_enabled() -> bool {
    true
}
