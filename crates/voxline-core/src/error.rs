// SPDX-FileCopyrightText: 2026 Voxline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Voxline voice-agent platform.

use thiserror::Error;

/// The primary error type used across all Voxline adapter traits and core operations.
#[derive(Debug, Error)]
pub enum VoxlineError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// Telephony provider errors: a non-2xx HTTP response (with status and
    /// body text) or a transport failure. Provider requests are not retried.
    #[error("provider error: {message}")]
    Provider {
        status: Option<u16>,
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A call flow graph failed validation before publication.
    #[error("flow error: {0}")]
    Flow(String),

    /// Requested adapter was not found in the registry.
    #[error("adapter not found: {adapter_type}/{name}")]
    AdapterNotFound { adapter_type: String, name: String },

    /// Adapter health check failed.
    #[error("health check failed for {name}: {source}")]
    HealthCheckFailed {
        name: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl VoxlineError {
    /// Builds a `Provider` error from an HTTP status code and response body.
    pub fn provider_status(status: u16, body: impl Into<String>) -> Self {
        Self::Provider {
            status: Some(status),
            message: body.into(),
            source: None,
        }
    }

    /// The HTTP status carried by a `Provider` error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Provider { status, .. } => *status,
            _ => None,
        }
    }
}
