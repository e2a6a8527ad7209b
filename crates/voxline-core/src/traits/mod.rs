// SPDX-FileCopyrightText: 2026 Voxline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapter trait definitions for the Voxline plugin architecture.
//!
//! All adapters extend the [`PluginAdapter`] base trait and use
//! `#[async_trait]` for dynamic dispatch compatibility.

pub mod adapter;
pub mod credentials;
pub mod voice;

// Re-export all traits at the traits module level for convenience.
pub use adapter::PluginAdapter;
pub use credentials::CredentialStore;
pub use voice::VoiceAgentAdapter;
