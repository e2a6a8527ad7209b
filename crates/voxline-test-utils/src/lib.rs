// SPDX-FileCopyrightText: 2026 Voxline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Voxline integration tests.
//!
//! Provides mock adapters for fast, deterministic, CI-runnable tests without
//! external services.
//!
//! # Components
//!
//! - [`MemoryCredentialStore`] - In-memory credential store with error injection
//! - [`ScriptedVoiceAdapter`] - Voice adapter returning scripted provider ids

pub mod memory_store;
pub mod scripted_voice;

pub use memory_store::MemoryCredentialStore;
pub use scripted_voice::ScriptedVoiceAdapter;
