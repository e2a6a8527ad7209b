// SPDX-FileCopyrightText: 2026 Voxline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./voxline.toml` > `~/.config/voxline/voxline.toml`
//! > `/etc/voxline/voxline.toml` with environment variable overrides via the
//! `VOXLINE_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::VoxlineConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/voxline/voxline.toml` (system-wide)
/// 3. `~/.config/voxline/voxline.toml` (user XDG config)
/// 4. `./voxline.toml` (local directory)
/// 5. `VOXLINE_*` environment variables
pub fn load_config() -> Result<VoxlineConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env vars).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<VoxlineConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(VoxlineConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<VoxlineConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(VoxlineConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used internally for config loading (exposed for diagnostic use).
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(VoxlineConfig::default()))
        .merge(Toml::file("/etc/voxline/voxline.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("voxline/voxline.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("voxline.toml"))
        .merge(env_provider())
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` so that key names
/// containing underscores stay intact: `VOXLINE_APP_LOG_LEVEL` must map to
/// `app.log_level`, not `app.log.level`.
fn env_provider() -> Env {
    Env::prefixed("VOXLINE_").map(|key| {
        // `key` is the lowercased env var name with the prefix stripped.
        // The nested integrations section must be mapped before its parent
        // prefix: VOXLINE_INTEGRATIONS_CONNEXCS_USERNAME ->
        // integrations.connexcs.username.
        let mapped = key
            .as_str()
            .replacen("integrations_connexcs_", "integrations.connexcs.", 1)
            .replacen("app_", "app.", 1)
            .replacen("connexcs_", "connexcs.", 1);
        mapped.into()
    })
}
