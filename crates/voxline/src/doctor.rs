// SPDX-FileCopyrightText: 2026 Voxline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `voxline doctor` command implementation.
//!
//! Runs diagnostic checks against the Voxline environment to identify
//! configuration issues and provider connectivity problems.

use std::io::IsTerminal;
use std::time::{Duration, Instant};

use voxline_config::{ConfigCredentialStore, VoxlineConfig};
use voxline_connexcs::ConnexcsAdapter;
use voxline_core::types::{AdapterMode, HealthStatus};
use voxline_core::{PluginAdapter, VoiceAgentAdapter, VoxlineError};

/// Status of a diagnostic check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    /// Check passed successfully.
    Pass,
    /// Check passed with a warning.
    Warn,
    /// Check failed.
    Fail,
}

/// Result of a single diagnostic check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Name of the check.
    pub name: String,
    /// Check status.
    pub status: CheckStatus,
    /// Human-readable message.
    pub message: String,
    /// Duration the check took.
    pub duration: Duration,
}

/// Run the `voxline doctor` command.
///
/// With `--plain`, disables colored output.
pub async fn run_doctor(config: &VoxlineConfig, plain: bool) -> Result<(), VoxlineError> {
    let use_color = !plain && std::io::stdout().is_terminal();

    let results = vec![
        check_config().await,
        check_credentials(config).await,
        check_provider(config).await,
    ];

    println!();
    println!("  voxline doctor");
    println!("  {}", "-".repeat(50));

    let mut fail_count = 0;
    let mut warn_count = 0;

    for result in &results {
        let duration_ms = result.duration.as_millis();
        let line = match result.status {
            CheckStatus::Pass => {
                if use_color {
                    use colored::Colorize;
                    let symbol = "✓".green().to_string();
                    format!(
                        "    {symbol} {:<20} {} ({duration_ms}ms)",
                        result.name, result.message
                    )
                } else {
                    format!(
                        "    [OK]   {:<20} {} ({duration_ms}ms)",
                        result.name, result.message
                    )
                }
            }
            CheckStatus::Warn => {
                warn_count += 1;
                if use_color {
                    use colored::Colorize;
                    let symbol = "!".yellow().to_string();
                    format!(
                        "    {symbol} {:<20} {} ({duration_ms}ms)",
                        result.name,
                        result.message.yellow()
                    )
                } else {
                    format!(
                        "    [WARN] {:<20} {} ({duration_ms}ms)",
                        result.name, result.message
                    )
                }
            }
            CheckStatus::Fail => {
                fail_count += 1;
                if use_color {
                    use colored::Colorize;
                    let symbol = "✗".red().to_string();
                    format!(
                        "    {symbol} {:<20} {} ({duration_ms}ms)",
                        result.name,
                        result.message.red()
                    )
                } else {
                    format!(
                        "    [FAIL] {:<20} {} ({duration_ms}ms)",
                        result.name, result.message
                    )
                }
            }
        };

        println!("{line}");
    }

    println!();

    if fail_count > 0 || warn_count > 0 {
        let issues = fail_count + warn_count;
        let issue_word = if issues == 1 { "issue" } else { "issues" };
        println!("  {issues} {issue_word} found.");
    } else {
        println!("  All checks passed.");
    }

    println!();

    Ok(())
}

/// Check configuration loads without errors.
async fn check_config() -> CheckResult {
    let start = Instant::now();
    match voxline_config::load_and_validate() {
        Ok(_) => CheckResult {
            name: "Configuration".to_string(),
            status: CheckStatus::Pass,
            message: "valid".to_string(),
            duration: start.elapsed(),
        },
        Err(errors) => CheckResult {
            name: "Configuration".to_string(),
            status: CheckStatus::Fail,
            message: format!("{} error(s)", errors.len()),
            duration: start.elapsed(),
        },
    }
}

/// Report which mode the adapter will select from the configured credentials.
async fn check_credentials(config: &VoxlineConfig) -> CheckResult {
    let start = Instant::now();
    let entry = &config.integrations.connexcs;

    let (status, message) = match (&entry.username, &entry.password) {
        (Some(_), Some(_)) if entry.enabled => {
            (CheckStatus::Pass, "complete, adapter will go live".to_string())
        }
        (Some(_), Some(_)) => (
            CheckStatus::Warn,
            "complete but disabled, adapter stays in mock mode".to_string(),
        ),
        _ => (
            CheckStatus::Warn,
            "not configured, adapter stays in mock mode".to_string(),
        ),
    };

    CheckResult {
        name: "Credentials".to_string(),
        status,
        message,
        duration: start.elapsed(),
    }
}

/// Check provider reachability through the adapter's health check.
async fn check_provider(config: &VoxlineConfig) -> CheckResult {
    let start = Instant::now();
    let store = ConfigCredentialStore::new(config.integrations.clone());
    let adapter = ConnexcsAdapter::from_store(config, &store).await;

    let (status, message) = match adapter.health_check().await {
        Ok(HealthStatus::Healthy) => (CheckStatus::Pass, "reachable".to_string()),
        Ok(HealthStatus::Degraded(reason)) => (CheckStatus::Warn, reason),
        Ok(HealthStatus::Unhealthy(reason)) => (CheckStatus::Fail, reason),
        Err(e) => (CheckStatus::Fail, e.to_string()),
    };

    let name = match adapter.mode() {
        AdapterMode::Live => "Provider (live)",
        AdapterMode::Mock => "Provider (mock)",
    };

    CheckResult {
        name: name.to_string(),
        status,
        message,
        duration: start.elapsed(),
    }
}
