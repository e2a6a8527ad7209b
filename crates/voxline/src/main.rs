// SPDX-FileCopyrightText: 2026 Voxline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Voxline - VoIP voice-agent provisioning toolkit.
//!
//! This is the binary entry point for the Voxline command-line tools.

mod doctor;

use clap::{Parser, Subcommand};

use voxline_config::{ConfigCredentialStore, VoxlineConfig};
use voxline_connexcs::ConnexcsAdapter;
use voxline_core::VoiceAgentAdapter;

/// Voxline - VoIP voice-agent provisioning toolkit.
#[derive(Parser, Debug)]
#[command(name = "voxline", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run diagnostic checks against the configured environment.
    Doctor {
        /// Disable colored output.
        #[arg(long)]
        plain: bool,
    },
    /// Fetch call statistics for a provider agent id.
    AgentStats {
        /// Provider-assigned numeric agent id.
        provider_id: u64,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup
    let config = match voxline_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            voxline_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config);

    match cli.command {
        Some(Commands::Doctor { plain }) => {
            if let Err(e) = doctor::run_doctor(&config, plain).await {
                eprintln!("voxline doctor: {e}");
                std::process::exit(1);
            }
        }
        Some(Commands::AgentStats { provider_id }) => {
            if let Err(e) = run_agent_stats(&config, provider_id).await {
                eprintln!("voxline agent-stats: {e}");
                std::process::exit(1);
            }
        }
        None => {
            println!("voxline: use --help for available commands");
        }
    }
}

/// Initialize the tracing subscriber. `RUST_LOG` wins over `app.log_level`.
fn init_tracing(config: &VoxlineConfig) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.app.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Fetch and print call statistics through the adapter.
///
/// Works in mock mode too, which makes it a handy end-to-end smoke check.
async fn run_agent_stats(
    config: &VoxlineConfig,
    provider_id: u64,
) -> Result<(), voxline_core::VoxlineError> {
    let store = ConfigCredentialStore::new(config.integrations.clone());
    let adapter = ConnexcsAdapter::from_store(config, &store).await;

    let stats = adapter.agent_call_stats(provider_id).await?;

    println!();
    println!("  agent {provider_id} ({} mode)", adapter.mode());
    println!("  {}", "-".repeat(40));
    println!("    total calls      {}", stats.total_calls);
    println!("    total duration   {}s", stats.total_duration_secs);
    println!("    avg duration     {}s", stats.average_duration_secs);
    println!("    success rate     {:.1}%", stats.success_rate);
    println!();

    Ok(())
}

#[cfg(test)]
mod tests {
    #[test]
    fn binary_loads_config_defaults() {
        // Verify config loads with defaults (no config file needed)
        let config =
            voxline_config::load_and_validate().expect("default config should be valid");
        assert_eq!(config.app.name, "voxline");
    }
}
