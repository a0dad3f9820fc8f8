//! Configuration module for Mint Cam
//!
//! This module handles all configuration loading from TOML files and
//! provides structured configuration types with serde defaults.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// RPC endpoint configuration
    #[serde(default)]
    pub rpc: RpcConfig,

    /// Wallet configuration
    #[serde(default)]
    pub wallet: WalletConfig,

    /// Mint pipeline policy
    #[serde(default)]
    pub mint: MintConfig,

    /// Image hosting configuration
    #[serde(default)]
    pub hosting: HostingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcConfig {
    /// RPC endpoint URL
    #[serde(default = "default_rpc_endpoint")]
    pub endpoint: String,

    /// Commitment level for queries and confirmation ("processed", "confirmed", "finalized")
    #[serde(default = "default_commitment")]
    pub commitment: String,

    /// Request timeout in seconds
    #[serde(default = "default_rpc_timeout")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletConfig {
    /// Path to keypair file
    #[serde(default = "default_keypair_path")]
    pub keypair_path: String,
}

/// Mint pipeline policy values
///
/// The preflight threshold is a deliberate safety margin above the
/// rent-exemption minimum computed during transaction building. It is policy,
/// not a protocol constant, so it lives here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MintConfig {
    /// Minimum payer balance (in SOL) required before a mint attempt starts
    #[serde(default = "default_preflight_min_sol")]
    pub preflight_min_sol: f64,

    /// How long to wait for network confirmation before giving up
    #[serde(default = "default_confirm_timeout")]
    pub confirm_timeout_secs: u64,

    /// Interval between signature status polls
    #[serde(default = "default_confirm_poll_ms")]
    pub confirm_poll_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostingConfig {
    /// Image hosting upload endpoint
    #[serde(default = "default_hosting_endpoint")]
    pub endpoint: String,
}

// Default value functions
fn default_rpc_endpoint() -> String {
    "https://api.devnet.solana.com".to_string()
}
fn default_commitment() -> String {
    "confirmed".to_string()
}
fn default_rpc_timeout() -> u64 {
    30
}
fn default_keypair_path() -> String {
    "~/.config/solana/id.json".to_string()
}
fn default_preflight_min_sol() -> f64 {
    1.0
}
fn default_confirm_timeout() -> u64 {
    60
}
fn default_confirm_poll_ms() -> u64 {
    500
}
fn default_hosting_endpoint() -> String {
    "https://api.imgbb.example/upload".to_string()
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            endpoint: default_rpc_endpoint(),
            commitment: default_commitment(),
            timeout_secs: default_rpc_timeout(),
        }
    }
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            keypair_path: default_keypair_path(),
        }
    }
}

impl Default for MintConfig {
    fn default() -> Self {
        Self {
            preflight_min_sol: default_preflight_min_sol(),
            confirm_timeout_secs: default_confirm_timeout(),
            confirm_poll_ms: default_confirm_poll_ms(),
        }
    }
}

impl Default for HostingConfig {
    fn default() -> Self {
        Self {
            endpoint: default_hosting_endpoint(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rpc: RpcConfig::default(),
            wallet: WalletConfig::default(),
            mint: MintConfig::default(),
            hosting: HostingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

impl MintConfig {
    /// Preflight threshold converted to lamports
    pub fn preflight_min_lamports(&self) -> u64 {
        solana_sdk::native_token::sol_to_lamports(self.preflight_min_sol)
    }

    /// Confirmation wait window
    pub fn confirm_timeout(&self) -> Duration {
        Duration::from_secs(self.confirm_timeout_secs)
    }

    /// Poll interval for the confirmation tracker
    pub fn confirm_poll_interval(&self) -> Duration {
        Duration::from_millis(self.confirm_poll_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.mint.preflight_min_sol, 1.0);
        assert_eq!(config.mint.preflight_min_lamports(), 1_000_000_000);
        assert_eq!(config.rpc.commitment, "confirmed");
        assert_eq!(config.mint.confirm_timeout_secs, 60);
    }

    #[test]
    fn partial_toml_overrides_defaults() {
        let raw = r#"
            [mint]
            preflight_min_sol = 0.25
            confirm_timeout_secs = 10

            [rpc]
            endpoint = "http://localhost:8899"
        "#;
        let config: Config = toml::from_str(raw).unwrap();
        assert_eq!(config.mint.preflight_min_sol, 0.25);
        assert_eq!(config.mint.preflight_min_lamports(), 250_000_000);
        assert_eq!(config.rpc.endpoint, "http://localhost:8899");
        // Untouched sections keep defaults
        assert_eq!(config.mint.confirm_poll_ms, 500);
        assert_eq!(config.wallet.keypair_path, "~/.config/solana/id.json");
    }
}
