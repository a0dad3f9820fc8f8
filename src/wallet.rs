//! Wallet session management
//!
//! The pipeline treats wallet authorization and signing as a black-box
//! collaborator behind [`WalletSession`]: both calls are interactive and may
//! suspend indefinitely while the user decides. Cancellation, if any, is the
//! wallet's capability, not the pipeline's.
//!
//! [`LocalWallet`] is the keypair-file-backed implementation used by the CLI
//! binary.

use anyhow::{Context, Result};
use async_trait::async_trait;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    transaction::Transaction,
};
use std::sync::Arc;

/// Interactive wallet collaborator
///
/// `authorize` re-establishes the session (it may have expired between screen
/// navigation and the mint action); `sign_transaction` returns the same
/// transaction carrying the wallet's signature over the fee-payer account.
/// Either call returning an error means the user or the wallet declined.
#[async_trait]
pub trait WalletSession: Send + Sync {
    /// Public key the wallet signs as (the fee payer)
    fn pubkey(&self) -> Pubkey;

    /// Re-authorize the session; suspends until the wallet confirms or rejects
    async fn authorize(&self) -> Result<()>;

    /// Ask the wallet to sign; suspends until the user approves or declines
    async fn sign_transaction(&self, tx: Transaction) -> Result<Transaction>;
}

/// Keypair-file-backed wallet for the CLI binary
#[derive(Debug)]
pub struct LocalWallet {
    keypair: Arc<Keypair>,
}

impl LocalWallet {
    /// Load a wallet from a keypair file (raw 64 bytes or JSON byte array)
    pub fn from_file(path: &str) -> Result<Self> {
        let keypair_bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read keypair file: {}", path))?;

        let keypair = if keypair_bytes.len() == 64 {
            // Raw bytes format - validate before conversion
            if keypair_bytes.iter().all(|&b| b == 0) {
                anyhow::bail!("Invalid keypair: all-zero key rejected");
            }
            Keypair::try_from(keypair_bytes.as_slice()).context("Invalid keypair bytes")?
        } else {
            // JSON format
            let json: Vec<u8> = serde_json::from_slice(&keypair_bytes)
                .context("Failed to parse keypair JSON")?;
            if json.len() != 64 {
                anyhow::bail!(
                    "Invalid keypair length: expected 64 bytes, got {}",
                    json.len()
                );
            }
            if json.iter().all(|&b| b == 0) {
                anyhow::bail!("Invalid keypair: all-zero key rejected");
            }
            Keypair::try_from(json.as_slice()).context("Invalid keypair from JSON")?
        };

        Ok(Self {
            keypair: Arc::new(keypair),
        })
    }

    /// Wrap an in-memory keypair
    pub fn from_keypair(keypair: Keypair) -> Self {
        Self {
            keypair: Arc::new(keypair),
        }
    }
}

#[async_trait]
impl WalletSession for LocalWallet {
    fn pubkey(&self) -> Pubkey {
        self.keypair.pubkey()
    }

    async fn authorize(&self) -> Result<()> {
        // A local keypair session never expires
        Ok(())
    }

    async fn sign_transaction(&self, mut tx: Transaction) -> Result<Transaction> {
        let recent_blockhash = tx.message.recent_blockhash;
        tx.try_partial_sign(&[self.keypair.as_ref()], recent_blockhash)
            .context("Local signing failed")?;
        Ok(tx)
    }
}

impl Clone for LocalWallet {
    fn clone(&self) -> Self {
        Self {
            keypair: Arc::clone(&self.keypair),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_raw_keypair_file() {
        let keypair = Keypair::new();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&keypair.to_bytes()).unwrap();

        let wallet = LocalWallet::from_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(wallet.pubkey(), keypair.pubkey());
    }

    #[test]
    fn loads_json_keypair_file() {
        let keypair = Keypair::new();
        let json = serde_json::to_vec(&keypair.to_bytes().to_vec()).unwrap();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&json).unwrap();

        let wallet = LocalWallet::from_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(wallet.pubkey(), keypair.pubkey());
    }

    #[test]
    fn rejects_all_zero_keypair() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0u8; 64]).unwrap();

        let err = LocalWallet::from_file(file.path().to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("all-zero"));
    }
}
