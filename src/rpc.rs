//! Ledger RPC abstraction
//!
//! Narrow async trait over the handful of RPC calls the mint pipeline needs,
//! implemented for the nonblocking Solana client. The trait is the seam that
//! lets tests drive the pipeline against a mock ledger. The concrete client
//! is stateless and safe for concurrent use by independent pipeline
//! invocations.

use anyhow::Result;
use async_trait::async_trait;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    commitment_config::CommitmentConfig, hash::Hash, pubkey::Pubkey, signature::Signature,
    transaction::Transaction,
};
use solana_transaction_status::TransactionStatus;

/// Observed status of a submitted transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerStatus {
    /// The network has not seen the signature yet
    Unknown,
    /// Seen but not yet at confirmed commitment
    Processed,
    /// Confirmed (or finalized)
    Confirmed,
    /// The transaction landed and failed, with the network's error message
    Failed(String),
}

/// Read/write RPC interface to the ledger network
#[async_trait]
pub trait LedgerRpc: Send + Sync {
    /// Current balance of `address` in lamports
    async fn balance(&self, address: &Pubkey) -> Result<u64>;

    /// Minimum lamports for an account of `data_len` bytes to be rent-exempt
    async fn minimum_balance_for_rent_exemption(&self, data_len: usize) -> Result<u64>;

    /// Latest blockhash (recency anchor)
    async fn latest_blockhash(&self) -> Result<Hash>;

    /// Submit a fully signed transaction, returning its signature
    async fn send_transaction(&self, tx: &Transaction) -> Result<Signature>;

    /// Poll the status of a previously submitted transaction
    async fn signature_status(&self, signature: &Signature) -> Result<LedgerStatus>;
}

#[async_trait]
impl LedgerRpc for RpcClient {
    async fn balance(&self, address: &Pubkey) -> Result<u64> {
        Ok(self.get_balance(address).await?)
    }

    async fn minimum_balance_for_rent_exemption(&self, data_len: usize) -> Result<u64> {
        Ok(self.get_minimum_balance_for_rent_exemption(data_len).await?)
    }

    async fn latest_blockhash(&self) -> Result<Hash> {
        Ok(self.get_latest_blockhash().await?)
    }

    async fn send_transaction(&self, tx: &Transaction) -> Result<Signature> {
        Ok(RpcClient::send_transaction(self, tx).await?)
    }

    async fn signature_status(&self, signature: &Signature) -> Result<LedgerStatus> {
        let response = self.get_signature_statuses(&[*signature]).await?;
        Ok(map_status(response.value.into_iter().next().flatten()))
    }
}

fn map_status(status: Option<TransactionStatus>) -> LedgerStatus {
    match status {
        None => LedgerStatus::Unknown,
        Some(status) => {
            if let Some(err) = status.err {
                LedgerStatus::Failed(err.to_string())
            } else if status.satisfies_commitment(CommitmentConfig::confirmed()) {
                LedgerStatus::Confirmed
            } else {
                LedgerStatus::Processed
            }
        }
    }
}
