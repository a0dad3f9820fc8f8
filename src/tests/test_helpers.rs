//! Test helper utilities
//!
//! Mock implementations of the two external collaborators the pipeline
//! depends on: the ledger RPC and the wallet session. Both record their calls
//! with atomic counters so tests can assert what the pipeline did and, more
//! importantly, did not do.

use crate::rpc::{LedgerRpc, LedgerStatus};
use crate::wallet::WalletSession;
use anyhow::Result;
use async_trait::async_trait;
use solana_sdk::{
    hash::Hash,
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    transaction::Transaction,
};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;

/// Mock ledger with scripted responses and call counters
pub struct MockLedger {
    pub balance: u64,
    pub rent_lamports: u64,
    pub blockhash: Hash,
    /// When set, `balance` fails with this message
    pub balance_error: Option<String>,
    /// When set, `minimum_balance_for_rent_exemption` fails with this message
    pub rent_error: Option<String>,
    /// When set, `latest_blockhash` fails with this message
    pub blockhash_error: Option<String>,
    /// When set, `signature_status` fails with this message
    pub status_error: Option<String>,
    /// When set, `send_transaction` fails with this message
    pub send_error: Option<String>,
    /// Statuses returned by successive polls; when exhausted, `final_status`
    pub status_sequence: Mutex<VecDeque<LedgerStatus>>,
    /// Status returned once the sequence is exhausted
    pub final_status: LedgerStatus,
    /// Every transaction the pipeline actually submitted
    pub sent: Mutex<Vec<Transaction>>,
    pub balance_calls: AtomicU64,
    pub rent_calls: AtomicU64,
    pub blockhash_calls: AtomicU64,
    pub status_calls: AtomicU64,
}

impl MockLedger {
    /// Healthy ledger: 2 SOL balance, instant confirmation
    pub fn healthy() -> Self {
        Self {
            balance: 2_000_000_000,
            rent_lamports: 1_461_600,
            blockhash: Hash::new_unique(),
            balance_error: None,
            rent_error: None,
            blockhash_error: None,
            status_error: None,
            send_error: None,
            status_sequence: Mutex::new(VecDeque::new()),
            final_status: LedgerStatus::Confirmed,
            sent: Mutex::new(Vec::new()),
            balance_calls: AtomicU64::new(0),
            rent_calls: AtomicU64::new(0),
            blockhash_calls: AtomicU64::new(0),
            status_calls: AtomicU64::new(0),
        }
    }

    pub fn with_balance(mut self, lamports: u64) -> Self {
        self.balance = lamports;
        self
    }

    pub fn with_balance_error(mut self, message: &str) -> Self {
        self.balance_error = Some(message.to_string());
        self
    }

    pub fn with_rent_error(mut self, message: &str) -> Self {
        self.rent_error = Some(message.to_string());
        self
    }

    pub fn with_blockhash_error(mut self, message: &str) -> Self {
        self.blockhash_error = Some(message.to_string());
        self
    }

    pub fn with_status_error(mut self, message: &str) -> Self {
        self.status_error = Some(message.to_string());
        self
    }

    pub fn with_send_error(mut self, message: &str) -> Self {
        self.send_error = Some(message.to_string());
        self
    }

    pub fn with_final_status(mut self, status: LedgerStatus) -> Self {
        self.final_status = status;
        self
    }

    pub async fn sent_count(&self) -> usize {
        self.sent.lock().await.len()
    }
}

#[async_trait]
impl LedgerRpc for MockLedger {
    async fn balance(&self, _address: &Pubkey) -> Result<u64> {
        self.balance_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.balance_error {
            anyhow::bail!("{}", message);
        }
        Ok(self.balance)
    }

    async fn minimum_balance_for_rent_exemption(&self, _data_len: usize) -> Result<u64> {
        self.rent_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.rent_error {
            anyhow::bail!("{}", message);
        }
        Ok(self.rent_lamports)
    }

    async fn latest_blockhash(&self) -> Result<Hash> {
        self.blockhash_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.blockhash_error {
            anyhow::bail!("{}", message);
        }
        Ok(self.blockhash)
    }

    async fn send_transaction(&self, tx: &Transaction) -> Result<Signature> {
        if let Some(message) = &self.send_error {
            anyhow::bail!("{}", message);
        }
        self.sent.lock().await.push(tx.clone());
        Ok(tx
            .signatures
            .first()
            .copied()
            .unwrap_or_else(Signature::new_unique))
    }

    async fn signature_status(&self, _signature: &Signature) -> Result<LedgerStatus> {
        self.status_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.status_error {
            anyhow::bail!("{}", message);
        }
        let mut sequence = self.status_sequence.lock().await;
        Ok(sequence.pop_front().unwrap_or(self.final_status.clone()))
    }
}

/// How the mock wallet responds to the interactive steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletMode {
    /// Authorize and sign normally
    Approve,
    /// Decline authorization
    RejectAuthorize,
    /// Authorize, then decline to sign
    RejectSign,
    /// Return the transaction without any signature (malformed response)
    ReturnUnsigned,
}

/// Mock wallet session backed by an in-memory keypair
pub struct MockWallet {
    keypair: Keypair,
    mode: WalletMode,
    pub authorize_calls: AtomicU64,
    pub sign_calls: AtomicU64,
}

impl MockWallet {
    pub fn new(mode: WalletMode) -> Self {
        Self {
            keypair: Keypair::new(),
            mode,
            authorize_calls: AtomicU64::new(0),
            sign_calls: AtomicU64::new(0),
        }
    }
}

#[async_trait]
impl WalletSession for MockWallet {
    fn pubkey(&self) -> Pubkey {
        self.keypair.pubkey()
    }

    async fn authorize(&self) -> Result<()> {
        self.authorize_calls.fetch_add(1, Ordering::SeqCst);
        if self.mode == WalletMode::RejectAuthorize {
            anyhow::bail!("user declined authorization");
        }
        Ok(())
    }

    async fn sign_transaction(&self, mut tx: Transaction) -> Result<Transaction> {
        self.sign_calls.fetch_add(1, Ordering::SeqCst);
        match self.mode {
            WalletMode::RejectSign => anyhow::bail!("user declined to sign"),
            WalletMode::ReturnUnsigned => Ok(tx),
            _ => {
                let recent_blockhash = tx.message.recent_blockhash;
                tx.try_partial_sign(&[&self.keypair], recent_blockhash)?;
                Ok(tx)
            }
        }
    }
}
