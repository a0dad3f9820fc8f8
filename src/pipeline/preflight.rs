//! Balance preflight check
//!
//! Runs before any keypair generation or network write. The threshold is an
//! application policy (default one whole SOL), deliberately over-provisioned
//! relative to the rent-exemption minimum computed later during transaction
//! building, so a mint attempt that is guaranteed to be rejected on-chain
//! fails early and cheaply.

use crate::pipeline::errors::{MintError, NetworkStage};
use crate::rpc::LedgerRpc;
use solana_sdk::pubkey::Pubkey;

/// Check the payer balance against the configured minimum
///
/// Returns the current balance on success so callers can log it.
pub async fn check_balance<R: LedgerRpc + ?Sized>(
    rpc: &R,
    payer: &Pubkey,
    required_lamports: u64,
) -> Result<u64, MintError> {
    let balance = rpc.balance(payer).await.map_err(|e| MintError::Network {
        stage: NetworkStage::BalanceQuery,
        reason: e.to_string(),
    })?;

    if balance < required_lamports {
        return Err(MintError::InsufficientBalance {
            current: balance,
            required: required_lamports,
        });
    }

    Ok(balance)
}
