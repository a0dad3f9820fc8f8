//! Broadcast and confirmation tracking
//!
//! Submits the fully signed transaction and polls signature status until the
//! network reports it confirmed, it fails on-chain, or the configured wait
//! window elapses. Rejection messages from the network are preserved verbatim
//! for diagnostics.

use crate::pipeline::errors::{MintError, NetworkStage};
use crate::pipeline::signing::SignedMintTransaction;
use crate::rpc::{LedgerRpc, LedgerStatus};
use crate::structured_logging::StructuredLogger;
use solana_sdk::signature::Signature;
use std::time::Duration;
use tokio::time::Instant;

/// Confirmation wait policy
#[derive(Debug, Clone, Copy)]
pub struct ConfirmPolicy {
    /// Total wait window before giving up
    pub timeout: Duration,
    /// Interval between status polls
    pub poll_interval: Duration,
}

impl Default for ConfirmPolicy {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(60),
            poll_interval: Duration::from_millis(500),
        }
    }
}

/// Submit the transaction and block until a definitive outcome
///
/// Returns the transaction signature once the network reports confirmed
/// commitment.
pub async fn broadcast_and_confirm<R: LedgerRpc + ?Sized>(
    rpc: &R,
    signed: &SignedMintTransaction,
    policy: ConfirmPolicy,
    logger: &StructuredLogger,
) -> Result<Signature, MintError> {
    let signature = rpc
        .send_transaction(signed.transaction())
        .await
        .map_err(|e| MintError::BroadcastRejected {
            reason: e.to_string(),
        })?;

    logger.log_broadcast(&signature.to_string());

    let started = Instant::now();
    loop {
        if started.elapsed() >= policy.timeout {
            return Err(MintError::ConfirmationTimeout {
                signature: signature.to_string(),
                waited_ms: started.elapsed().as_millis() as u64,
            });
        }

        match rpc.signature_status(&signature).await {
            Ok(LedgerStatus::Confirmed) => return Ok(signature),
            Ok(LedgerStatus::Failed(reason)) => {
                return Err(MintError::BroadcastRejected { reason });
            }
            Ok(LedgerStatus::Unknown) | Ok(LedgerStatus::Processed) => {}
            Err(e) => {
                return Err(MintError::Network {
                    stage: NetworkStage::StatusPoll,
                    reason: e.to_string(),
                });
            }
        }

        tokio::time::sleep(policy.poll_interval).await;
    }
}
