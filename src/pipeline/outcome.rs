//! Terminal pipeline outcome and view routing

use crate::metadata::MintMetadata;
use crate::pipeline::errors::MintError;
use solana_sdk::{pubkey::Pubkey, signature::Signature};

/// Terminal result of one mint attempt
///
/// Produced exactly once per pipeline invocation: by whichever stage first
/// fails, or by the confirmation tracker on success.
#[derive(Debug)]
pub enum MintOutcome {
    /// The transaction confirmed; the token exists on-chain
    Success {
        /// Address of the newly created mint account
        mint_address: Pubkey,
        /// Signature of the confirmed transaction
        signature: Signature,
        /// The metadata this token was minted with, echoed back
        metadata: MintMetadata,
    },
    /// The attempt failed at some stage
    Failure {
        /// Why the attempt failed
        error: MintError,
    },
}

impl MintOutcome {
    /// Human-readable failure reason, if this is a failure
    pub fn failure_reason(&self) -> Option<String> {
        match self {
            MintOutcome::Success { .. } => None,
            MintOutcome::Failure { error } => Some(error.to_string()),
        }
    }
}

/// UI state the navigation collaborator renders
///
/// The router is a pure mapping; rendering and navigation transitions are the
/// collaborator's concern.
#[derive(Debug, Clone, PartialEq)]
pub enum MintView {
    /// Success view: mint address plus the echoed metadata
    Success {
        mint_address: String,
        metadata: MintMetadata,
    },
    /// Failure view: human-readable reason
    Failure { reason: String },
}

/// Map the terminal outcome to a view state
pub fn route(outcome: MintOutcome) -> MintView {
    match outcome {
        MintOutcome::Success {
            mint_address,
            metadata,
            ..
        } => MintView::Success {
            mint_address: mint_address.to_string(),
            metadata,
        },
        MintOutcome::Failure { error } => MintView::Failure {
            reason: error.to_string(),
        },
    }
}
