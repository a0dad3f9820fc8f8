//! Error types for the mint pipeline
//!
//! Every failure is terminal for the current attempt: nothing here is retried
//! automatically. A retry is a fresh pipeline invocation, which regenerates
//! the ephemeral mint keypair and rebuilds the transaction from scratch.

use thiserror::Error;

/// Network operation during which an RPC failure occurred.
///
/// Carried inside [`MintError::Network`] so diagnostics can tell a failed
/// balance query apart from a failed blockhash fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkStage {
    /// Payer balance query (preflight)
    BalanceQuery,
    /// Rent-exemption minimum query for the mint account
    RentExemption,
    /// Latest blockhash fetch (recency anchor)
    BlockhashFetch,
    /// Signature status poll during confirmation
    StatusPoll,
}

impl std::fmt::Display for NetworkStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            NetworkStage::BalanceQuery => "balance query",
            NetworkStage::RentExemption => "rent exemption query",
            NetworkStage::BlockhashFetch => "blockhash fetch",
            NetworkStage::StatusPoll => "status poll",
        };
        f.write_str(name)
    }
}

/// Terminal error taxonomy for a single mint attempt
///
/// Each variant maps to exactly one way the pipeline can fail:
/// - Preflight: [`MintError::InsufficientBalance`]
/// - Any RPC round trip before broadcast: [`MintError::Network`]
/// - Wallet declined or returned a malformed response: [`MintError::SigningRejected`]
/// - Network rejected the submitted transaction: [`MintError::BroadcastRejected`]
/// - Confirmation wait exceeded the configured window: [`MintError::ConfirmationTimeout`]
#[derive(Error, Debug)]
pub enum MintError {
    /// Payer balance is below the configured preflight threshold
    ///
    /// The threshold is a deliberate safety margin above the rent-exemption
    /// minimum computed later during transaction building. Checked before any
    /// keypair is generated or network write performed.
    #[error("insufficient balance: {current} lamports available, {required} required")]
    InsufficientBalance {
        /// Current payer balance in lamports
        current: u64,
        /// Configured minimum in lamports
        required: u64,
    },

    /// An RPC query failed before broadcast
    #[error("network error during {stage}: {reason}")]
    Network {
        /// Which round trip failed
        stage: NetworkStage,
        /// Underlying client error message
        reason: String,
    },

    /// The wallet declined to sign, or returned a malformed transaction
    ///
    /// Also covers a wallet response that altered the instruction set or
    /// omitted the fee-payer signature. No broadcast happens after this.
    #[error("wallet signing rejected: {0}")]
    SigningRejected(String),

    /// The network rejected the submitted transaction
    ///
    /// The rejection message is preserved verbatim for diagnostics
    /// (duplicate, expired blockhash, simulation failure, ...).
    #[error("broadcast rejected: {reason}")]
    BroadcastRejected {
        /// Verbatim rejection message from the network
        reason: String,
    },

    /// The network did not confirm the transaction within the wait window
    #[error("confirmation timed out after {waited_ms}ms (signature: {signature})")]
    ConfirmationTimeout {
        /// Signature of the submitted transaction
        signature: String,
        /// How long the tracker waited before giving up
        waited_ms: u64,
    },

    /// Internal invariant violation
    ///
    /// Instruction encoding for well-formed program ids cannot fail in
    /// practice; this variant exists so those paths still propagate instead
    /// of panicking.
    #[error("internal error: {0}")]
    Internal(String),
}
