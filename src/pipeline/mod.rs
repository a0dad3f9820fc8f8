//! Mint orchestration pipeline
//!
//! Takes assembled metadata and a connected wallet session, and produces a
//! confirmed, atomic, four-instruction ledger transaction that allocates a
//! new mint account, initializes it as a non-fungible mint, creates the
//! payer's associated token account, and mints exactly one unit into it.
//!
//! ## Architecture
//!
//! The pipeline is split into focused modules:
//! - **errors**: terminal error taxonomy for one attempt
//! - **preflight**: payer balance check before any allocation
//! - **instructions**: the fixed four-instruction bundle
//! - **builder**: unsigned transaction assembly with fee payer and recency anchor
//! - **signing**: dual-signer coordination (wallet + ephemeral mint keypair)
//! - **broadcast**: submission and confirmation tracking
//! - **outcome**: terminal sum type and view routing
//!
//! ## Control flow
//!
//! preflight → build → sign → broadcast → outcome. Each stage either advances
//! or short-circuits into the failure path; every invocation terminates in
//! exactly one [`MintOutcome`] variant.
//!
//! ## Resource model
//!
//! One sequential flow per attempt. The RPC handle is shared and stateless;
//! the mint keypair is exclusive to one attempt and regenerated on every
//! retry. Re-entry is serialized through an async mutex so at most one
//! attempt runs per pipeline instance at a time.

pub mod errors;
pub use errors::{MintError, NetworkStage};

pub mod broadcast;
pub mod builder;
pub mod instructions;
pub mod outcome;
pub mod preflight;
pub mod signing;

pub use broadcast::ConfirmPolicy;
pub use builder::UnsignedMintTransaction;
pub use instructions::MintInstructionBundle;
pub use outcome::{route, MintOutcome, MintView};
pub use signing::SignedMintTransaction;

use crate::config::MintConfig;
use crate::metadata::MintMetadata;
use crate::rpc::LedgerRpc;
use crate::structured_logging::PipelineContext;
use crate::wallet::WalletSession;
use solana_sdk::{pubkey::Pubkey, signature::Signature};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// Policy knobs for one pipeline instance
#[derive(Debug, Clone, Copy)]
pub struct MintPolicy {
    /// Minimum payer balance in lamports before an attempt starts
    pub preflight_min_lamports: u64,
    /// Confirmation wait policy
    pub confirm: ConfirmPolicy,
}

impl From<&MintConfig> for MintPolicy {
    fn from(config: &MintConfig) -> Self {
        Self {
            preflight_min_lamports: config.preflight_min_lamports(),
            confirm: ConfirmPolicy {
                timeout: config.confirm_timeout(),
                poll_interval: config.confirm_poll_interval(),
            },
        }
    }
}

/// The mint orchestration pipeline
///
/// Holds the shared RPC handle, the wallet session, and the policy values.
/// Safe to share across tasks; concurrent `mint` calls serialize.
pub struct MintPipeline<R: LedgerRpc + ?Sized, W: WalletSession + ?Sized> {
    rpc: Arc<R>,
    wallet: Arc<W>,
    policy: MintPolicy,
    // Serializes re-entry: at most one attempt in flight per instance
    in_flight: Mutex<()>,
}

impl<R: LedgerRpc + ?Sized, W: WalletSession + ?Sized> MintPipeline<R, W> {
    pub fn new(rpc: Arc<R>, wallet: Arc<W>, policy: MintPolicy) -> Self {
        Self {
            rpc,
            wallet,
            policy,
            in_flight: Mutex::new(()),
        }
    }

    /// Run one mint attempt to its terminal outcome
    ///
    /// Never panics and never swallows a failure: every invocation returns
    /// exactly one [`MintOutcome`] variant. A user-initiated retry is simply
    /// another call, which regenerates the ephemeral keypair and rebuilds the
    /// transaction from scratch.
    pub async fn mint(&self, metadata: MintMetadata) -> MintOutcome {
        let _guard = self.in_flight.lock().await;
        let ctx = PipelineContext::new("mint");
        let started = Instant::now();

        match self.run_stages(&ctx, &metadata).await {
            Ok((mint_address, signature)) => {
                ctx.logger.log_confirmed(
                    &mint_address.to_string(),
                    &signature.to_string(),
                    started.elapsed().as_millis() as u64,
                );
                MintOutcome::Success {
                    mint_address,
                    signature,
                    metadata,
                }
            }
            Err(error) => {
                ctx.logger.log_mint_failure(&error.to_string());
                MintOutcome::Failure { error }
            }
        }
    }

    async fn run_stages(
        &self,
        ctx: &PipelineContext,
        metadata: &MintMetadata,
    ) -> Result<(Pubkey, Signature), MintError> {
        let payer = self.wallet.pubkey();

        let balance = preflight::check_balance(
            self.rpc.as_ref(),
            &payer,
            self.policy.preflight_min_lamports,
        )
        .await?;
        ctx.logger.log_preflight(
            &payer.to_string(),
            balance,
            self.policy.preflight_min_lamports,
        );

        let (unsigned, mint_keypair) =
            builder::build_mint_transaction(self.rpc.as_ref(), metadata, &payer).await?;
        let mint_address = unsigned.mint_address;
        ctx.logger.log_transaction_built(
            &mint_address.to_string(),
            unsigned.tx.message.instructions.len() as u64,
        );

        let signed =
            signing::sign_mint_transaction(self.wallet.as_ref(), unsigned, mint_keypair).await?;
        ctx.logger.log_wallet_signed(&payer.to_string());

        let signature = broadcast::broadcast_and_confirm(
            self.rpc.as_ref(),
            &signed,
            self.policy.confirm,
            &ctx.logger,
        )
        .await?;

        Ok((mint_address, signature))
    }
}
