//! Mint transaction construction
//!
//! Generates the ephemeral mint keypair, fetches the rent-exemption minimum,
//! builds the four-instruction bundle, and assembles the unsigned transaction
//! with fee payer and recency anchor attached. No retries here: a network
//! failure propagates and the caller decides whether the user retries, which
//! always means a fresh keypair and a rebuilt transaction.

use crate::metadata::MintMetadata;
use crate::pipeline::errors::{MintError, NetworkStage};
use crate::pipeline::instructions::MintInstructionBundle;
use crate::rpc::LedgerRpc;
use solana_sdk::{
    program_pack::Pack,
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    transaction::Transaction,
};

/// The assembled four-instruction transaction before any signature
///
/// Immutable after construction except for the two signature-attachment
/// steps performed by the dual-signer coordinator.
#[derive(Debug)]
pub struct UnsignedMintTransaction {
    /// The transaction: four instructions, fee payer, recent blockhash
    pub tx: Transaction,
    /// Public key of the mint account this transaction creates
    pub mint_address: Pubkey,
    /// Derived associated token account the unit is minted into
    pub associated_token_account: Pubkey,
}

/// Build the unsigned mint transaction for one attempt
///
/// Returns the transaction together with the ephemeral mint keypair. The
/// keypair is handed to the dual-signer coordinator and dropped there; it is
/// never persisted, logged, or reused across attempts. `metadata` is consumed
/// only for its payer identity here; it travels alongside the pipeline for
/// the success echo.
pub async fn build_mint_transaction<R: LedgerRpc + ?Sized>(
    rpc: &R,
    metadata: &MintMetadata,
    payer: &Pubkey,
) -> Result<(UnsignedMintTransaction, Keypair), MintError> {
    debug_assert_eq!(metadata.payer_address, payer.to_string());

    // Fresh keypair per attempt. A previously failed attempt may have
    // partially landed its create-account, so reuse is never safe.
    let mint_keypair = Keypair::new();
    let mint_address = mint_keypair.pubkey();

    let rent_lamports = rpc
        .minimum_balance_for_rent_exemption(spl_token::state::Mint::LEN)
        .await
        .map_err(|e| MintError::Network {
            stage: NetworkStage::RentExemption,
            reason: e.to_string(),
        })?;

    let bundle = MintInstructionBundle::build(&mint_address, payer, rent_lamports)?;

    let recent_blockhash = rpc.latest_blockhash().await.map_err(|e| MintError::Network {
        stage: NetworkStage::BlockhashFetch,
        reason: e.to_string(),
    })?;

    let mut tx = Transaction::new_with_payer(&bundle.instructions()[..], Some(payer));
    tx.message.recent_blockhash = recent_blockhash;

    Ok((
        UnsignedMintTransaction {
            tx,
            mint_address,
            associated_token_account: bundle.associated_token_account,
        },
        mint_keypair,
    ))
}
