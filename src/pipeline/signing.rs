//! Dual-signer coordination
//!
//! Two distinct parties sign the mint transaction: the user's wallet (fee
//! payer) and the ephemeral mint keypair (authorizes creation of the account
//! it names). Protocol: re-authorize the wallet session, request the wallet
//! signature (interactive, suspends until the user decides, no
//! pipeline-imposed timeout), then apply the mint keypair's partial signature
//! locally. The mint keypair is consumed by value and dropped when this stage
//! returns, so its private material cannot outlive the attempt.

use crate::pipeline::builder::UnsignedMintTransaction;
use crate::pipeline::errors::MintError;
use crate::wallet::WalletSession;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    transaction::Transaction,
};

/// A transaction carrying both required signatures
///
/// Constructible only through [`sign_mint_transaction`], which verifies both
/// signatures are present. A transaction with only one signature can never
/// reach the broadcast stage.
#[derive(Debug)]
pub struct SignedMintTransaction {
    tx: Transaction,
    /// Public key of the mint account this transaction creates
    pub mint_address: Pubkey,
}

impl SignedMintTransaction {
    /// The fully signed transaction, ready for broadcast
    pub fn transaction(&self) -> &Transaction {
        &self.tx
    }
}

/// Obtain both signatures over the unsigned transaction
///
/// Signing order is wallet first, mint keypair second; both must be attached
/// before broadcast regardless of order. The wallet declining, or returning a
/// transaction whose message differs from the one it was given, maps to
/// [`MintError::SigningRejected`].
pub async fn sign_mint_transaction<W: WalletSession + ?Sized>(
    wallet: &W,
    unsigned: UnsignedMintTransaction,
    mint_keypair: Keypair,
) -> Result<SignedMintTransaction, MintError> {
    // The session may have expired between navigation and the mint action
    wallet
        .authorize()
        .await
        .map_err(|e| MintError::SigningRejected(format!("authorization declined: {}", e)))?;

    let expected_message = unsigned.tx.message_data();
    let mint_address = unsigned.mint_address;

    let mut signed = wallet
        .sign_transaction(unsigned.tx)
        .await
        .map_err(|e| MintError::SigningRejected(e.to_string()))?;

    // Malformed wallet responses must not reach broadcast
    if signed.message_data() != expected_message {
        return Err(MintError::SigningRejected(
            "wallet returned a transaction with an altered message".to_string(),
        ));
    }
    if signed.signatures.first().copied().unwrap_or_default() == Signature::default() {
        return Err(MintError::SigningRejected(
            "wallet returned a transaction without a fee-payer signature".to_string(),
        ));
    }

    let recent_blockhash = signed.message.recent_blockhash;
    signed
        .try_partial_sign(&[&mint_keypair], recent_blockhash)
        .map_err(|e| MintError::SigningRejected(format!("mint keypair signing failed: {}", e)))?;

    if !signed.is_signed() {
        return Err(MintError::SigningRejected(
            "transaction is missing a required signature".to_string(),
        ));
    }

    // mint_keypair drops here; the private key never leaves this scope
    Ok(SignedMintTransaction {
        tx: signed,
        mint_address,
    })
}
