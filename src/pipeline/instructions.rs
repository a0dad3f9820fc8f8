//! Instruction planning for the atomic mint bundle
//!
//! A non-fungible mint is four instructions that must land together, in this
//! order (later instructions reference accounts created by earlier ones
//! within the same atomic transaction):
//! 1. create-account: allocate the mint account under the ephemeral keypair,
//!    funded by the payer, sized for the token program's mint layout
//! 2. initialize-mint: zero decimals, mint and freeze authority = payer
//! 3. create-associated-token-account: for the address derived from
//!    (payer, mint) - a stateless derivation, no network round trip
//! 4. mint-to: exactly one unit into the associated account
//!
//! The bundle is a fixed-length array so the instruction count and order are
//! construction-time invariants rather than runtime assumptions.

use crate::pipeline::errors::MintError;
use solana_sdk::{
    instruction::Instruction, program_pack::Pack, pubkey::Pubkey, system_instruction,
    system_program,
};

/// Number of units minted; one indivisible token
const NFT_SUPPLY: u64 = 1;

/// Decimal places; zero makes the token indivisible
const NFT_DECIMALS: u8 = 0;

/// The fixed four-instruction mint bundle
#[derive(Debug, Clone)]
pub struct MintInstructionBundle {
    instructions: [Instruction; 4],
    /// Associated token account the single unit is minted into
    pub associated_token_account: Pubkey,
}

impl MintInstructionBundle {
    /// Build the bundle for a fresh mint under `mint` paid for by `payer`
    ///
    /// `rent_lamports` is the rent-exemption minimum for a mint-sized
    /// account, fetched by the caller.
    pub fn build(mint: &Pubkey, payer: &Pubkey, rent_lamports: u64) -> Result<Self, MintError> {
        let create_account_ix = system_instruction::create_account(
            payer,
            mint,
            rent_lamports,
            spl_token::state::Mint::LEN as u64,
            &spl_token::id(),
        );

        let initialize_mint_ix = spl_token::instruction::initialize_mint(
            &spl_token::id(),
            mint,
            payer,
            Some(payer),
            NFT_DECIMALS,
        )
        .map_err(|e| MintError::Internal(format!("initialize_mint encode failed: {}", e)))?;

        let associated_token_account =
            spl_associated_token_account::get_associated_token_address(payer, mint);

        let create_ata_ix = spl_associated_token_account::instruction::create_associated_token_account(
            payer,
            payer,
            mint,
            &spl_token::id(),
        );

        let mint_to_ix = spl_token::instruction::mint_to(
            &spl_token::id(),
            mint,
            &associated_token_account,
            payer,
            &[],
            NFT_SUPPLY,
        )
        .map_err(|e| MintError::Internal(format!("mint_to encode failed: {}", e)))?;

        let bundle = Self {
            instructions: [
                create_account_ix,
                initialize_mint_ix,
                create_ata_ix,
                mint_to_ix,
            ],
            associated_token_account,
        };
        debug_assert!(sanity_check_ix_order(bundle.instructions()).is_ok());
        Ok(bundle)
    }

    /// The ordered instructions
    pub fn instructions(&self) -> &[Instruction; 4] {
        &self.instructions
    }
}

/// Verify the fixed bundle ordering (debug/test only in the hot path)
///
/// Checks program ids and instruction discriminators:
/// system create-account (tag 0), token initialize-mint (tag 0), associated
/// token program, token mint-to (tag 7).
pub fn sanity_check_ix_order(instructions: &[Instruction; 4]) -> Result<(), String> {
    if instructions[0].program_id != system_program::id() {
        return Err(format!(
            "instruction 0 must be system create-account, got program {}",
            instructions[0].program_id
        ));
    }
    // create_account discriminator: u32 LE 0
    if instructions[0].data.len() < 4 || instructions[0].data[..4] != [0, 0, 0, 0] {
        return Err("instruction 0 is not create-account".to_string());
    }

    if instructions[1].program_id != spl_token::id() {
        return Err(format!(
            "instruction 1 must be token initialize-mint, got program {}",
            instructions[1].program_id
        ));
    }
    // TokenInstruction::InitializeMint tag 0, decimals byte follows
    if instructions[1].data.first() != Some(&0) {
        return Err("instruction 1 is not initialize-mint".to_string());
    }
    if instructions[1].data.get(1) != Some(&NFT_DECIMALS) {
        return Err("initialize-mint must use zero decimals".to_string());
    }

    if instructions[2].program_id != spl_associated_token_account::id() {
        return Err(format!(
            "instruction 2 must be create-associated-token-account, got program {}",
            instructions[2].program_id
        ));
    }

    if instructions[3].program_id != spl_token::id() {
        return Err(format!(
            "instruction 3 must be token mint-to, got program {}",
            instructions[3].program_id
        ));
    }
    // TokenInstruction::MintTo tag 7, u64 LE amount follows
    if instructions[3].data.first() != Some(&7) {
        return Err("instruction 3 is not mint-to".to_string());
    }
    if instructions[3].data.get(1..9) != Some(&NFT_SUPPLY.to_le_bytes()[..]) {
        return Err("mint-to must mint exactly one unit".to_string());
    }

    Ok(())
}
