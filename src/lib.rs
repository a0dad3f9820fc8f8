//! Mint Cam - Geo-tagged Photo NFT Minting Library
//!
//! Turn a captured photo into a one-of-one non-fungible token: host the
//! image, tag it with the device's coordinates, and mint exactly one unit of
//! a fresh zero-decimal SPL mint in a single atomic transaction signed by the
//! user's wallet and an ephemeral mint keypair.
//!
//! The core is [`pipeline::MintPipeline`]; camera capture, location
//! permissions, image hosting, and rendering are external collaborators
//! modeled as traits or standalone clients.

pub mod config;
pub mod hosting;
pub mod metadata;
pub mod pipeline;
pub mod rpc;
pub mod structured_logging;
pub mod wallet;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use metadata::{assemble, MintMetadata};
pub use pipeline::{MintError, MintOutcome, MintPipeline, MintPolicy, MintView};
pub use solana_sdk::{pubkey::Pubkey, signature::Signature};
