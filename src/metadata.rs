//! Metadata assembly for geo-tagged photo NFTs
//!
//! Pure construction: merges the hosted image URL, the optional capture
//! location, and the payer identity into an immutable [`MintMetadata`]
//! record. Has no failure path; a denied or unavailable location degrades to
//! zero-valued coordinate attributes rather than blocking the mint.

use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

/// Token name applied to every minted photo
pub const TOKEN_NAME: &str = "Geo-Tagged NFT";

/// Token symbol applied to every minted photo
pub const TOKEN_SYMBOL: &str = "GEO";

/// Token description applied to every minted photo
pub const TOKEN_DESCRIPTION: &str = "A unique geo-tagged NFT captured with MintCam";

/// A single trait entry on the minted token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    /// Trait key (e.g. "Latitude")
    pub trait_type: String,
    /// Numeric trait value
    pub value: f64,
}

/// Immutable metadata record for one mint attempt
///
/// Owned exclusively by the pipeline invocation that created it; never shared
/// across concurrent mint attempts. Always carries exactly two attributes,
/// `Latitude` and `Longitude`, in that order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MintMetadata {
    /// Token name
    pub name: String,
    /// Token symbol
    pub symbol: String,
    /// Token description
    pub description: String,
    /// Publicly reachable URL of the hosted image
    pub image_uri: String,
    /// Base58 form of the payer's public key
    pub payer_address: String,
    /// Ordered trait entries (always Latitude then Longitude)
    pub attributes: Vec<Attribute>,
}

/// Source of the device's current coordinates
///
/// External collaborator: the capture layer implements this. `None` signals
/// permission denial or unavailable hardware.
pub trait LocationSource: Send + Sync {
    /// Current (latitude, longitude), if available
    fn current_location(&self) -> Option<(f64, f64)>;
}

/// Assemble the metadata record for one mint attempt
///
/// Absent location degrades to (0.0, 0.0) attributes; there is no failure
/// path.
pub fn assemble(image_uri: String, location: Option<(f64, f64)>, payer: &Pubkey) -> MintMetadata {
    let (latitude, longitude) = location.unwrap_or((0.0, 0.0));
    MintMetadata {
        name: TOKEN_NAME.to_string(),
        symbol: TOKEN_SYMBOL.to_string(),
        description: TOKEN_DESCRIPTION.to_string(),
        image_uri,
        payer_address: payer.to_string(),
        attributes: vec![
            Attribute {
                trait_type: "Latitude".to_string(),
                value: latitude,
            },
            Attribute {
                trait_type: "Longitude".to_string(),
                value: longitude,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assembled_metadata_has_fixed_coordinate_attributes() {
        let payer = Pubkey::new_unique();
        let meta = assemble(
            "https://img.example/photo.jpg".to_string(),
            Some((52.2297, 21.0122)),
            &payer,
        );

        assert_eq!(meta.attributes.len(), 2);
        assert_eq!(meta.attributes[0].trait_type, "Latitude");
        assert_eq!(meta.attributes[0].value, 52.2297);
        assert_eq!(meta.attributes[1].trait_type, "Longitude");
        assert_eq!(meta.attributes[1].value, 21.0122);
        assert_eq!(meta.payer_address, payer.to_string());
        assert_eq!(meta.name, TOKEN_NAME);
        assert_eq!(meta.symbol, TOKEN_SYMBOL);
    }

    #[test]
    fn token_constants_are_the_fixed_app_values() {
        assert_eq!(TOKEN_NAME, "Geo-Tagged NFT");
        assert_eq!(TOKEN_SYMBOL, "GEO");
        assert_eq!(
            TOKEN_DESCRIPTION,
            "A unique geo-tagged NFT captured with MintCam"
        );
    }

    #[test]
    fn missing_location_degrades_to_zero_attributes() {
        let payer = Pubkey::new_unique();
        let meta = assemble("https://img.example/p.jpg".to_string(), None, &payer);

        assert_eq!(meta.attributes.len(), 2);
        assert_eq!(meta.attributes[0].value, 0.0);
        assert_eq!(meta.attributes[1].value, 0.0);
    }
}
