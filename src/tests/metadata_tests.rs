//! Metadata assembler property tests

use crate::metadata::{self, TOKEN_DESCRIPTION, TOKEN_NAME, TOKEN_SYMBOL};
use proptest::prelude::*;
use solana_sdk::pubkey::Pubkey;

proptest! {
    /// Every assembled record has exactly the two coordinate attributes, in
    /// order, carrying the capture values
    #[test]
    fn always_exactly_two_coordinate_attributes(
        lat in -90.0f64..=90.0,
        lon in -180.0f64..=180.0,
    ) {
        let payer = Pubkey::new_unique();
        let meta = metadata::assemble("https://img.example/p.jpg".to_string(), Some((lat, lon)), &payer);

        prop_assert_eq!(meta.attributes.len(), 2);
        prop_assert_eq!(meta.attributes[0].trait_type.as_str(), "Latitude");
        prop_assert_eq!(meta.attributes[1].trait_type.as_str(), "Longitude");
        prop_assert_eq!(meta.attributes[0].value, lat);
        prop_assert_eq!(meta.attributes[1].value, lon);
    }

    /// The fixed constants are applied regardless of inputs
    #[test]
    fn fixed_constants_are_always_applied(uri in "https://[a-z]{3,12}\\.example/[a-z0-9]{1,16}") {
        let payer = Pubkey::new_unique();
        let meta = metadata::assemble(uri.clone(), None, &payer);

        prop_assert_eq!(meta.name.as_str(), TOKEN_NAME);
        prop_assert_eq!(meta.symbol.as_str(), TOKEN_SYMBOL);
        prop_assert_eq!(meta.description.as_str(), TOKEN_DESCRIPTION);
        prop_assert_eq!(meta.image_uri, uri);
        prop_assert_eq!(meta.payer_address, payer.to_string());
    }
}

#[test]
fn serializes_with_trait_type_keys() {
    let payer = Pubkey::new_unique();
    let meta = metadata::assemble(
        "https://img.example/p.jpg".to_string(),
        Some((1.5, -2.5)),
        &payer,
    );

    let json = serde_json::to_value(&meta).unwrap();
    assert_eq!(json["attributes"][0]["trait_type"], "Latitude");
    assert_eq!(json["attributes"][0]["value"], 1.5);
    assert_eq!(json["attributes"][1]["trait_type"], "Longitude");
    assert_eq!(json["attributes"][1]["value"], -2.5);
}
