//! Tests for the Fund entity and its wire shape

use domain_fund::Fund;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn test_nav_survives_json_round_trip_exactly() {
    let fund = Fund::new("Growth Fund", "GRW", dec!(123.456789));

    let json = serde_json::to_string(&fund).unwrap();
    let back: Fund = serde_json::from_str(&json).unwrap();

    assert_eq!(back.nav, dec!(123.456789));
    assert_eq!(back.nav.to_string(), "123.456789");
}

#[test]
fn test_zero_and_negative_navs_are_representable() {
    // No validation exists at this layer; degenerate values pass through.
    let zero = Fund::new("", "", Decimal::ZERO);
    let negative = Fund::new("Leveraged Short", "SHRT", dec!(-3.50));

    assert_eq!(zero.nav, Decimal::ZERO);
    assert_eq!(negative.nav, dec!(-3.50));
}

proptest! {
    /// NAV values of any scale up to the store's precision must round-trip
    /// through JSON without drift.
    #[test]
    fn prop_nav_round_trips_without_precision_loss(
        mantissa in any::<i64>(),
        scale in 0u32..=9,
    ) {
        let nav = Decimal::new(mantissa, scale);
        let fund = Fund::new("Prop Fund", "PRP", nav);

        let json = serde_json::to_string(&fund).unwrap();
        let back: Fund = serde_json::from_str(&json).unwrap();

        prop_assert_eq!(back.nav, nav);
    }
}
