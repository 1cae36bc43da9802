// Management fee breakdown: HT, TVA, TTC and owner net
//
// Rounding is half away from zero, per returned field, from full-precision
// intermediates.

use gerance::core::AppError;
use gerance::fees::FeeCalculator;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn test_paris_rent_at_seven_percent() {
    let fees = FeeCalculator::compute_fees(dec!(1000), dec!(0.07), "75000").unwrap();

    assert_eq!(fees.fee_amount_ht, dec!(70.00));
    assert_eq!(fees.vat_amount, dec!(14.00));
    assert_eq!(fees.total_ttc, dec!(84.00));
    assert_eq!(fees.net_to_owner, dec!(916.00));
}

#[test]
fn test_martinique_rent_at_seven_percent() {
    let fees = FeeCalculator::compute_fees(dec!(1000), dec!(0.07), "97200").unwrap();

    assert_eq!(fees.vat_rate, dec!(0.085));
    assert_eq!(fees.vat_amount, dec!(5.95));
    assert_eq!(fees.total_ttc, dec!(75.95));
    assert_eq!(fees.net_to_owner, dec!(924.05));
}

#[test]
fn test_half_cent_rounds_away_from_zero() {
    // 0.25 × 0.5 = 0.125 -> 0.13
    let fees = FeeCalculator::compute_fees(dec!(0.25), dec!(0.5), "97300").unwrap();
    assert_eq!(fees.fee_amount_ht, dec!(0.13));
    assert_eq!(fees.net_to_owner, dec!(0.13));

    let fees = FeeCalculator::compute_fees(dec!(-0.25), dec!(0.5), "97300").unwrap();
    assert_eq!(fees.fee_amount_ht, dec!(-0.13));
}

#[test]
fn test_rent_beyond_decimal_range_is_a_validation_error() {
    let err = FeeCalculator::compute_fees(Decimal::MAX, Decimal::ONE, "75000").unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
    assert!(err.to_string().contains("total_ttc"));
}

#[test]
fn test_amounts_carry_two_decimals() {
    let fees = FeeCalculator::compute_fees(dec!(1000), dec!(0.07), "75000").unwrap();
    let json = serde_json::to_value(&fees).unwrap();

    assert_eq!(json["total_ttc"], "84.00");
    assert_eq!(json["net_to_owner"], "916.00");
}

proptest! {
    #[test]
    fn test_calculation_is_deterministic(
        rent_cents in 0i64..10_000_000i64,
        rate_bp in 0i64..=10_000i64,
        code in prop::sample::select(vec!["75000", "97200", "97300", "97400", "97600"])
    ) {
        let rent = Decimal::new(rent_cents, 2);
        let rate = Decimal::new(rate_bp, 4);

        let first = FeeCalculator::compute_fees(rent, rate, code).unwrap();
        let second = FeeCalculator::compute_fees(rent, rate, code).unwrap();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_net_plus_fees_is_within_a_cent_of_rent(
        rent_cents in 0i64..10_000_000i64,
        rate_bp in 0i64..2_000i64
    ) {
        let rent = Decimal::new(rent_cents, 2);
        let fees = FeeCalculator::compute_fees(rent, Decimal::new(rate_bp, 4), "75000").unwrap();

        let drift = (fees.net_to_owner + fees.total_ttc - rent).abs();
        prop_assert!(drift <= dec!(0.01), "drift {} too large", drift);
    }

    #[test]
    fn test_zero_rate_leaves_rent_untouched(rent_cents in 0i64..10_000_000i64) {
        let rent = Decimal::new(rent_cents, 2);
        let fees = FeeCalculator::compute_fees(rent, Decimal::ZERO, "75000").unwrap();

        prop_assert_eq!(fees.total_ttc, Decimal::ZERO);
        prop_assert_eq!(fees.net_to_owner, rent);
    }

    #[test]
    fn test_exempt_territories_charge_no_vat(
        rent_cents in 0i64..10_000_000i64,
        rate_bp in 0i64..2_000i64
    ) {
        let fees = FeeCalculator::compute_fees(Decimal::new(rent_cents, 2), Decimal::new(rate_bp, 4), "97600").unwrap();

        prop_assert_eq!(fees.vat_amount, Decimal::ZERO);
        prop_assert_eq!(fees.total_ttc, fees.fee_amount_ht);
    }
}
