// VAT resolution by postal code prefix
//
// Metropolitan codes resolve to 20%, Guadeloupe/Martinique/Réunion to 8.5%,
// Guyane and Mayotte to 0%.

use gerance::taxes::{resolve_vat_rate, Territory};
use proptest::prelude::*;
use rust_decimal_macros::dec;

#[test]
fn test_metropolitan_codes() {
    for code in ["75000", "69000", "13001", "33000", "20000", "98000"] {
        assert_eq!(resolve_vat_rate(code), dec!(0.20), "postal code {}", code);
    }
}

#[test]
fn test_antilles_and_reunion() {
    assert_eq!(resolve_vat_rate("97100"), dec!(0.085));
    assert_eq!(resolve_vat_rate("97200"), dec!(0.085));
    assert_eq!(resolve_vat_rate("97400"), dec!(0.085));
}

#[test]
fn test_guyane_and_mayotte_are_exempt() {
    assert_eq!(resolve_vat_rate("97300"), dec!(0));
    assert_eq!(resolve_vat_rate("97600"), dec!(0));
}

#[test]
fn test_empty_code_is_metropole() {
    assert_eq!(resolve_vat_rate(""), dec!(0.20));
    assert_eq!(Territory::from_postal_code(""), Territory::Metropole);
}

proptest! {
    #[test]
    fn test_only_prefix_matters(suffix in "[0-9]{0,4}") {
        prop_assert_eq!(resolve_vat_rate(&format!("972{}", suffix)), dec!(0.085));
        prop_assert_eq!(resolve_vat_rate(&format!("973{}", suffix)), dec!(0));
    }

    #[test]
    fn test_mainland_departments_are_twenty_percent(department in 1u32..96u32, rest in 0u32..1000u32) {
        let code = format!("{:02}{:03}", department, rest);
        prop_assert_eq!(resolve_vat_rate(&code), dec!(0.20));
    }

    #[test]
    fn test_resolution_never_panics(code in "\\PC*") {
        let rate = resolve_vat_rate(&code);
        prop_assert!(rate == dec!(0.20) || rate == dec!(0.085) || rate == dec!(0));
    }
}
