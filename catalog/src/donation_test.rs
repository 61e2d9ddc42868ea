use super::*;

#[test]
fn custom_amount_150_yields_total_150() {
    let quote = DonationQuote::new(&AmountSelection::Custom("150".into()), Recurrence::OneTime);
    assert!((quote.total - 150.0).abs() < f64::EPSILON);
    assert_eq!(quote.annual_projection(), None);
    assert!(quote.is_payable());
}

#[test]
fn monthly_custom_amount_projects_annual_total() {
    let quote = DonationQuote::new(&AmountSelection::Custom("150".into()), Recurrence::Monthly);
    assert_eq!(quote.annual_projection(), Some(1800.0));
    assert_eq!(quote.summary_label(), "Monthly Donation:");
}

#[test]
fn empty_or_non_numeric_custom_amount_is_zero_and_unpayable() {
    for raw in ["", "   ", "abc", "12abc", "-5", "0", "inf", "NaN"] {
        let quote = DonationQuote::new(&AmountSelection::Custom(raw.into()), Recurrence::OneTime);
        assert!(quote.total.abs() < f64::EPSILON, "{raw:?}");
        assert!(!quote.is_payable(), "{raw:?}");
        assert_eq!(quote.button_label(), "Donate");
    }
}

#[test]
fn custom_amount_accepts_decimals_and_whitespace() {
    assert!((parse_custom_amount(" 12.50 ") - 12.5).abs() < f64::EPSILON);
}

#[test]
fn preset_selection_uses_preset_value() {
    let selection = AmountSelection::Preset(250);
    assert!((selection.value() - 250.0).abs() < f64::EPSILON);
    assert!(selection.is_preset(250));
    assert!(!selection.is_preset(25));
    assert!(!selection.is_custom());
}

#[test]
fn no_selection_is_zero() {
    assert!(AmountSelection::default().value().abs() < f64::EPSILON);
}

#[test]
fn button_label_formats_two_decimals() {
    let quote = DonationQuote::new(&AmountSelection::Preset(100), Recurrence::OneTime);
    assert_eq!(quote.button_label(), "Donate $100.00");
    assert_eq!(quote.summary_label(), "One-time Donation:");
}

#[test]
fn modes_default_to_money_one_time_pickup() {
    assert_eq!(DonationCategory::default(), DonationCategory::Money);
    assert_eq!(Recurrence::default(), Recurrence::OneTime);
    assert_eq!(PickupPreference::default(), PickupPreference::Pickup);
}

#[test]
fn pickup_preference_values_are_distinct() {
    let values: Vec<&str> = PickupPreference::ALL.iter().map(|p| p.value()).collect();
    assert_eq!(values, vec!["pickup", "dropoff", "express"]);
}

#[test]
fn donation_context_resolves_known_ngo() {
    assert_eq!(donation_context(Some("2")).map(|ngo| ngo.name), Some("Clean Water Mumbai"));
}

#[test]
fn donation_context_falls_back_for_missing_or_bad_ids() {
    assert!(donation_context(None).is_none());
    assert!(donation_context(Some("")).is_none());
    assert!(donation_context(Some("abc")).is_none());
    assert!(donation_context(Some("99")).is_none());
}

#[test]
fn designations_start_with_general_fund() {
    assert_eq!(DESIGNATIONS[0].value, "");
    assert_eq!(DESIGNATIONS[0].label, "Where needed most");
}
