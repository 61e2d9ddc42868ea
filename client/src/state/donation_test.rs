use super::*;

fn money_form(amount: AmountSelection) -> DonationFormState {
    DonationFormState {
        amount,
        ..DonationFormState::default()
    }
}

#[test]
fn default_form_is_idle_money_one_time_without_amount() {
    let form = DonationFormState::default();
    assert_eq!(form.category, DonationCategory::Money);
    assert_eq!(form.recurrence, Recurrence::OneTime);
    assert_eq!(form.amount, AmountSelection::None);
    assert_eq!(form.phase, SubmitPhase::Idle);
    assert!(!form.can_submit());
    assert_eq!(form.submit_label(), "Donate");
}

#[test]
fn custom_amount_with_monthly_recurrence_projects_annual_total() {
    let mut form = DonationFormState::default();
    form.choose_custom();
    form.set_custom_text("150".to_owned());
    form.recurrence = Recurrence::Monthly;

    let quote = form.quote();
    assert!((quote.total - 150.0).abs() < f64::EPSILON);
    assert_eq!(quote.annual_projection(), Some(1800.0));
    assert_eq!(form.submit_label(), "Donate $150.00");
    assert!(form.can_submit());
}

#[test]
fn malformed_custom_amount_disables_submit() {
    let mut form = DonationFormState::default();
    form.choose_custom();
    form.set_custom_text("abc".to_owned());
    assert!(form.amount.is_custom());
    assert!(!form.can_submit());
    assert!(!form.begin_submit());
    assert_eq!(form.phase, SubmitPhase::Idle);
}

#[test]
fn choose_custom_keeps_typed_text() {
    let mut form = DonationFormState::default();
    form.set_custom_text("42".to_owned());
    form.choose_custom();
    assert_eq!(form.custom_text(), "42");
}

#[test]
fn preset_replaces_custom_text() {
    let mut form = DonationFormState::default();
    form.set_custom_text("42".to_owned());
    form.choose_preset(250);
    assert!(form.amount.is_preset(250));
    assert_eq!(form.custom_text(), "");
}

#[test]
fn switching_to_items_clears_amount() {
    let mut form = money_form(AmountSelection::Preset(100));
    form.set_category(DonationCategory::Items);
    assert_eq!(form.amount, AmountSelection::None);
    assert!(!form.can_submit());

    form.item_description = "  ".to_owned();
    assert!(!form.can_submit());
    form.item_description = "Two boxes of books".to_owned();
    assert!(form.can_submit());
    assert_eq!(form.submit_label(), "Schedule Item Donation");
}

#[test]
fn reselecting_same_category_keeps_amount() {
    let mut form = money_form(AmountSelection::Preset(50));
    form.set_category(DonationCategory::Money);
    assert!(form.amount.is_preset(50));
}

#[test]
fn submit_lifecycle_confirms_and_reenables_submit() {
    let mut form = money_form(AmountSelection::Preset(100));
    assert!(form.begin_submit());
    assert!(form.is_submitting());
    assert_eq!(form.submit_label(), "Processing...");
    assert!(!form.can_submit());
    assert!(!form.begin_submit());

    form.finish_submit();
    assert_eq!(form.phase, SubmitPhase::Confirmed);
    assert!(form.amount.is_preset(100));
    assert_eq!(form.confirmation(), Some(CONFIRMATION_MESSAGE));
    assert!(form.can_submit());
    assert_eq!(form.submit_label(), "Donate $100.00");

    form.dismiss_confirmation();
    assert_eq!(form.phase, SubmitPhase::Idle);
    assert_eq!(form.confirmation(), None);
}

#[test]
fn finish_without_begin_is_ignored() {
    let mut form = money_form(AmountSelection::Preset(25));
    form.finish_submit();
    assert_eq!(form.phase, SubmitPhase::Idle);
    assert!(form.amount.is_preset(25));
}

#[test]
fn simulated_delay_is_two_seconds() {
    assert_eq!(SIMULATED_SUBMIT_DELAY.as_millis(), 2000);
}

#[test]
fn donor_fields_round_trip_through_accessors() {
    let mut donor = DonorDetails::default();
    for field in DonorField::ALL {
        donor.set(field, field.id().to_owned());
    }
    assert_eq!(donor.first_name, "first-name");
    assert_eq!(donor.postal_code, "zip");
    assert_eq!(donor.get(DonorField::Email), "email");
}

#[test]
fn only_name_and_email_are_required() {
    let required: Vec<_> = DonorField::ALL
        .into_iter()
        .filter(|field| field.required())
        .collect();
    assert_eq!(
        required,
        vec![DonorField::FirstName, DonorField::LastName, DonorField::Email]
    );
    assert_eq!(DonorField::Phone.input_type(), "tel");
}

#[test]
fn item_donation_keeps_description_after_confirmation() {
    let mut form = DonationFormState::default();
    form.set_category(DonationCategory::Items);
    form.item_description = "Winter coats".to_owned();
    assert!(form.begin_submit());
    form.finish_submit();
    assert_eq!(form.item_description, "Winter coats");
    assert!(form.can_submit());
    assert!(form.begin_submit());
    assert_eq!(form.confirmation(), None);
}
