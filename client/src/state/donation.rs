//! Donation form state and the simulated submit lifecycle.
//!
//! DESIGN
//! ======
//! The form holds only the donor's raw choices; totals, projections, and
//! button text come from [`DonationQuote`] so they can never drift from the
//! inputs. Submission is a three-phase machine
//! (`Idle -> Submitting -> Confirmed`) driven by the component after a fixed
//! delay. Nothing is sent anywhere.

#[cfg(test)]
#[path = "donation_test.rs"]
mod donation_test;

use std::time::Duration;

use catalog::donation::{
    AmountSelection, DonationCategory, DonationQuote, PickupPreference, Recurrence,
};

/// How long the fake payment round trip takes.
pub const SIMULATED_SUBMIT_DELAY: Duration = Duration::from_secs(2);

pub const CONFIRMATION_MESSAGE: &str =
    "Thank you for your donation! This is a demo - no payment was processed.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Confirmed,
}

/// Free-text donor inputs, in form order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DonorField {
    FirstName,
    LastName,
    Email,
    Phone,
    Address,
    City,
    PostalCode,
}

impl DonorField {
    pub const ALL: [Self; 7] = [
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Phone,
        Self::Address,
        Self::City,
        Self::PostalCode,
    ];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::FirstName => "first-name",
            Self::LastName => "last-name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Address => "address",
            Self::City => "city",
            Self::PostalCode => "zip",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name *",
            Self::LastName => "Last Name *",
            Self::Email => "Email Address *",
            Self::Phone => "Phone Number",
            Self::Address => "Address",
            Self::City => "City",
            Self::PostalCode => "ZIP Code",
        }
    }

    #[must_use]
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "tel",
            _ => "text",
        }
    }

    #[must_use]
    pub fn required(self) -> bool {
        matches!(self, Self::FirstName | Self::LastName | Self::Email)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DonorDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub message: String,
}

impl DonorDetails {
    #[must_use]
    pub fn get(&self, field: DonorField) -> &str {
        match field {
            DonorField::FirstName => &self.first_name,
            DonorField::LastName => &self.last_name,
            DonorField::Email => &self.email,
            DonorField::Phone => &self.phone,
            DonorField::Address => &self.address,
            DonorField::City => &self.city,
            DonorField::PostalCode => &self.postal_code,
        }
    }

    pub fn set(&mut self, field: DonorField, value: String) {
        let slot = match field {
            DonorField::FirstName => &mut self.first_name,
            DonorField::LastName => &mut self.last_name,
            DonorField::Email => &mut self.email,
            DonorField::Phone => &mut self.phone,
            DonorField::Address => &mut self.address,
            DonorField::City => &mut self.city,
            DonorField::PostalCode => &mut self.postal_code,
        };
        *slot = value;
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DonationFormState {
    pub category: DonationCategory,
    pub recurrence: Recurrence,
    pub amount: AmountSelection,
    pub pickup: PickupPreference,
    pub item_description: String,
    /// Value from `catalog::donation::DESIGNATIONS`; empty means "where needed most".
    pub designation: String,
    pub donor: DonorDetails,
    pub anonymous: bool,
    pub newsletter: bool,
    pub updates: bool,
    pub phase: SubmitPhase,
}

impl DonationFormState {
    #[must_use]
    pub fn quote(&self) -> DonationQuote {
        DonationQuote::new(&self.amount, self.recurrence)
    }

    /// Switching mode clears the amount so a stale total never leaks into
    /// an item donation.
    pub fn set_category(&mut self, category: DonationCategory) {
        if self.category != category {
            self.category = category;
            self.amount = AmountSelection::None;
        }
    }

    pub fn choose_preset(&mut self, amount: u32) {
        self.amount = AmountSelection::Preset(amount);
    }

    /// Enter custom mode, keeping any text already typed.
    pub fn choose_custom(&mut self) {
        if !self.amount.is_custom() {
            self.amount = AmountSelection::Custom(String::new());
        }
    }

    pub fn set_custom_text(&mut self, raw: String) {
        self.amount = AmountSelection::Custom(raw);
    }

    #[must_use]
    pub fn custom_text(&self) -> &str {
        match &self.amount {
            AmountSelection::Custom(raw) => raw,
            _ => "",
        }
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        if self.is_submitting() {
            return false;
        }
        match self.category {
            DonationCategory::Money => self.quote().is_payable(),
            DonationCategory::Items => !self.item_description.trim().is_empty(),
        }
    }

    /// Enter `Submitting`. Returns `false` (and changes nothing) when the
    /// form is not submittable.
    pub fn begin_submit(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }
        self.phase = SubmitPhase::Submitting;
        true
    }

    /// Complete a pending submit. The chosen amount and item description
    /// stay, so the control is usable again as soon as this returns.
    pub fn finish_submit(&mut self) {
        if self.phase == SubmitPhase::Submitting {
            self.phase = SubmitPhase::Confirmed;
        }
    }

    pub fn dismiss_confirmation(&mut self) {
        if self.phase == SubmitPhase::Confirmed {
            self.phase = SubmitPhase::Idle;
        }
    }

    #[must_use]
    pub fn confirmation(&self) -> Option<&'static str> {
        (self.phase == SubmitPhase::Confirmed).then_some(CONFIRMATION_MESSAGE)
    }

    #[must_use]
    pub fn submit_label(&self) -> String {
        if self.is_submitting() {
            return "Processing...".to_owned();
        }
        match self.category {
            DonationCategory::Money => self.quote().button_label(),
            DonationCategory::Items => "Schedule Item Donation".to_owned(),
        }
    }
}
