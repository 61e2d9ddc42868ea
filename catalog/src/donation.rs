//! Donation form modes and amount derivation.
//!
//! DESIGN
//! ======
//! The form stores only what the donor chose (`AmountSelection`,
//! `Recurrence`); the displayed total and annual projection are derived by
//! [`DonationQuote`] on every read. Malformed custom input degrades to a zero
//! total instead of an error, and a zero total is what disables submission.

#[cfg(test)]
#[path = "donation_test.rs"]
mod donation_test;

use crate::money::format_usd;
use crate::ngo::{NgoRecord, find_ngo};

/// Preset amounts offered as buttons, in whole dollars.
pub const PRESET_AMOUNTS: [u32; 6] = [25, 50, 100, 250, 500, 1000];

const MONTHS_PER_YEAR: f64 = 12.0;

/// What the donor is giving.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DonationCategory {
    #[default]
    Money,
    Items,
}

impl DonationCategory {
    pub const ALL: [Self; 2] = [Self::Money, Self::Items];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Money => "Money",
            Self::Items => "Items",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Recurrence {
    #[default]
    OneTime,
    Monthly,
}

impl Recurrence {
    pub const ALL: [Self; 2] = [Self::OneTime, Self::Monthly];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::OneTime => "One-time",
            Self::Monthly => "Monthly",
        }
    }

    #[must_use]
    pub fn option_label(self) -> &'static str {
        match self {
            Self::OneTime => "One-time donation",
            Self::Monthly => "Monthly donation",
        }
    }
}

/// How donated items reach us. Only meaningful for [`DonationCategory::Items`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PickupPreference {
    #[default]
    Pickup,
    Dropoff,
    Express,
}

impl PickupPreference {
    pub const ALL: [Self; 3] = [Self::Pickup, Self::Dropoff, Self::Express];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pickup => "Schedule a pickup",
            Self::Dropoff => "Drop off at a collection point",
            Self::Express => "Express pickup (within 24 hours)",
        }
    }

    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            Self::Pickup => "pickup",
            Self::Dropoff => "dropoff",
            Self::Express => "express",
        }
    }
}

/// The donor's amount choice. `None` until a button is pressed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AmountSelection {
    #[default]
    None,
    Preset(u32),
    /// Raw text of the custom amount field.
    Custom(String),
}

impl AmountSelection {
    /// Dollar value of the selection; zero when nothing valid is chosen.
    #[must_use]
    pub fn value(&self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::Preset(amount) => f64::from(*amount),
            Self::Custom(raw) => parse_custom_amount(raw),
        }
    }

    #[must_use]
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }

    #[must_use]
    pub fn is_preset(&self, amount: u32) -> bool {
        matches!(self, Self::Preset(chosen) if *chosen == amount)
    }
}

/// Parse the custom amount field.
///
/// Only a positive, finite number is accepted; anything else (empty,
/// non-numeric, zero, negative, `inf`, `NaN`) is 0.
#[must_use]
pub fn parse_custom_amount(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => value,
        _ => 0.0,
    }
}

/// Display values derived from the current amount and recurrence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DonationQuote {
    pub recurrence: Recurrence,
    pub total: f64,
}

impl DonationQuote {
    #[must_use]
    pub fn new(selection: &AmountSelection, recurrence: Recurrence) -> Self {
        Self {
            recurrence,
            total: selection.value(),
        }
    }

    /// Amount × 12 for monthly giving; `None` for one-time.
    #[must_use]
    pub fn annual_projection(&self) -> Option<f64> {
        match self.recurrence {
            Recurrence::Monthly => Some(self.total * MONTHS_PER_YEAR),
            Recurrence::OneTime => None,
        }
    }

    #[must_use]
    pub fn is_payable(&self) -> bool {
        self.total > 0.0
    }

    /// Summary line prefix, e.g. `Monthly Donation:`.
    #[must_use]
    pub fn summary_label(&self) -> String {
        format!("{} Donation:", self.recurrence.label())
    }

    /// Submit button text; omits the amount until one is payable.
    #[must_use]
    pub fn button_label(&self) -> String {
        if self.is_payable() {
            format!("Donate {}", format_usd(self.total))
        } else {
            "Donate".to_owned()
        }
    }
}

/// A project the donor may earmark their gift for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Designation {
    pub value: &'static str,
    pub label: &'static str,
}

pub const DESIGNATIONS: [Designation; 7] = [
    Designation {
        value: "",
        label: "Where needed most",
    },
    Designation {
        value: "clean-water",
        label: "Clean Water Initiative",
    },
    Designation {
        value: "education",
        label: "Education Support Program",
    },
    Designation {
        value: "healthcare",
        label: "Healthcare Access Project",
    },
    Designation {
        value: "women-empowerment",
        label: "Women's Empowerment Initiative",
    },
    Designation {
        value: "agriculture",
        label: "Sustainable Agriculture Program",
    },
    Designation {
        value: "youth-skills",
        label: "Youth Skills Development",
    },
];

/// Resolve the `ngo` query parameter of `/donate` to the NGO it names.
///
/// Missing, malformed, and unknown ids all fall back to a general donation.
#[must_use]
pub fn donation_context(ngo_param: Option<&str>) -> Option<&'static NgoRecord> {
    let id = ngo_param?.trim().parse::<u32>().ok()?;
    find_ngo(id)
}
