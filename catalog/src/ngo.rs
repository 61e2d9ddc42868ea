//! NGO directory records, category filtering, and lookup.
//!
//! The directory view keeps a single selected record and a category filter.
//! Filtering never mutates the record list; it only borrows a sublist.

#[cfg(test)]
#[path = "ngo_test.rs"]
mod ngo_test;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::CatalogError;
use crate::data::NGOS;

/// Fixed enumeration of NGO focus areas shown in the directory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum NgoCategory {
    Education,
    Healthcare,
    #[serde(rename = "Water & Sanitation")]
    WaterSanitation,
    #[serde(rename = "Women Empowerment")]
    WomenEmpowerment,
}

impl NgoCategory {
    /// Every category in display order.
    pub const ALL: [Self; 4] = [
        Self::Education,
        Self::Healthcare,
        Self::WaterSanitation,
        Self::WomenEmpowerment,
    ];

    /// Human-readable label, also the wire value.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Education => "Education",
            Self::Healthcare => "Healthcare",
            Self::WaterSanitation => "Water & Sanitation",
            Self::WomenEmpowerment => "Women Empowerment",
        }
    }
}

impl fmt::Display for NgoCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for NgoCategory {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CatalogError::UnknownCategory(trimmed.to_owned()))
    }
}

/// Category filter for the directory: the `All` sentinel or one category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(NgoCategory),
}

impl CategoryFilter {
    pub const ALL_LABEL: &'static str = "All";

    /// Filter buttons in display order: `All` first, then each category.
    pub fn options() -> impl Iterator<Item = Self> {
        std::iter::once(Self::All)
            .chain(NgoCategory::ALL.into_iter().map(Self::Only))
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => Self::ALL_LABEL,
            Self::Only(category) => category.label(),
        }
    }

    /// Parse a button/query label. `All` (any case) selects every record.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownCategory`] if the label names neither
    /// `All` nor a known category.
    pub fn from_label(label: &str) -> Result<Self, CatalogError> {
        if label.trim().eq_ignore_ascii_case(Self::ALL_LABEL) {
            return Ok(Self::All);
        }
        label.parse().map(Self::Only)
    }

    #[must_use]
    pub fn matches(self, category: NgoCategory) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub phone: &'static str,
    pub email: &'static str,
}

/// A static description of a nonprofit organization used for directory display.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct NgoRecord {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub category: NgoCategory,
    pub location: &'static str,
    pub coordinates: Coordinates,
    /// Display-only distance label; no distance is computed.
    pub distance: &'static str,
    pub beneficiaries: &'static str,
    pub contact: Contact,
    pub urgent_needs: &'static [&'static str],
    pub image: &'static str,
}

impl NgoRecord {
    /// Link that opens the donation form pre-populated for this NGO.
    #[must_use]
    pub fn donate_href(&self) -> String {
        format!("/donate?ngo={}", self.id)
    }
}

/// The full, fixed NGO list in display order.
#[must_use]
pub fn all_ngos() -> &'static [NgoRecord] {
    &NGOS
}

/// The record the directory selects before any user interaction.
#[must_use]
pub fn default_ngo() -> &'static NgoRecord {
    &NGOS[0]
}

#[must_use]
pub fn find_ngo(id: u32) -> Option<&'static NgoRecord> {
    NGOS.iter().find(|ngo| ngo.id == id)
}

/// Records matching `filter`, in their original order.
#[must_use]
pub fn filter_ngos(records: &[NgoRecord], filter: CategoryFilter) -> Vec<&NgoRecord> {
    records
        .iter()
        .filter(|ngo| filter.matches(ngo.category))
        .collect()
}
