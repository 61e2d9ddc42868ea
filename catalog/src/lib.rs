//! Shared domain model and mock data set for the GiveBack Hub site.
//!
//! This crate owns everything both `server` and `client` need to agree on:
//! NGO and project records, the fixed data set they are drawn from, the
//! category/status filters, and donation amount derivation. It performs no
//! I/O, so the same code runs inside the SSR binary and the WASM bundle.
//!
//! DESIGN
//! ======
//! Records are `&'static` data compiled into the binary. Nothing here is ever
//! mutated at runtime; derived values (funding percentage, annual projection)
//! are computed on demand instead of stored.

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

pub mod content;
mod data;
pub mod donation;
pub mod money;
pub mod ngo;
pub mod project;

pub use donation::{AmountSelection, DonationCategory, DonationQuote, PickupPreference, Recurrence};
pub use ngo::{CategoryFilter, NgoCategory, NgoRecord};
pub use project::{ProjectRecord, ProjectStatus, ProjectStatusFilter};

/// Error returned when user-supplied text does not name a catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// The label does not match any NGO category (or the `All` sentinel).
    #[error("unknown NGO category: {0}")]
    UnknownCategory(String),
    /// The label does not match any project status.
    #[error("unknown project status: {0}")]
    UnknownStatus(String),
    /// The project identifier is not a positive integer.
    #[error("invalid project id: {0}")]
    InvalidProjectId(String),
}
