//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic. `markers` is plain Rust and unit-tested natively; `leaflet` binds the
//! global `L` object and only exists in the hydrate build.

#[cfg(feature = "hydrate")]
pub mod leaflet;
pub mod markers;
