//! UI components shared across pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read page state from `RwSignal`s handed to them by their page
//! (or, for the shell, from context) and never own domain data themselves.

pub mod category_filter;
pub mod contact_form;
pub mod donation_form;
pub mod featured_projects;
pub mod hero_section;
pub mod impact_stats;
pub mod navigation;
pub mod ngo_detail;
pub mod ngo_map;
pub mod page_transition;
pub mod project_card;
pub mod services_section;
