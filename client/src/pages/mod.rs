//! Top-level routed pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each page owns the state it needs (if any) and composes shared components.

pub mod about;
pub mod contact;
pub mod donate;
pub mod home;
pub mod map;
pub mod not_found;
pub mod project_detail;
pub mod projects;
pub mod services;
