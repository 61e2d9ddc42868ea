//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by page concern (`contact`, `directory`, `donation`, `ui`) so each
//! view depends on one small model held in a single `RwSignal`. Every
//! displayed value is derived from that signal rather than stored twice.

pub mod contact;
pub mod directory;
pub mod donation;
pub mod ui;
