//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure view-model and location helpers, kept out of pages and components so
//! they can be tested natively.

pub mod domain_report;
pub mod query;
