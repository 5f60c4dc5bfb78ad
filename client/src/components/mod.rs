//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render console chrome and report surfaces. They receive plain
//! values or callbacks; view state stays with the owning page.

pub mod alert_banner;
pub mod breadcrumbs;
pub mod error_callout;
pub mod loading;
pub mod report_card;
pub mod sidebar;
