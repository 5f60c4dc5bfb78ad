//! Per-view state models.
//!
//! DESIGN
//! ======
//! Each view owns its state exclusively in a `RwSignal`; these types hold the
//! transitions so they can be tested without mounting anything.

pub mod domain_check;
pub mod submission;
