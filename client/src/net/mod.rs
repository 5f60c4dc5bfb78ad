//! Networking modules for the management REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the requests (browser only) and `types` defines the wire
//! schema plus the normalization applied to inconsistent upstream shapes.

pub mod api;
pub mod types;
