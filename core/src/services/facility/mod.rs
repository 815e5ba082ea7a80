//! Facility service module
//!
//! Facility lifecycle plus the two-state booking flag
//! (Available / Occupied).

mod service;

#[cfg(test)]
mod tests;

pub use service::{validate_name, FacilityService};
