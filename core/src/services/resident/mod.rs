//! Resident service module
//!
//! Registration, update, removal and lookup of residents. Contact details
//! are validated before anything reaches the repository.

mod service;


pub use service::{validate_contact, ResidentService};
