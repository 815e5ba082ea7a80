//! Manager service module
//!
//! Registration, update and lookup of the single apartment manager.

mod service;


pub use service::ManagerService;
