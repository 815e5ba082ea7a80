//! Authentication service module
//!
//! Credential checks for managers and residents. Token signing stays
//! behind the [`TokenIssuer`] trait.

mod service;
mod token;


pub use service::AuthService;
pub use token::TokenIssuer;
