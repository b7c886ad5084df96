//! Domain module
//!
//! Core value types and validation rules.

pub mod amount;
pub mod error;
pub mod timezone;

pub use amount::{Amount, AmountError, Balance};
pub use error::DomainError;
pub use timezone::{TimeZone, TimeZoneError};
