//! Domain Error Types
//!
//! Validation and decoding failures, aggregated for callers that want a
//! single error type across the account surface.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::confirmation::DecodeError;
use crate::domain::{AmountError, TimeZoneError};

/// Crate-wide domain errors.
///
/// The original distinction between wrong-type and wrong-content failures
/// collapses here: wrong types are unrepresentable in the signatures, so
/// every variant is a content failure raised at the offending call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error(transparent)]
    Amount(#[from] AmountError),

    #[error(transparent)]
    TimeZone(#[from] TimeZoneError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("{field} cannot be empty")]
    EmptyName { field: &'static str },

    #[error("Interest rate cannot be negative (got {0})")]
    NegativeInterestRate(Decimal),
}

impl DomainError {
    /// True for rejected inputs (amounts, names, offsets, rates)
    pub fn is_validation(&self) -> bool {
        !self.is_decode()
    }

    /// True for malformed confirmation codes
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}
