//! teller Library
//!
//! In-memory bank account model: accounts opened through a [`Bank`] emit an
//! immutable [`Confirmation`] receipt for every transaction attempt, and the
//! receipt's wire code can be decoded back with any preferred [`TimeZone`].
//! The [`modular`] module carries an unrelated modular-integer exercise.

pub mod bank;
pub mod config;
pub mod confirmation;
pub mod domain;
pub mod modular;

pub use bank::{Account, Bank};
pub use config::{Config, ConfigError};
pub use confirmation::{decode, Confirmation, DecodeError, TransactionKind, TransactionSequence};
pub use domain::{Amount, AmountError, Balance, DomainError, TimeZone, TimeZoneError};
pub use modular::{Mod, ModError};
