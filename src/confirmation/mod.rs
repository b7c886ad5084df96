//! Confirmation receipts
//!
//! Every transaction attempt on an account, accepted or rejected, produces
//! an immutable [`Confirmation`]. Its wire form is the confirmation code
//! `"{kind}-{account}-{utc:YYYYMMDDHHMMSS}-{id}"`, reversible through
//! [`decode`]. Timestamps are stored in UTC; the carried [`TimeZone`] only
//! affects how [`Confirmation::time`] renders.

pub mod codec;

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{NaiveDateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::TimeZone;

pub use codec::{decode, DecodeError};

/// First transaction id handed out by a fresh sequence
pub const TRANSACTION_SEED: u64 = 100;

/// Classification of a transaction attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
    Interest,
    /// Valid request that could not be honored (insufficient funds)
    Rejected,
}

impl TransactionKind {
    /// Single-character wire code
    pub fn code(&self) -> char {
        match self {
            TransactionKind::Deposit => 'D',
            TransactionKind::Withdrawal => 'W',
            TransactionKind::Interest => 'I',
            TransactionKind::Rejected => 'X',
        }
    }
}

impl TryFrom<char> for TransactionKind {
    type Error = DecodeError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'D' => Ok(TransactionKind::Deposit),
            'W' => Ok(TransactionKind::Withdrawal),
            'I' => Ok(TransactionKind::Interest),
            'X' => Ok(TransactionKind::Rejected),
            other => Err(DecodeError::UnknownKind(other.to_string())),
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Monotonic transaction-id source, shared by all accounts of a bank.
///
/// Handles are cheap clones over one atomic counter, so ids stay unique
/// and strictly increasing across accounts even under concurrent use.
#[derive(Debug, Clone)]
pub struct TransactionSequence(Arc<AtomicU64>);

impl TransactionSequence {
    /// A sequence starting at the conventional seed of 100
    pub fn new() -> Self {
        Self::starting_at(TRANSACTION_SEED)
    }

    /// A sequence starting at an arbitrary seed, for tests and config
    pub fn starting_at(seed: u64) -> Self {
        Self(Arc::new(AtomicU64::new(seed)))
    }

    /// Take the next id. Uniqueness per sequence is the only requirement,
    /// so relaxed ordering suffices.
    pub fn next_id(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for TransactionSequence {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable receipt of a transaction attempt.
///
/// Carries the facts needed to re-render its confirmation code plus the
/// timezone used for local presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    account_number: u32,
    kind: TransactionKind,
    transaction_id: u64,
    time_utc: NaiveDateTime,
    timezone: TimeZone,
}

impl Confirmation {
    /// Stamp a new confirmation at the current UTC second.
    pub(crate) fn issue(
        kind: TransactionKind,
        account_number: u32,
        transaction_id: u64,
        timezone: TimeZone,
    ) -> Self {
        let time_utc = Utc::now()
            .naive_utc()
            .with_nanosecond(0)
            .expect("zero nanoseconds is always valid");
        Self {
            account_number,
            kind,
            transaction_id,
            time_utc,
            timezone,
        }
    }

    /// Rebuild a confirmation from decoded fields.
    pub(crate) fn from_parts(
        kind: TransactionKind,
        account_number: u32,
        transaction_id: u64,
        time_utc: NaiveDateTime,
        timezone: TimeZone,
    ) -> Self {
        Self {
            account_number,
            kind,
            transaction_id,
            time_utc,
            timezone,
        }
    }

    pub fn account_number(&self) -> u32 {
        self.account_number
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn transaction_id(&self) -> u64 {
        self.transaction_id
    }

    /// Transaction instant in UTC, whole seconds
    pub fn timestamp_utc(&self) -> NaiveDateTime {
        self.time_utc
    }

    /// Timezone this receipt renders local time in
    pub fn timezone(&self) -> &TimeZone {
        &self.timezone
    }

    /// The confirmation code wire string
    pub fn code(&self) -> String {
        codec::encode(self.kind, self.account_number, self.time_utc, self.transaction_id)
    }

    /// ISO-8601 timestamp in UTC, e.g. `2023-06-15T12:00:00`
    pub fn time_utc(&self) -> String {
        self.time_utc.format(codec::ISO_FORMAT).to_string()
    }

    /// Local timestamp annotated with the zone name,
    /// e.g. `2023-06-15T07:00:00 (EST)`
    pub fn time(&self) -> String {
        let local = self.time_utc + self.timezone.offset();
        format!("{} ({})", local.format(codec::ISO_FORMAT), self.timezone.name())
    }
}

impl fmt::Display for Confirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
