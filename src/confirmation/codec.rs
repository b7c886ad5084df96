//! Confirmation code codec
//!
//! Wire format: `"{kind}-{account_number}-{utc:YYYYMMDDHHMMSS}-{id}"`.
//! Encoding is timezone-agnostic; a preferred zone enters only at decode
//! time, so stored codes are always UTC while presentation is the
//! caller's choice.

use chrono::NaiveDateTime;

use crate::domain::TimeZone;

use super::{Confirmation, TransactionKind};

/// Timestamp segment format inside a code
pub(crate) const CODE_TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// ISO-8601 rendering used by `time_utc()` and `time()`
pub(crate) const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Number of `-`-separated fields in a well-formed code
const FIELD_COUNT: usize = 4;

/// Errors that can occur when decoding a confirmation code
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("Confirmation code must have {FIELD_COUNT} '-'-separated fields (got {0})")]
    FieldCount(usize),

    #[error("Unknown transaction code {0:?}")]
    UnknownKind(String),

    #[error("Invalid account number {0:?}")]
    AccountNumber(String),

    #[error("Invalid transaction datetime {0:?}")]
    Timestamp(String),

    #[error("Invalid transaction id {0:?}")]
    TransactionId(String),
}

/// Render the wire string for one confirmation.
pub(crate) fn encode(
    kind: TransactionKind,
    account_number: u32,
    time_utc: NaiveDateTime,
    transaction_id: u64,
) -> String {
    format!(
        "{}-{}-{}-{}",
        kind.code(),
        account_number,
        time_utc.format(CODE_TIMESTAMP_FORMAT),
        transaction_id
    )
}

/// Decode a confirmation code back into a [`Confirmation`].
///
/// The UTC timestamp is taken verbatim from the code; the preferred
/// timezone (UTC when `None`) is attached for local rendering only.
///
/// # Errors
/// `DecodeError` when the field count is wrong or any segment fails to
/// parse: kind outside {D, W, I, X}, non-numeric account number or
/// transaction id, or a timestamp that does not match `YYYYMMDDHHMMSS`.
pub fn decode(code: &str, preferred: Option<TimeZone>) -> Result<Confirmation, DecodeError> {
    let parts: Vec<&str> = code.split('-').collect();
    if parts.len() != FIELD_COUNT {
        return Err(DecodeError::FieldCount(parts.len()));
    }

    let kind = match parts[0].chars().next() {
        Some(c) if parts[0].len() == c.len_utf8() => TransactionKind::try_from(c)?,
        _ => return Err(DecodeError::UnknownKind(parts[0].to_string())),
    };

    let account_number: u32 = parts[1]
        .parse()
        .map_err(|_| DecodeError::AccountNumber(parts[1].to_string()))?;

    let time_utc = NaiveDateTime::parse_from_str(parts[2], CODE_TIMESTAMP_FORMAT)
        .map_err(|_| DecodeError::Timestamp(parts[2].to_string()))?;

    let transaction_id: u64 = parts[3]
        .parse()
        .map_err(|_| DecodeError::TransactionId(parts[3].to_string()))?;

    Ok(Confirmation::from_parts(
        kind,
        account_number,
        transaction_id,
        time_utc,
        preferred.unwrap_or_else(TimeZone::utc),
    ))
}
