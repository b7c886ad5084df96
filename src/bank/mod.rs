//! Bank module
//!
//! The [`Bank`] owns the state the account model shares across accounts:
//! the monotonic transaction-id sequence and the interest rate. Accounts
//! are opened through a bank and keep a cheap clone of its handle.

pub mod account;

use std::str::FromStr;
use std::sync::{Arc, RwLock};

use rust_decimal::Decimal;

use crate::config::Config;
use crate::confirmation::TransactionSequence;
use crate::domain::{Balance, DomainError, TimeZone};

pub use account::Account;

/// Default interest rate in percent
const DEFAULT_INTEREST_RATE: &str = "0.5";

/// Shared account-model state. Clones are handles to the same bank.
#[derive(Debug, Clone)]
pub struct Bank {
    sequence: TransactionSequence,
    interest_rate: Arc<RwLock<Decimal>>,
}

impl Bank {
    /// A bank with the conventional defaults: ids from 100, rate 0.5%.
    pub fn new() -> Self {
        Self::with_sequence(TransactionSequence::new())
    }

    /// A bank drawing ids from the given sequence, for deterministic tests.
    pub fn with_sequence(sequence: TransactionSequence) -> Self {
        let rate =
            Decimal::from_str(DEFAULT_INTEREST_RATE).expect("Invalid DEFAULT_INTEREST_RATE constant");
        Self {
            sequence,
            interest_rate: Arc::new(RwLock::new(rate)),
        }
    }

    /// A bank configured from the environment-derived [`Config`].
    pub fn from_config(config: &Config) -> Self {
        Self {
            sequence: TransactionSequence::starting_at(config.transaction_seed),
            interest_rate: Arc::new(RwLock::new(config.interest_rate)),
        }
    }

    /// Open an account. The timezone defaults to UTC and the initial
    /// balance to zero.
    ///
    /// # Errors
    /// `DomainError::EmptyName` for blank names, `DomainError::Amount` for
    /// a negative initial balance.
    pub fn open_account(
        &self,
        account_number: u32,
        first_name: &str,
        last_name: &str,
        timezone: Option<TimeZone>,
        initial_balance: Option<Decimal>,
    ) -> Result<Account, DomainError> {
        let balance = match initial_balance {
            Some(value) => Balance::new(value)?,
            None => Balance::zero(),
        };
        let account = Account::open(
            self.clone(),
            account_number,
            first_name,
            last_name,
            timezone.unwrap_or_else(TimeZone::utc),
            balance,
        )?;
        tracing::debug!(
            "Opened account {} for {}",
            account.account_number(),
            account.full_name()
        );
        Ok(account)
    }

    /// Current shared interest rate in percent
    pub fn interest_rate(&self) -> Decimal {
        *self
            .interest_rate
            .read()
            .expect("interest rate lock poisoned")
    }

    /// Set the shared interest rate, applied by every subsequent
    /// `pay_interest` on accounts of this bank.
    ///
    /// # Errors
    /// `DomainError::NegativeInterestRate` if the rate is below zero.
    pub fn set_interest_rate(&self, rate: Decimal) -> Result<(), DomainError> {
        if rate < Decimal::ZERO {
            return Err(DomainError::NegativeInterestRate(rate));
        }
        *self
            .interest_rate
            .write()
            .expect("interest rate lock poisoned") = rate;
        Ok(())
    }

    pub(crate) fn next_transaction_id(&self) -> u64 {
        self.sequence.next_id()
    }
}

impl Default for Bank {
    fn default() -> Self {
        Self::new()
    }
}
