//! Account entity
//!
//! A mutable account balance plus identity, opened through a [`Bank`].
//! Every transaction attempt, including a rejected withdrawal, yields a
//! [`Confirmation`] stamped with the next id from the bank's sequence.

use rust_decimal::Decimal;

use crate::confirmation::{Confirmation, TransactionKind};
use crate::domain::{Amount, Balance, DomainError, TimeZone};

use super::Bank;

/// A single bank account.
///
/// Mutation goes through `&mut self`, so sharing one account across
/// threads requires an external lock; the bank-level id sequence stays
/// unique regardless.
#[derive(Debug, Clone)]
pub struct Account {
    account_number: u32,
    first_name: String,
    last_name: String,
    timezone: TimeZone,
    balance: Balance,
    bank: Bank,
}

impl Account {
    pub(super) fn open(
        bank: Bank,
        account_number: u32,
        first_name: &str,
        last_name: &str,
        timezone: TimeZone,
        balance: Balance,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            account_number,
            first_name: validate_name(first_name, "First name")?,
            last_name: validate_name(last_name, "Last name")?,
            timezone,
            balance,
            bank,
        })
    }

    // =========================================================================
    // Transactions
    // =========================================================================

    /// Deposit `amount` into the account.
    ///
    /// # Errors
    /// `DomainError::Amount` if the amount is below 0.01 or the balance
    /// would exceed its upper bound.
    pub fn deposit(&mut self, amount: Decimal) -> Result<Confirmation, DomainError> {
        let amount = Amount::new(amount)?;
        self.balance = self.balance.credit(&amount)?;
        let confirmation = self.confirm(TransactionKind::Deposit);
        tracing::debug!(
            "Deposit of {} to account {} confirmed as {}",
            amount,
            self.account_number,
            confirmation.code()
        );
        Ok(confirmation)
    }

    /// Withdraw `amount` from the account.
    ///
    /// An amount the balance cannot cover is not an error: the withdrawal
    /// is recorded and rejected, returning `Ok` with a
    /// [`TransactionKind::Rejected`] confirmation and the balance
    /// unchanged. Callers must inspect the confirmation's kind to detect
    /// insufficient funds.
    ///
    /// # Errors
    /// `DomainError::Amount` if the amount itself is below 0.01.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<Confirmation, DomainError> {
        let amount = Amount::new(amount)?;
        if !self.balance.is_sufficient_for(&amount) {
            let confirmation = self.confirm(TransactionKind::Rejected);
            tracing::warn!(
                "Withdrawal of {} from account {} rejected (balance {}), recorded as {}",
                amount,
                self.account_number,
                self.balance,
                confirmation.code()
            );
            return Ok(confirmation);
        }
        self.balance = self.balance.debit(&amount)?;
        let confirmation = self.confirm(TransactionKind::Withdrawal);
        tracing::debug!(
            "Withdrawal of {} from account {} confirmed as {}",
            amount,
            self.account_number,
            confirmation.code()
        );
        Ok(confirmation)
    }

    /// Credit interest at the bank's shared rate.
    pub fn pay_interest(&mut self) -> Result<Confirmation, DomainError> {
        let rate = self.bank.interest_rate();
        self.apply_interest(rate)
    }

    /// Credit interest at a one-off rate, leaving the shared rate alone.
    ///
    /// # Errors
    /// `DomainError::NegativeInterestRate` if the rate is below zero.
    pub fn pay_interest_at(&mut self, rate: Decimal) -> Result<Confirmation, DomainError> {
        if rate < Decimal::ZERO {
            return Err(DomainError::NegativeInterestRate(rate));
        }
        self.apply_interest(rate)
    }

    fn apply_interest(&mut self, rate: Decimal) -> Result<Confirmation, DomainError> {
        let interest = self.balance.value() * rate / Decimal::ONE_HUNDRED;
        self.balance = self.balance.accrue(interest)?;
        let confirmation = self.confirm(TransactionKind::Interest);
        tracing::debug!(
            "Interest of {} at {}% on account {} confirmed as {}",
            interest,
            rate,
            self.account_number,
            confirmation.code()
        );
        Ok(confirmation)
    }

    fn confirm(&self, kind: TransactionKind) -> Confirmation {
        Confirmation::issue(
            kind,
            self.account_number,
            self.bank.next_transaction_id(),
            self.timezone.clone(),
        )
    }

    // =========================================================================
    // Identity and settings
    // =========================================================================

    pub fn account_number(&self) -> u32 {
        self.account_number
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn balance(&self) -> &Balance {
        &self.balance
    }

    pub fn timezone(&self) -> &TimeZone {
        &self.timezone
    }

    /// Change the zone used to render this account's confirmations.
    /// Only presentation changes; stored timestamps stay UTC.
    pub fn set_timezone(&mut self, timezone: TimeZone) {
        self.timezone = timezone;
    }

    pub fn set_first_name(&mut self, value: &str) -> Result<(), DomainError> {
        self.first_name = validate_name(value, "First name")?;
        Ok(())
    }

    pub fn set_last_name(&mut self, value: &str) -> Result<(), DomainError> {
        self.last_name = validate_name(value, "Last name")?;
        Ok(())
    }
}

fn validate_name(value: &str, field: &'static str) -> Result<String, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::EmptyName { field });
    }
    Ok(trimmed.to_string())
}
