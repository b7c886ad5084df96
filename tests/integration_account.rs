//! End-to-end account scenarios against the public API

use rust_decimal_macros::dec;
use teller::{decode, Bank, Confirmation, DecodeError, TimeZone, TransactionKind};

/// Opt-in log output for test runs (RUST_LOG=teller=debug)
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

#[test]
fn test_rejected_withdrawal_leaves_balance() {
    init_tracing();
    let bank = Bank::new();
    let mut account = bank
        .open_account(100, "John", "Smith", None, Some(dec!(100.0)))
        .unwrap();

    let conf = account.withdraw(dec!(150)).unwrap();

    assert_eq!(conf.kind(), TransactionKind::Rejected);
    assert_eq!(conf.account_number(), 100);
    assert!(conf.code().starts_with("X-100-"));
    assert_eq!(account.balance().value(), dec!(100.0));
}

#[test]
fn test_decode_with_est_preference() {
    let est = TimeZone::new("EST", -5, 0).unwrap();
    let conf = decode("D-100-20230615120000-105", Some(est)).unwrap();

    assert_eq!(conf.time_utc(), "2023-06-15T12:00:00");
    assert_eq!(conf.time(), "2023-06-15T07:00:00 (EST)");
    assert_eq!(conf.account_number(), 100);
    assert_eq!(conf.transaction_id(), 105);
}

#[test]
fn test_transaction_ids_globally_monotonic() {
    let bank = Bank::new();
    let mut checking = bank
        .open_account(1, "Ada", "Lovelace", None, Some(dec!(500)))
        .unwrap();
    let mut savings = bank
        .open_account(2, "Alan", "Turing", None, Some(dec!(10)))
        .unwrap();

    let confirmations = vec![
        checking.deposit(dec!(25)).unwrap(),
        savings.withdraw(dec!(999)).unwrap(), // rejected, still gets an id
        checking.pay_interest().unwrap(),
        savings.deposit(dec!(0.01)).unwrap(),
        checking.withdraw(dec!(100)).unwrap(),
    ];

    let ids: Vec<u64> = confirmations.iter().map(Confirmation::transaction_id).collect();
    assert_eq!(ids[0], 100);
    assert!(ids.windows(2).all(|w| w[1] == w[0] + 1));
}

#[test]
fn test_full_lifecycle_round_trip() {
    init_tracing();
    let bank = Bank::new();
    let tz = TimeZone::new("MST", -7, 0).unwrap();
    let mut account = bank
        .open_account(140, "John", "Smith", Some(tz.clone()), None)
        .unwrap();

    let deposit = account.deposit(dec!(250.25)).unwrap();
    assert_eq!(account.balance().value(), dec!(250.25));
    assert!(deposit.time().ends_with("(MST)"));

    let withdrawal = account.withdraw(dec!(50.25)).unwrap();
    assert_eq!(withdrawal.kind(), TransactionKind::Withdrawal);
    assert_eq!(account.balance().value(), dec!(200.00));

    // decode the deposit's code with a different preferred zone
    let ist = TimeZone::new("IST", 5, 30).unwrap();
    let parsed = decode(&deposit.code(), Some(ist.clone())).unwrap();
    assert_eq!(parsed.account_number(), 140);
    assert_eq!(parsed.kind(), TransactionKind::Deposit);
    assert_eq!(parsed.transaction_id(), deposit.transaction_id());
    assert_eq!(parsed.timestamp_utc(), deposit.timestamp_utc());
    assert_eq!(parsed.timezone(), &ist);
    assert!(parsed.time().ends_with("(IST)"));
}

#[test]
fn test_decode_rejects_malformed_codes() {
    assert!(matches!(
        decode("garbage", None),
        Err(DecodeError::FieldCount(1))
    ));
    assert!(matches!(
        decode("D-100-20230615120000-105-extra", None),
        Err(DecodeError::FieldCount(5))
    ));
    assert!(matches!(
        decode("D-100-20230642120000-105", None),
        Err(DecodeError::Timestamp(_))
    ));
}

#[test]
fn test_confirmation_serializes_as_receipt() {
    let est = TimeZone::new("EST", -5, 0).unwrap();
    let conf = decode("I-77-20240101083000-420", Some(est)).unwrap();

    let json = serde_json::to_value(&conf).unwrap();
    assert_eq!(json["account_number"], 77);
    assert_eq!(json["transaction_id"], 420);
    assert_eq!(json["kind"], "Interest");

    let back: Confirmation = serde_json::from_value(json).unwrap();
    assert_eq!(back, conf);
}

#[test]
fn test_interest_rate_shared_until_overridden() {
    let bank = Bank::new();
    let mut a = bank
        .open_account(1, "Ada", "Lovelace", None, Some(dec!(1000)))
        .unwrap();
    let mut b = bank
        .open_account(2, "Alan", "Turing", None, Some(dec!(1000)))
        .unwrap();

    bank.set_interest_rate(dec!(1)).unwrap();
    a.pay_interest().unwrap();
    b.pay_interest_at(dec!(5)).unwrap();

    assert_eq!(a.balance().value(), dec!(1010.00));
    assert_eq!(b.balance().value(), dec!(1050.00));
    // the override did not disturb the shared rate
    assert_eq!(bank.interest_rate(), dec!(1));
}
