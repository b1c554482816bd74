use gofinances_core::errors::StoreError;
use gofinances_core::ledger::{Transaction, TransactionKind};
use gofinances_core::storage::{JsonFileStore, KeyValueStore, TransactionStore, TRANSACTIONS_KEY};
use std::fs;

mod common;
use common::setup_store;

fn sample(name: &str, amount: &str, kind: TransactionKind) -> Transaction {
    Transaction::new(name, amount, kind, "purchases")
}

#[test]
fn append_then_load_round_trips() {
    let (store, _base) = setup_store();

    let before = store.load_all().expect("initial load");
    let record = sample("Salário", "1200.00", TransactionKind::Positive);
    store.append_one(record.clone()).expect("append");

    let after = store.load_all().expect("reload");
    let mut expected = before;
    expected.push(record);
    assert_eq!(after, expected);
}

#[test]
fn load_is_idempotent_without_intervening_writes() {
    let (store, _base) = setup_store();
    store
        .append_one(sample("Mercado", "89.90", TransactionKind::Negative))
        .expect("append");

    let first = store.load_all().expect("first load");
    let second = store.load_all().expect("second load");
    assert_eq!(first, second);
}

#[test]
fn absent_key_yields_empty_sequence() {
    let (store, base) = setup_store();
    assert!(store.load_all().expect("load").is_empty());
    // No file is created by a plain read.
    assert!(!base.join("gofinances_transactions.json").exists());
}

#[test]
fn corrupt_stored_json_is_a_decode_error() {
    let (store, base) = setup_store();
    fs::write(base.join("gofinances_transactions.json"), "{ nope").expect("write corruption");

    let err = store.load_all().expect_err("corrupt JSON must fail");
    assert!(matches!(err, StoreError::Decode(_)), "got {err:?}");
}

#[test]
fn stored_record_with_bad_amount_is_rejected_on_read() {
    let (store, base) = setup_store();
    let backend = JsonFileStore::new(base).expect("backend");
    let mut record = sample("Conta", "10.00", TransactionKind::Negative);
    record.amount = "-10".into();
    let doc = serde_json::to_string(&vec![record]).expect("encode");
    backend.set(TRANSACTIONS_KEY, &doc).expect("seed store");

    let err = store.load_all().expect_err("bad record must fail");
    assert!(matches!(err, StoreError::InvalidRecord(_)), "got {err:?}");
}

#[test]
fn failed_write_preserves_the_previous_document() {
    let (store, base) = setup_store();
    store
        .append_one(sample("Salário", "1200.00", TransactionKind::Positive))
        .expect("initial append");

    let path = base.join("gofinances_transactions.json");
    let original = fs::read_to_string(&path).expect("read original document");

    // A directory colliding with the staging file name forces the write
    // to fail before the rename.
    let tmp_path = base.join("gofinances_transactions.tmp");
    fs::create_dir_all(&tmp_path).expect("block staging file");

    let err = store
        .append_one(sample("Mercado", "89.90", TransactionKind::Negative))
        .expect_err("write must fail");
    assert!(matches!(err, StoreError::Persistence(_)), "got {err:?}");

    let preserved = fs::read_to_string(&path).expect("read document after failure");
    assert_eq!(preserved, original);
}
