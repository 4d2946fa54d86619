#![cfg(not(feature = "csr"))]

use super::*;

fn item() -> HistoryItem {
    HistoryItem {
        message: "m1".to_owned(),
        response: "r1".to_owned(),
        category: "engine".to_owned(),
        timestamp: "t1".to_owned(),
    }
}

#[test]
fn load_is_empty_outside_browser() {
    let store = LocalStorageStore::new("mechanicHistory");
    assert!(store.load().is_empty());
}

#[test]
fn save_reports_unavailable_outside_browser() {
    let store = LocalStorageStore::new("mechanicHistory");
    let err = store.save(&[item()]).expect_err("no storage in tests");
    assert!(matches!(err, StoreError::Unavailable(ref msg) if msg == &unavailable_message()));
}

#[test]
fn key_is_preserved() {
    assert_eq!(LocalStorageStore::new(String::from("k")).key(), "k");
}
