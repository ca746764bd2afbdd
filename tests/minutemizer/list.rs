//! Reading and appending to the list.

use crate::common::*;
use minutemizer::keys;
use minutemizer::prelude::*;

#[test]
fn test_current_list_empty() {
    let t = TestStore::new();
    assert!(t.store.current_list().unwrap().is_empty());
}

#[test]
fn test_last_picked_none() {
    let t = TestStore::new();
    assert_eq!(t.store.last_picked().unwrap(), None);
}

#[test]
fn test_current_list_not_empty() {
    let t = TestStore::new();
    let seeded = harries(2);
    t.seed_list(&seeded);

    let list = t.store.current_list().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(ids(&list), ids(&seeded));
}

#[test]
fn test_empty_bytes_read_as_empty_list() {
    let t = TestStore::new();
    t.write_raw(keys::MINUTEMEN_LIST, b"");
    assert!(t.store.current_list().unwrap().is_empty());
}

#[test]
fn test_malformed_list_is_decode_error() {
    let t = TestStore::new();
    t.write_raw(keys::MINUTEMEN_LIST, b"[{\"id\": 1}]");

    let err = t.store.current_list().unwrap_err();
    assert!(matches!(err, Error::Decode(_)), "got {:?}", err);
    assert!(!err.is_empty_list());
}

#[test]
fn test_malformed_last_picked_is_decode_error() {
    let t = TestStore::new();
    t.write_raw(keys::LAST_MINUTEMAN, b"\"harry\"");
    assert!(t.store.last_picked().unwrap_err().is_serialization());
}

#[test]
fn test_add() {
    let t = TestStore::new();
    let harry = harry_potter();
    t.store.add(harry.clone()).unwrap();

    let list = t.store.current_list().unwrap();
    assert_eq!(list, vec![harry]);
}

#[test]
fn test_add_appends_after_existing() {
    let t = TestStore::new();
    let existing = vec![harry_potter(), ron_weasley()];
    t.seed_list(&existing);

    let hermione = hermione_granger();
    t.store.add(hermione.clone()).unwrap();

    let list = t.store.current_list().unwrap();
    assert_eq!(list.len(), existing.len() + 1);
    assert_eq!(ids(&list[..2]), ids(&existing));
    assert_eq!(list[2], hermione);
}

#[test]
fn test_add_many_keeps_order() {
    let t = TestStore::new();
    let batch = vec![harry_potter(), ron_weasley(), hermione_granger()];
    t.store.add_many(batch.clone()).unwrap();

    assert_eq!(ids(&t.store.current_list().unwrap()), ids(&batch));
}

#[test]
fn test_add_many_duplicates() {
    let t = TestStore::new();
    let harry = harry_potter();
    t.store.add_many([harry.clone(), harry.clone()]).unwrap();

    let list = t.store.current_list().unwrap();
    assert_eq!(list.len(), 2);
    assert!(list.iter().all(|m| *m == harry));
}

#[test]
fn test_add_zero() {
    let t = TestStore::new();
    t.store.add_many(Vec::new()).unwrap();
    assert!(t.store.current_list().unwrap().is_empty());

    t.store.add(harry_potter()).unwrap();
    t.store.add_many(std::iter::empty()).unwrap();
    assert_eq!(t.store.current_list().unwrap().len(), 1);
}

#[test]
fn test_add_preserves_fields() {
    let t = TestStore::new();
    let no_middle = Minuteman::new("Luna", "Lovegood", None::<&str>);
    let empty_middle = Minuteman::new("Neville", "Longbottom", Some(""));
    t.store.add_many([no_middle, empty_middle]).unwrap();

    let list = t.store.current_list().unwrap();
    assert_eq!(list[0].first_name(), "Luna");
    assert_eq!(list[0].second_name(), "Lovegood");
    assert_eq!(list[0].middle_name(), None);
    assert_eq!(list[1].middle_name(), Some(""));
}

#[test]
fn test_add_onto_malformed_list_fails_without_writing() {
    let t = TestStore::new();
    t.write_raw(keys::MINUTEMEN_LIST, b"garbage");

    assert!(t.store.add(harry_potter()).is_err());
    assert_eq!(
        t.backend.get(keys::MINUTEMEN_LIST).unwrap(),
        Some(b"garbage".to_vec())
    );
}
