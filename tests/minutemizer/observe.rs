//! Observing the list and the last picked slot.

use crate::common::*;
use minutemizer::keys;
use minutemizer::prelude::*;
use parking_lot::Mutex;
use std::sync::Arc;

type Seen = Arc<Mutex<Vec<Vec<MinutemanId>>>>;

fn watch_list(store: &Minutemizer) -> (Seen, Subscription) {
    let seen: Seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let subscription = store.subscribe(move |list| sink.lock().push(ids(list)));
    (seen, subscription)
}

#[test]
fn test_subscribe_delivers_current_list_immediately() {
    let t = TestStore::new();
    let (seen, _sub) = watch_list(&t.store);
    assert_eq!(*seen.lock(), vec![Vec::<MinutemanId>::new()]);

    let t = TestStore::new();
    let roster = harries(2);
    t.seed_list(&roster);
    let (seen, _sub) = watch_list(&t.store);
    assert_eq!(*seen.lock(), vec![ids(&roster)]);
}

#[test]
fn test_subscribe_sees_every_write() {
    let t = TestStore::new();
    let (seen, _sub) = watch_list(&t.store);

    let harry = harry_potter();
    let ron = ron_weasley();
    t.store.add(harry.clone()).unwrap();
    t.store.add(ron.clone()).unwrap();
    t.store.delete(&harry).unwrap();
    t.store.delete_all().unwrap();

    assert_eq!(
        *seen.lock(),
        vec![
            vec![],
            vec![harry.id()],
            vec![harry.id(), ron.id()],
            vec![ron.id()],
            vec![],
        ]
    );
}

#[test]
fn test_subscribe_ignores_picks() {
    let t = TestStore::new();
    t.store.add(harry_potter()).unwrap();
    let (seen, _sub) = watch_list(&t.store);

    t.store.pick_one().unwrap();
    assert_eq!(seen.lock().len(), 1);
}

#[test]
fn test_subscribe_skips_malformed_updates() {
    let t = TestStore::new();
    let (seen, _sub) = watch_list(&t.store);

    t.write_raw(keys::MINUTEMEN_LIST, b"not json");
    assert_eq!(seen.lock().len(), 1, "malformed update is dropped");

    let roster = harries(1);
    t.seed_list(&roster);
    assert_eq!(seen.lock().last(), Some(&ids(&roster)), "stream keeps going");
}

#[test]
fn test_subscribe_on_malformed_list_skips_initial_delivery() {
    let t = TestStore::new();
    t.write_raw(keys::MINUTEMEN_LIST, b"not json");

    let (seen, _sub) = watch_list(&t.store);
    assert!(seen.lock().is_empty());
}

#[test]
fn test_subscribers_notified_in_registration_order() {
    let t = TestStore::new();
    let order = Arc::new(Mutex::new(Vec::new()));

    let first = Arc::clone(&order);
    let _a = t.store.subscribe(move |_| first.lock().push("first"));
    let second = Arc::clone(&order);
    let _b = t.store.subscribe(move |_| second.lock().push("second"));
    order.lock().clear();

    t.store.add(harry_potter()).unwrap();
    assert_eq!(*order.lock(), vec!["first", "second"]);
}

#[test]
fn test_unsubscribe_stops_delivery() {
    let t = TestStore::new();
    let (seen, sub) = watch_list(&t.store);

    sub.unsubscribe();
    t.store.add(harry_potter()).unwrap();
    assert_eq!(seen.lock().len(), 1);
}

#[test]
fn test_dropping_subscription_stops_delivery() {
    let t = TestStore::new();
    let (seen, sub) = watch_list(&t.store);

    drop(sub);
    t.store.add(harry_potter()).unwrap();
    assert_eq!(seen.lock().len(), 1);
}

#[test]
fn test_shared_backend_notifies_across_stores() {
    let t = TestStore::new();
    let other = Minutemizer::with_backend(t.backend.clone());
    let (seen, _sub) = watch_list(&t.store);

    let harry = harry_potter();
    other.add(harry.clone()).unwrap();
    assert_eq!(seen.lock().last(), Some(&vec![harry.id()]));
}

#[test]
fn test_listener_can_read_the_store() {
    let t = TestStore::new();
    let store = Arc::new(Minutemizer::with_backend(t.backend.clone()));
    let lengths = Arc::new(Mutex::new(Vec::new()));

    let reader = Arc::clone(&store);
    let sink = Arc::clone(&lengths);
    let _sub = store.subscribe(move |list| {
        let reread = reader.current_list().unwrap();
        assert_eq!(reread.len(), list.len());
        sink.lock().push(list.len());
    });

    store.add(harry_potter()).unwrap();
    assert_eq!(*lengths.lock(), vec![0, 1]);
}

#[test]
fn test_subscribe_last_picked() {
    let t = TestStore::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let _sub = t
        .store
        .subscribe_last_picked(move |last| sink.lock().push(last.map(Minuteman::id)));

    let harry = harry_potter();
    t.store.add(harry.clone()).unwrap();
    t.store.pick_one().unwrap();
    t.store.delete_all().unwrap();
    t.store.pick_one().unwrap();

    assert_eq!(*seen.lock(), vec![None, Some(harry.id()), None, None]);
}
