//! Tests for the theme selection store

use super::*;
use rstest::rstest;
use std::cell::RefCell;
use std::rc::Rc;
use tempfile::tempdir;

/// Memory storage that the test can still inspect after handing it to a store
#[derive(Clone, Default)]
struct SharedStorage(Rc<RefCell<MemoryStorage>>);

impl SharedStorage {
    fn seeded(value: &str) -> Self {
        Self(Rc::new(RefCell::new(MemoryStorage::with_item(THEME_KEY, value))))
    }

    fn stored(&self) -> Option<String> {
        self.0.borrow().get_item(THEME_KEY).unwrap()
    }
}

impl PreferenceStorage for SharedStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.0.borrow().get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.0.borrow_mut().set_item(key, value)
    }
}

struct FailingStorage;

impl PreferenceStorage for FailingStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::NoConfigDir)
    }

    fn set_item(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::NoConfigDir)
    }
}

fn store_with(storage: &SharedStorage) -> ThemeStore {
    ThemeStore::new(ThemeName::RosePine, Some(Box::new(storage.clone())))
}

fn recorder(store: &mut ThemeStore) -> Rc<RefCell<Vec<ThemeName>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    store.subscribe(move |name| sink.borrow_mut().push(name));
    seen
}

#[test]
fn test_starts_at_default() {
    let store = ThemeStore::new(ThemeName::Gruvbox, None);
    assert_eq!(store.get(), ThemeName::Gruvbox);
    assert_eq!(store.selection_state(), SelectionState::UninitializedDefault);
    assert_eq!(store.current_palette().name, ThemeName::Gruvbox);
}

#[test]
fn test_switch_updates_state_and_storage() {
    let storage = SharedStorage::default();
    let mut store = store_with(&storage);

    store.switch_theme(ThemeName::Ruis);

    assert_eq!(store.get(), ThemeName::Ruis);
    assert_eq!(store.selection_state(), SelectionState::Resolved);
    assert_eq!(storage.stored().as_deref(), Some("ruis"));
}

#[test]
fn test_restore_is_idempotent() {
    let storage = SharedStorage::seeded("gruvbox");
    let mut store = store_with(&storage);

    for _ in 0..3 {
        store.initialize_theme();
        assert_eq!(store.get(), ThemeName::Gruvbox);
        assert_eq!(store.selection_state(), SelectionState::Resolved);
    }
}

#[rstest]
#[case("solarized")]
#[case("")]
#[case("GRUVBOX")]
#[case("gruvbox\n")]
fn test_invalid_stored_value_is_ignored(#[case] stored: &str) {
    let storage = SharedStorage::seeded(stored);
    let mut store = store_with(&storage);

    store.initialize_theme();

    assert_eq!(store.get(), ThemeName::RosePine);
    assert_eq!(store.selection_state(), SelectionState::UninitializedDefault);
}

#[test]
fn test_missing_preference_keeps_default() {
    let storage = SharedStorage::default();
    let mut store = store_with(&storage);
    store.initialize_theme();
    assert_eq!(store.get(), ThemeName::RosePine);
    assert_eq!(storage.stored(), None);
}

#[test]
fn test_headless_store_never_fails() {
    let mut store = ThemeStore::headless();
    assert!(!store.has_persistent_storage());

    store.initialize_theme();
    assert_eq!(store.get(), ThemeName::RosePine);

    store.switch_theme(ThemeName::Gruvbox);
    assert_eq!(store.get(), ThemeName::Gruvbox);
}

#[test]
fn test_storage_failures_are_absorbed() {
    let mut store = ThemeStore::new(ThemeName::RosePine, Some(Box::new(FailingStorage)));

    store.initialize_theme();
    assert_eq!(store.get(), ThemeName::RosePine);

    store.switch_theme(ThemeName::Ruis);
    assert_eq!(store.get(), ThemeName::Ruis);
}

#[test]
fn test_subscriber_gets_current_value_then_changes() {
    let mut store = ThemeStore::headless();
    let seen = recorder(&mut store);

    store.switch_theme(ThemeName::Gruvbox);
    store.switch_theme(ThemeName::Ruis);

    assert_eq!(
        *seen.borrow(),
        vec![ThemeName::RosePine, ThemeName::Gruvbox, ThemeName::Ruis]
    );
}

#[test]
fn test_unchanged_value_does_not_notify() {
    let storage = SharedStorage::default();
    let mut store = store_with(&storage);
    let seen = recorder(&mut store);

    store.switch_theme(ThemeName::RosePine);

    assert_eq!(*seen.borrow(), vec![ThemeName::RosePine]);
    // Still persisted, since the user made an explicit choice.
    assert_eq!(storage.stored().as_deref(), Some("rose-pine"));
}

#[test]
fn test_subscribers_notified_in_subscription_order() {
    let mut store = ThemeStore::headless();
    let order = Rc::new(RefCell::new(Vec::new()));
    for label in ["first", "second", "third"] {
        let order = Rc::clone(&order);
        store.subscribe(move |name| order.borrow_mut().push((label, name)));
    }
    order.borrow_mut().clear();

    store.switch_theme(ThemeName::Gruvbox);

    assert_eq!(
        *order.borrow(),
        vec![
            ("first", ThemeName::Gruvbox),
            ("second", ThemeName::Gruvbox),
            ("third", ThemeName::Gruvbox),
        ]
    );
}

#[test]
fn test_restore_notifies_subscribers() {
    let storage = SharedStorage::seeded("ruis");
    let mut store = store_with(&storage);
    let seen = recorder(&mut store);

    store.initialize_theme();

    assert_eq!(*seen.borrow(), vec![ThemeName::RosePine, ThemeName::Ruis]);
}

#[test]
fn test_unsubscribe_stops_delivery() {
    let mut store = ThemeStore::headless();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let id = store.subscribe(move |name| sink.borrow_mut().push(name));

    assert!(store.unsubscribe(id));
    assert!(!store.unsubscribe(id));
    store.switch_theme(ThemeName::Gruvbox);

    assert_eq!(*seen.borrow(), vec![ThemeName::RosePine]);
}

#[test]
fn test_two_theme_scenario() {
    // A = rose-pine (default), B = gruvbox, C = unregistered text
    let storage = SharedStorage::seeded("gruvbox");
    let mut store = store_with(&storage);
    store.initialize_theme();
    assert_eq!(store.get(), ThemeName::Gruvbox);

    store.switch_theme(ThemeName::RosePine);
    assert_eq!(store.get(), ThemeName::RosePine);
    assert_eq!(storage.stored().as_deref(), Some("rose-pine"));

    let storage = SharedStorage::seeded("C");
    let mut fresh = store_with(&storage);
    fresh.initialize_theme();
    assert_eq!(fresh.get(), ThemeName::RosePine);
}

#[test]
fn test_choice_survives_restart_with_file_storage() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("preferences.json");

    let mut first = ThemeStore::new(ThemeName::RosePine, Some(Box::new(FileStorage::new(&path))));
    first.switch_theme(ThemeName::Gruvbox);
    drop(first);

    let mut second = ThemeStore::new(ThemeName::RosePine, Some(Box::new(FileStorage::new(&path))));
    assert_eq!(second.get(), ThemeName::RosePine);
    second.initialize_theme();
    assert_eq!(second.get(), ThemeName::Gruvbox);
}

#[test]
fn test_switch_recovers_from_corrupt_preference_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("preferences.json");
    std::fs::write(&path, r#"{"theme": "gru"#).unwrap();

    let mut first = ThemeStore::new(ThemeName::RosePine, Some(Box::new(FileStorage::new(&path))));
    first.initialize_theme();
    assert_eq!(first.get(), ThemeName::RosePine);
    first.switch_theme(ThemeName::Gruvbox);

    let mut second = ThemeStore::new(ThemeName::RosePine, Some(Box::new(FileStorage::new(&path))));
    second.initialize_theme();
    assert_eq!(second.get(), ThemeName::Gruvbox);
}
