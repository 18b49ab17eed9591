//! Integration tests for the reload bridge over a file-backed session
//!
//! Each `FileSessionStore` handle stands in for one page load; handles that
//! share a path share the browsing session.

use ensemble_toasts_config::ToastsConfig;
use ensemble_toasts_util::{BridgeKeys, FileSessionStore, ReloadBridge, SessionStore, Severity};

fn page(path: &std::path::Path) -> ReloadBridge<FileSessionStore> {
    ReloadBridge::new(FileSessionStore::open(path), BridgeKeys::from_config(&ToastsConfig::default()))
}

#[test]
fn test_stash_crosses_page_boundary() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    page(&path).stash_for_next_load("Soubor byl vytvořen.", Severity::Success);

    let mut next = page(&path);
    let taken = next.take_and_clear().unwrap();
    assert_eq!(taken.message(), "Soubor byl vytvořen.");
    assert_eq!(taken.severity(), Severity::Success);

    // The session is empty right after delivery
    assert!(!path.exists());
}

#[test]
fn test_last_write_wins_across_handles() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let mut current = page(&path);
    current.stash_for_next_load("X", Severity::Warning);
    current.stash_for_next_load("Y", Severity::Danger);

    let taken = page(&path).take_and_clear().unwrap();
    assert_eq!(taken.message(), "Y");
    assert_eq!(taken.severity(), Severity::Danger);
}

#[test]
fn test_reload_of_consuming_page_finds_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    page(&path).stash_for_next_load("Jednou", Severity::Info);

    assert!(page(&path).take_and_clear().is_some());
    assert!(page(&path).take_and_clear().is_none());

    // The bad file must not block later stashes in the same session
    page(&path).stash_for_next_load("Po obnově", Severity::Success);
    let taken = page(&path).take_and_clear().unwrap();
    assert_eq!(taken.message(), "Po obnově");
    assert_eq!(taken.severity(), Severity::Success);
}

#[test]
fn test_bridge_leaves_unrelated_keys_alone() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let mut other = FileSessionStore::open(&path);
    other.set("menu:open", "1").unwrap();

    page(&path).stash_for_next_load("Ahoj", Severity::Primary);
    page(&path).take_and_clear().unwrap();

    assert_eq!(other.get("menu:open").unwrap().as_deref(), Some("1"));
    assert_eq!(other.get("toast:message").unwrap(), None);
    assert_eq!(other.get("toast:type").unwrap(), None);
}

#[test]
fn test_abandoned_stash_dies_with_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let mut current = page(&path);
    current.stash_for_next_load("Nikdy nezobrazeno", Severity::Secondary);
    current.into_store().end_session().unwrap();

    assert!(page(&path).take_and_clear().is_none());

    // The bad file must not block later stashes in the same session
    page(&path).stash_for_next_load("Po obnově", Severity::Success);
    let taken = page(&path).take_and_clear().unwrap();
    assert_eq!(taken.message(), "Po obnově");
    assert_eq!(taken.severity(), Severity::Success);
}

#[test]
fn test_corrupt_session_is_treated_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "{{{").unwrap();

    assert!(page(&path).take_and_clear().is_none());

    // The bad file must not block later stashes in the same session
    page(&path).stash_for_next_load("Po obnově", Severity::Success);
    let taken = page(&path).take_and_clear().unwrap();
    assert_eq!(taken.message(), "Po obnově");
    assert_eq!(taken.severity(), Severity::Success);
}
