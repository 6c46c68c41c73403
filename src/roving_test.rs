use super::*;

// =============================================================
// Key parsing
// =============================================================

#[test]
fn parses_navigation_keys() {
    assert_eq!(NavKey::parse("ArrowDown"), Some(NavKey::Down));
    assert_eq!(NavKey::parse("ArrowUp"), Some(NavKey::Up));
    assert_eq!(NavKey::parse("Enter"), Some(NavKey::Enter));
    assert_eq!(NavKey::parse(" "), Some(NavKey::Space));
}

#[test]
fn ignores_other_keys() {
    assert_eq!(NavKey::parse("ArrowLeft"), None);
    assert_eq!(NavKey::parse("Tab"), None);
    assert_eq!(NavKey::parse("Spacebar"), None);
    assert_eq!(NavKey::parse(""), None);
}

#[test]
fn activation_keys_are_enter_and_space() {
    assert!(is_activation_key("Enter"));
    assert!(is_activation_key(" "));
    assert!(!is_activation_key("ArrowDown"));
    assert!(!is_activation_key("Escape"));
}

// =============================================================
// Wrap-around
// =============================================================

#[test]
fn down_from_last_wraps_to_first() {
    assert_eq!(resolve(5, 4, NavKey::Down), Some(RovingAction::Focus(0)));
}

#[test]
fn up_from_first_wraps_to_last() {
    assert_eq!(resolve(5, 0, NavKey::Up), Some(RovingAction::Focus(4)));
}

#[test]
fn down_and_up_step_by_one() {
    assert_eq!(resolve(5, 1, NavKey::Down), Some(RovingAction::Focus(2)));
    assert_eq!(resolve(5, 3, NavKey::Up), Some(RovingAction::Focus(2)));
}

#[test]
fn single_element_focuses_itself() {
    assert_eq!(resolve(1, 0, NavKey::Down), Some(RovingAction::Focus(0)));
    assert_eq!(resolve(1, 0, NavKey::Up), Some(RovingAction::Focus(0)));
}

#[test]
fn empty_collection_never_focuses() {
    assert_eq!(resolve(0, 0, NavKey::Down), None);
    assert_eq!(resolve(0, 0, NavKey::Up), None);
}

#[test]
fn stale_index_past_shrunk_collection_stays_in_bounds() {
    // Collection shrank from 6 to 3 since the index was captured.
    assert_eq!(next_index(3, 5), Some(0));
    assert_eq!(previous_index(3, 5), Some(1));
}

#[test]
fn full_cycle_returns_to_start() {
    let len = 4;
    let mut index = 2;
    for _ in 0..len {
        index = next_index(len, index).unwrap();
    }
    assert_eq!(index, 2);
    for _ in 0..len {
        index = previous_index(len, index).unwrap();
    }
    assert_eq!(index, 2);
}

// =============================================================
// Activation
// =============================================================

#[test]
fn enter_and_space_activate() {
    assert_eq!(resolve(3, 1, NavKey::Enter), Some(RovingAction::Activate));
    assert_eq!(resolve(3, 1, NavKey::Space), Some(RovingAction::Activate));
    assert_eq!(resolve(0, 0, NavKey::Enter), Some(RovingAction::Activate));
}
