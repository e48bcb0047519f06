extern crate std;

use super::*;
use crate::hid::LedIndicator;

#[test]
fn starts_with_no_locks_active() {
    let state = LedState::new();
    assert_eq!(state.get(), LedIndicator::none());
}

#[test]
fn get_reflects_latest_set() {
    let state = LedState::new();
    state.set(LedIndicator::from_bits(LedIndicator::CAPS_LOCK));
    assert!(state.get().caps_lock());

    state.set(LedIndicator::none());
    assert!(!state.get().caps_lock());
}
