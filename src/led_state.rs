use core::cell::RefCell;

use embassy_sync::blocking_mutex::CriticalSectionMutex;

use crate::hid::LedIndicator;

/// Current host-reported lock-key LED state.
///
/// Owned by keyboard initialization code, which shares it by reference with
/// the HID layer (writer) and indicator plugins (readers). A cell the host
/// has never written reads as [`LedIndicator::none`].
pub struct LedState(CriticalSectionMutex<RefCell<LedIndicator>>);

impl LedState {
    pub const fn new() -> Self {
        Self(CriticalSectionMutex::new(RefCell::new(LedIndicator::none())))
    }

    pub fn set(&self, leds: LedIndicator) {
        self.0.lock(|r| *r.borrow_mut() = leds);
    }

    pub fn get(&self) -> LedIndicator {
        self.0.lock(|r| *r.borrow())
    }
}

impl Default for LedState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "led_state_test.rs"]
mod test;
