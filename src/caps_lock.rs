use embedded_hal::digital::OutputPin;

use crate::{
    led_state::LedState,
    plugin::{HookResult, Plugin},
    warn,
};

/// Mirrors the host-reported Caps Lock state onto a status LED.
///
/// Stateless per-cycle transform; the pin level is recomputed from the
/// shared cell on every cycle, never toggled.
pub struct CapsLockIndicator<'l, P> {
    leds: &'l LedState,
    pin: P,
}

impl<'l, P: OutputPin> CapsLockIndicator<'l, P> {
    pub fn new(leds: &'l LedState, pin: P) -> Self {
        Self { leds, pin }
    }
}

impl<P: OutputPin> Plugin for CapsLockIndicator<'_, P> {
    fn after_each_cycle(&mut self) -> HookResult {
        let result = if self.leds.get().caps_lock() {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        if result.is_err() {
            warn!("Failed to drive caps lock LED");
        }

        HookResult::Continue
    }
}

#[cfg(test)]
#[path = "caps_lock_test.rs"]
mod test;
