#![no_std]
pub mod caps_lock;
pub mod hid;
pub mod led_state;
pub mod plugin;

#[cfg(any(test, feature = "test-utils"))]
pub mod pin_test_stub;

#[macro_use]
mod macros;
