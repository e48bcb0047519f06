use embassy_usb::{
    class::hid::{ReportId, RequestHandler},
    control::OutResponse,
};

use crate::led_state::LedState;

/// Lock-key flags from the HID LED usage page, as sent by the host in a
/// keyboard output report.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedIndicator(u8);

impl LedIndicator {
    pub const NUM_LOCK: u8 = 1 << 0;
    pub const CAPS_LOCK: u8 = 1 << 1;
    pub const SCROLL_LOCK: u8 = 1 << 2;
    pub const COMPOSE: u8 = 1 << 3;
    pub const KANA: u8 = 1 << 4;

    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// No lock keys active; also what a host that has never sent a report
    /// looks like.
    pub const fn none() -> Self {
        Self(0)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn num_lock(self) -> bool {
        self.0 & Self::NUM_LOCK != 0
    }

    pub const fn caps_lock(self) -> bool {
        self.0 & Self::CAPS_LOCK != 0
    }

    pub const fn scroll_lock(self) -> bool {
        self.0 & Self::SCROLL_LOCK != 0
    }

    pub const fn compose(self) -> bool {
        self.0 & Self::COMPOSE != 0
    }

    pub const fn kana(self) -> bool {
        self.0 & Self::KANA != 0
    }
}

/// Stores host LED output reports into a [`LedState`].
///
/// Wire this into the keyboard interface's HID reader so the shared cell
/// always holds the most recently reported lock-key state.
pub struct LedReportListener<'l> {
    leds: &'l LedState,
}

impl<'l> LedReportListener<'l> {
    pub fn new(leds: &'l LedState) -> Self {
        Self { leds }
    }
}

impl RequestHandler for LedReportListener<'_> {
    fn set_report(&mut self, id: ReportId, data: &[u8]) -> OutResponse {
        match (id, data.first()) {
            (ReportId::Out(_), Some(&bits)) => {
                self.leds.set(LedIndicator::from_bits(bits));
                OutResponse::Accepted
            }
            _ => OutResponse::Rejected,
        }
    }
}

#[cfg(test)]
#[path = "hid_test.rs"]
mod test;
