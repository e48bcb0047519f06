extern crate std;

use embassy_usb::{
    class::hid::{ReportId, RequestHandler},
    control::OutResponse,
};

use super::*;
use crate::led_state::LedState;

#[test]
fn indicator_bits() {
    let leds = LedIndicator::from_bits(0b0001_0110);
    assert!(leds.caps_lock());
    assert!(leds.scroll_lock());
    assert!(leds.kana());
    assert!(!leds.num_lock());
    assert!(!leds.compose());
    assert_eq!(leds.bits(), 0b0001_0110);

    assert_eq!(LedIndicator::none(), LedIndicator::default());
    assert!(!LedIndicator::none().caps_lock());
}

#[test]
fn out_report_updates_state() {
    let state = LedState::new();
    let mut listener = LedReportListener::new(&state);

    let r = listener.set_report(ReportId::Out(0), &[LedIndicator::CAPS_LOCK]);
    assert!(matches!(r, OutResponse::Accepted));
    assert!(state.get().caps_lock());

    let r = listener.set_report(ReportId::Out(0), &[0]);
    assert!(matches!(r, OutResponse::Accepted));
    assert_eq!(state.get(), LedIndicator::none());
}

#[test]
fn empty_and_in_reports_are_rejected() {
    let state = LedState::new();
    state.set(LedIndicator::from_bits(LedIndicator::CAPS_LOCK));
    let mut listener = LedReportListener::new(&state);

    let r = listener.set_report(ReportId::Out(0), &[]);
    assert!(matches!(r, OutResponse::Rejected));

    let r = listener.set_report(ReportId::In(1), &[LedIndicator::NUM_LOCK]);
    assert!(matches!(r, OutResponse::Rejected));

    assert!(state.get().caps_lock());
}
