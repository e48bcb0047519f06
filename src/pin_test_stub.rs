extern crate std;

use embedded_hal::digital::{Error, ErrorType, OutputPin};
use std::rc::Rc;
use std::sync::Mutex;
use std::vec::Vec;

#[derive(Debug)]
pub struct TestError;

impl Error for TestError {
    fn kind(&self) -> embedded_hal::digital::ErrorKind {
        embedded_hal::digital::ErrorKind::Other
    }
}

/// Output pin that records every level written to it.
#[derive(Clone, Default)]
pub struct Pin(Rc<PinShared>);

#[derive(Default)]
struct PinShared {
    inner: Mutex<PinInner>,
}

#[derive(Default)]
struct PinInner {
    is_high: Option<bool>,
    writes: Vec<bool>,
    fail_writes: bool,
}

impl Pin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_state(&self) -> Option<bool> {
        self.lock().is_high
    }

    /// Every level written, oldest first.
    pub fn writes(&self) -> Vec<bool> {
        self.lock().writes.clone()
    }

    /// Make subsequent writes fail with [`TestError`].
    pub fn fail_writes(&self) {
        self.lock().fail_writes = true;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, PinInner> {
        self.0.inner.lock().unwrap()
    }

    fn write(&mut self, is_high: bool) -> Result<(), TestError> {
        let mut inner = self.lock();
        if inner.fail_writes {
            return Err(TestError);
        }
        inner.is_high = Some(is_high);
        inner.writes.push(is_high);
        Ok(())
    }
}

impl ErrorType for Pin {
    type Error = TestError;
}

impl OutputPin for Pin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.write(false)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.write(true)
    }
}
