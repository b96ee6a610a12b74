//! A recording `OutputPin` for host-side tests.

extern crate std;

use core::cell::RefCell;
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::digital::{ErrorKind, ErrorType, OutputPin, PinState};

/// Returned by [`MockPin`] writes after [`PinProbe::fail_writes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockPinError;

impl embedded_hal::digital::Error for MockPinError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

#[derive(Default)]
struct Shared {
    history: Vec<PinState>,
    fail_writes: bool,
}

/// An output pin that records every physical level written to it.
pub struct MockPin {
    shared: Rc<RefCell<Shared>>,
}

/// Observes (and injects faults into) the [`MockPin`] it was created with.
#[derive(Clone)]
pub struct PinProbe {
    shared: Rc<RefCell<Shared>>,
}

/// Creates a pin together with its probe.
pub fn mock_pin() -> (MockPin, PinProbe) {
    let shared = Rc::new(RefCell::new(Shared::default()));
    (
        MockPin {
            shared: shared.clone(),
        },
        PinProbe { shared },
    )
}

impl MockPin {
    fn write(&mut self, state: PinState) -> Result<(), MockPinError> {
        let mut shared = self.shared.borrow_mut();
        if shared.fail_writes {
            return Err(MockPinError);
        }
        shared.history.push(state);
        Ok(())
    }
}

impl ErrorType for MockPin {
    type Error = MockPinError;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.write(PinState::Low)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.write(PinState::High)
    }
}

impl PinProbe {
    /// The last level written, or `None` if the pin was never driven.
    pub fn state(&self) -> Option<PinState> {
        self.shared.borrow().history.last().copied()
    }

    /// Every level written, oldest first.
    pub fn history(&self) -> Vec<PinState> {
        self.shared.borrow().history.clone()
    }

    /// Number of successful writes.
    pub fn writes(&self) -> usize {
        self.shared.borrow().history.len()
    }

    /// Makes subsequent writes fail (or succeed again).
    pub fn fail_writes(&self, fail: bool) {
        self.shared.borrow_mut().fail_writes = fail;
    }
}
