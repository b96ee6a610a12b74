//! Core implementation of the GPIO hold behavior.

use core::fmt;

use keymap_behavior::gpio::EINVAL;
use keymap_behavior::{
    Behavior, BehaviorBinding, BindingEvent, Consumption, Errno, Error, Level, OutputLine,
};
use log::{debug, error, warn};

/// Level written on press.
pub const GPIO_HOLD_ON: Level = Level::Active;
/// Level written on release and at initialization.
pub const GPIO_HOLD_OFF: Level = Level::Inactive;

/// An error returned by [`GpioHold::set_channel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlError {
    /// The channel number is 0 or larger than the number of lines.
    InvalidChannel,
    /// The line rejected the write with the given status.
    Write(Errno),
}

impl ControlError {
    /// The negative status code for this error.
    pub fn errno(self) -> Errno {
        match self {
            Self::InvalidChannel => -EINVAL,
            Self::Write(code) => code,
        }
    }
}

impl fmt::Display for ControlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidChannel => write!(f, "invalid channel"),
            Self::Write(code) => write!(f, "GPIO write failed ({code})"),
        }
    }
}

/// Drives a fixed set of output lines active while its key is held.
///
/// Each instance owns its lines exclusively. The line count `N` may be zero,
/// in which case every operation is a no-op.
pub struct GpioHold<L, const N: usize> {
    lines: [L; N],
}

impl<L: OutputLine, const N: usize> GpioHold<L, N> {
    /// Configures every line as an output driven inactive.
    ///
    /// Lines are brought up in order and the first failure aborts the
    /// instance. Lines configured before the failing one are left as they are.
    pub fn new(mut lines: [L; N]) -> Result<Self, Error> {
        for line in lines.iter_mut() {
            if !line.is_ready() {
                error!("GPIO device {} not ready", line.port_name());
                return Err(Error::DeviceNotReady);
            }

            if let Err(code) = line.configure_output(GPIO_HOLD_OFF) {
                error!("Failed to configure GPIO pin {}: {}", line.pin(), code);
                return Err(Error::ConfigurationFailed(code));
            }
        }

        debug!("Initialized gpio hold behavior with {} GPIO pins", N);
        Ok(Self { lines })
    }

    /// Number of lines owned by this instance.
    pub fn len(&self) -> usize {
        N
    }

    pub fn is_empty(&self) -> bool {
        N == 0
    }

    /// Drives a single line, numbered from 1 in configuration order.
    pub fn set_channel(&mut self, channel: usize, enable: bool) -> Result<(), ControlError> {
        let line = channel
            .checked_sub(1)
            .and_then(|index| self.lines.get_mut(index))
            .ok_or_else(|| {
                warn!("GPIO hold channel {} out of range (1..={})", channel, N);
                ControlError::InvalidChannel
            })?;

        line.set_level(Level::from(enable))
            .map_err(ControlError::Write)?;
        debug!(
            "GPIO hold channel {} turned {}",
            channel,
            if enable { "ON" } else { "OFF" }
        );
        Ok(())
    }

    fn drive(&mut self, level: Level) {
        for line in self.lines.iter_mut() {
            if let Err(code) = line.set_level(level) {
                warn!(
                    "Failed to set GPIO {} pin {} to {:?}: {}",
                    line.port_name(),
                    line.pin(),
                    level,
                    code
                );
            }
        }
    }
}

impl<L: OutputLine, const N: usize> Behavior for GpioHold<L, N> {
    fn on_pressed(&mut self, _binding: &BehaviorBinding, _event: BindingEvent) -> Consumption {
        self.drive(GPIO_HOLD_ON);
        debug!("GPIO turned ON");
        Consumption::Opaque
    }

    fn on_released(&mut self, _binding: &BehaviorBinding, _event: BindingEvent) -> Consumption {
        self.drive(GPIO_HOLD_OFF);
        debug!("GPIO turned OFF");
        Consumption::Opaque
    }
}
