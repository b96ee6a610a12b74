//! GPIO output lines as seen by a behavior.
//!
//! A behavior only ever talks in logical levels ([`Level::Active`] and
//! [`Level::Inactive`]). The line maps them to a physical level using the
//! polarity declared in its [`GpioSpec`].

use embedded_hal::digital::{OutputPin, PinState};

/// A status code in the platform's errno convention, reported negated (`-ENODEV`).
pub type Errno = i32;

/// I/O error.
pub const EIO: Errno = 5;
/// No such device.
pub const ENODEV: Errno = 19;
/// Invalid argument.
pub const EINVAL: Errno = 22;

/// The logical level of an output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Off. Physical high for active-low lines, physical low otherwise.
    Inactive,
    /// On. Physical low for active-low lines, physical high otherwise.
    Active,
}

impl From<bool> for Level {
    fn from(active: bool) -> Self {
        if active {
            Level::Active
        } else {
            Level::Inactive
        }
    }
}

/// Electrical convention of a line's active level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveLevel {
    /// The line is active when driven high.
    #[default]
    High,
    /// The line is active when driven low.
    Low,
}

impl ActiveLevel {
    /// The physical pin state that represents `level`.
    pub fn pin_state(self, level: Level) -> PinState {
        match (self, level) {
            (ActiveLevel::High, Level::Active) | (ActiveLevel::Low, Level::Inactive) => {
                PinState::High
            }
            (ActiveLevel::High, Level::Inactive) | (ActiveLevel::Low, Level::Active) => {
                PinState::Low
            }
        }
    }
}

/// Board description of one GPIO line: controller, pin number and polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpioSpec {
    /// Name of the GPIO controller, e.g. `"gpio0"`.
    pub port: &'static str,
    /// Pin number on that controller.
    pub pin: u8,
    /// Active-level convention.
    pub active: ActiveLevel,
}

impl GpioSpec {
    /// An active-high line on `port`.
    pub const fn new(port: &'static str, pin: u8) -> Self {
        Self {
            port,
            pin,
            active: ActiveLevel::High,
        }
    }

    /// Marks the line as active-low.
    pub const fn active_low(mut self) -> Self {
        self.active = ActiveLevel::Low;
        self
    }
}

/// One digital output line owned by a behavior.
///
/// A line is configured once with [`OutputLine::configure_output`] before
/// it is written to.
pub trait OutputLine {
    /// Name of the controller the line belongs to.
    fn port_name(&self) -> &str;

    /// Pin number on the controller.
    fn pin(&self) -> u8;

    /// Whether the controller backing this line has been initialized.
    fn is_ready(&self) -> bool;

    /// Configures the line as a digital output driven to `initial`.
    fn configure_output(&mut self, initial: Level) -> Result<(), Errno>;

    /// Drives the line to `level`.
    fn set_level(&mut self, level: Level) -> Result<(), Errno>;
}

/// An [`OutputLine`] backed by an `embedded-hal` [`OutputPin`].
///
/// The HAL pin is already an output when it is handed over, so configuring
/// only drives the initial level. A line created with [`GpioPin::unbound`]
/// stands for a pin whose controller was never brought up and reports
/// itself as not ready.
pub struct GpioPin<P> {
    spec: GpioSpec,
    pin: Option<P>,
}

impl<P: OutputPin> GpioPin<P> {
    /// Binds `pin` to the board description `spec`.
    pub fn new(spec: GpioSpec, pin: P) -> Self {
        Self {
            spec,
            pin: Some(pin),
        }
    }

    /// A line described by `spec` with no controller behind it.
    pub fn unbound(spec: GpioSpec) -> Self {
        Self { spec, pin: None }
    }

    /// The board description of this line.
    pub fn spec(&self) -> &GpioSpec {
        &self.spec
    }

    fn drive(&mut self, level: Level) -> Result<(), Errno> {
        let state = self.spec.active.pin_state(level);
        let pin = self.pin.as_mut().ok_or(-ENODEV)?;
        pin.set_state(state).map_err(|err| {
            log::trace!("{} pin {}: write failed: {err:?}", self.spec.port, self.spec.pin);
            -EIO
        })
    }
}

impl<P: OutputPin> OutputLine for GpioPin<P> {
    fn port_name(&self) -> &str {
        self.spec.port
    }

    fn pin(&self) -> u8 {
        self.spec.pin
    }

    fn is_ready(&self) -> bool {
        self.pin.is_some()
    }

    fn configure_output(&mut self, initial: Level) -> Result<(), Errno> {
        self.drive(initial)
    }

    fn set_level(&mut self, level: Level) -> Result<(), Errno> {
        self.drive(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::mock_pin;

    #[test]
    fn active_high_maps_directly() {
        assert_eq!(ActiveLevel::High.pin_state(Level::Active), PinState::High);
        assert_eq!(ActiveLevel::High.pin_state(Level::Inactive), PinState::Low);
    }

    #[test]
    fn active_low_inverts() {
        assert_eq!(ActiveLevel::Low.pin_state(Level::Active), PinState::Low);
        assert_eq!(ActiveLevel::Low.pin_state(Level::Inactive), PinState::High);
    }

    #[test]
    fn spec_defaults_to_active_high() {
        let spec = GpioSpec::new("gpio0", 3);
        assert_eq!(spec.active, ActiveLevel::High);
        assert_eq!(spec.active_low().active, ActiveLevel::Low);
    }

    #[test]
    fn configure_drives_initial_level() {
        let (pin, probe) = mock_pin();
        let mut line = GpioPin::new(GpioSpec::new("gpio1", 4).active_low(), pin);

        assert!(line.is_ready());
        assert_eq!(probe.state(), None);
        line.configure_output(Level::Inactive).unwrap();
        assert_eq!(probe.state(), Some(PinState::High));

        line.set_level(Level::Active).unwrap();
        assert_eq!(probe.state(), Some(PinState::Low));
    }

    #[test]
    fn unbound_line_is_not_ready() {
        let mut line = GpioPin::<crate::mock::MockPin>::unbound(GpioSpec::new("gpio2", 0));
        assert!(!line.is_ready());
        assert_eq!(line.set_level(Level::Active), Err(-ENODEV));
    }

    #[test]
    fn hal_errors_become_eio() {
        let (pin, probe) = mock_pin();
        let mut line = GpioPin::new(GpioSpec::new("gpio0", 9), pin);
        probe.fail_writes(true);

        assert_eq!(line.configure_output(Level::Inactive), Err(-EIO));
        assert_eq!(probe.writes(), 0);
    }
}
