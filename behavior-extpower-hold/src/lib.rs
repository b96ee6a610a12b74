//! A `no_std` keymap behavior that cuts the external power rail while a key is held.
//!
//! This crate provides [`ExtPowerHold`], bound to the single line the board
//! exposes under the [`EXTPOWER_ALIAS`] alias. The rail is off after
//! initialization. Pressing the bound key turns it off, releasing the key
//! turns it back on, for example a hot-swap button that must unpower a
//! peripheral while it is held.
//!
//! Unlike a hold behavior that energizes lines, this one reports every event
//! as [`Consumption::Transparent`], so other bindings on the same key still run.
//!
//! # Usage
//!
//! ```ignore
//! use behavior_extpower_hold::{ExtPowerHold, BEHAVIOR_NAME};
//! use keymap_behavior::{GpioPin, GpioSpec};
//!
//! const EXTPOWER: GpioSpec = GpioSpec::new("gpio0", 13);
//!
//! let line = GpioPin::new(EXTPOWER, Output::new(peripherals.GPIO13, Level::Low, OutputConfig::default()));
//! let mut extpower = ExtPowerHold::new(line)?;
//! registry.register(BEHAVIOR_NAME, &mut extpower)?;
//! ```

#![cfg_attr(not(test), no_std)]

use keymap_behavior::{
    Behavior, BehaviorBinding, BindingEvent, Consumption, Error, Level, OutputLine,
};
use log::{error, info, warn};

/// Board alias of the external power line.
pub const EXTPOWER_ALIAS: &str = "extpower";

/// Name the behavior is registered under.
pub const BEHAVIOR_NAME: &str = "extpower_toggle_on_hold";

/// Switches the external power rail off while its key is held.
///
/// There is exactly one of these per board. The rail state lives on the pin
/// itself and is not tracked here.
pub struct ExtPowerHold<L> {
    line: L,
}

impl<L: OutputLine> ExtPowerHold<L> {
    /// Configures the external power line as an output with the rail off.
    pub fn new(mut line: L) -> Result<Self, Error> {
        if !line.is_ready() {
            error!("EXTPOWER GPIO device not ready");
            return Err(Error::DeviceNotReady);
        }

        line.configure_output(Level::Inactive).map_err(|code| {
            error!("EXTPOWER: failed to configure pin {}: {}", line.pin(), code);
            Error::ConfigurationFailed(code)
        })?;

        Ok(Self { line })
    }

    fn power(&mut self, level: Level) {
        if let Err(code) = self.line.set_level(level) {
            warn!("EXTPOWER: failed to set {:?}: {}", level, code);
        }
    }
}

impl<L: OutputLine> Behavior for ExtPowerHold<L> {
    fn on_pressed(&mut self, _binding: &BehaviorBinding, _event: BindingEvent) -> Consumption {
        info!("EXTPOWER: pressed, disabling power");
        self.power(Level::Inactive);
        Consumption::Transparent
    }

    fn on_released(&mut self, _binding: &BehaviorBinding, _event: BindingEvent) -> Consumption {
        info!("EXTPOWER: released, enabling power");
        self.power(Level::Active);
        Consumption::Transparent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::digital::PinState;
    use keymap_behavior::mock::{mock_pin, MockPin, PinProbe};
    use keymap_behavior::{BehaviorRegistry, GpioPin, GpioSpec};

    const BINDING: BehaviorBinding = BehaviorBinding::new(BEHAVIOR_NAME);
    const EXTPOWER: GpioSpec = GpioSpec::new("gpio0", 13);

    fn extpower() -> (ExtPowerHold<GpioPin<MockPin>>, PinProbe) {
        let (pin, probe) = mock_pin();
        let extpower = ExtPowerHold::new(GpioPin::new(EXTPOWER, pin)).unwrap();
        (extpower, probe)
    }

    #[test]
    fn rail_is_off_after_init() {
        let (_extpower, probe) = extpower();
        assert_eq!(probe.history(), vec![PinState::Low]);
    }

    #[test]
    fn press_cuts_power_release_restores_it() {
        let (mut extpower, probe) = extpower();
        let event = BindingEvent::new(1, 42, 0);

        extpower.on_pressed(&BINDING, event);
        assert_eq!(probe.state(), Some(PinState::Low));
        extpower.on_released(&BINDING, event);
        assert_eq!(probe.state(), Some(PinState::High));
        extpower.on_pressed(&BINDING, event);
        extpower.on_released(&BINDING, event);

        assert_eq!(
            probe.history(),
            vec![
                PinState::Low,
                PinState::Low,
                PinState::High,
                PinState::Low,
                PinState::High
            ]
        );
    }

    #[test]
    fn events_are_always_transparent() {
        let (mut extpower, probe) = extpower();
        let event = BindingEvent::default();

        assert_eq!(extpower.on_released(&BINDING, event), Consumption::Transparent);
        assert_eq!(extpower.on_released(&BINDING, event), Consumption::Transparent);
        assert_eq!(extpower.on_pressed(&BINDING, event), Consumption::Transparent);

        probe.fail_writes(true);
        assert_eq!(extpower.on_pressed(&BINDING, event), Consumption::Transparent);
        assert_eq!(extpower.on_released(&BINDING, event), Consumption::Transparent);
    }

    #[test]
    fn active_low_rail() {
        let (pin, probe) = mock_pin();
        let line = GpioPin::new(EXTPOWER.active_low(), pin);
        let mut extpower = ExtPowerHold::new(line).unwrap();

        assert_eq!(probe.state(), Some(PinState::High));
        extpower.on_pressed(&BINDING, BindingEvent::default());
        assert_eq!(probe.state(), Some(PinState::High));
        extpower.on_released(&BINDING, BindingEvent::default());
        assert_eq!(probe.state(), Some(PinState::Low));
    }

    #[test]
    fn unready_controller_fails_init() {
        let line = GpioPin::<MockPin>::unbound(EXTPOWER);
        let err = ExtPowerHold::new(line).err();
        assert_eq!(err, Some(Error::DeviceNotReady));
    }

    #[test]
    fn configure_failure_fails_init() {
        let (pin, probe) = mock_pin();
        probe.fail_writes(true);
        let err = ExtPowerHold::new(GpioPin::new(EXTPOWER, pin)).err();
        assert_eq!(err, Some(Error::ConfigurationFailed(-5)));
    }

    #[test]
    fn dispatched_through_registry() {
        let (mut extpower, probe) = extpower();
        let mut registry: BehaviorRegistry<'_, 1> = BehaviorRegistry::new();
        registry.register(BEHAVIOR_NAME, &mut extpower).unwrap();

        let event = BindingEvent::new(0, 5, 0);
        assert_eq!(registry.pressed(&BINDING, event), Ok(Consumption::Transparent));
        assert_eq!(probe.state(), Some(PinState::Low));
        assert_eq!(registry.released(&BINDING, event), Ok(Consumption::Transparent));
        assert_eq!(probe.state(), Some(PinState::High));
    }
}
