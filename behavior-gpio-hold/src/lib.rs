//! A `no_std` keymap behavior that holds GPIO lines active while a key is down.
//!
//! This crate provides [`hold::GpioHold`], which owns zero or more output
//! lines. Pressing a key bound to it drives every line active, releasing the
//! key drives every line inactive. Typical uses are a backlight or a
//! peripheral supply that should only be energized while a key is held.
//!
//! # Usage
//!
//! The lines are resolved by the firmware from the board description and
//! handed over already bound to their HAL pins.
//!
//! ```ignore
//! use behavior_gpio_hold::hold::GpioHold;
//! use keymap_behavior::{BehaviorRegistry, GpioPin, GpioSpec};
//!
//! const CONTROL_GPIOS: [GpioSpec; 2] = [
//!     GpioSpec::new("gpio0", 17),
//!     GpioSpec::new("gpio0", 20).active_low(),
//! ];
//!
//! let lines = [
//!     GpioPin::new(CONTROL_GPIOS[0], Output::new(peripherals.GPIO17, Level::Low, OutputConfig::default())),
//!     GpioPin::new(CONTROL_GPIOS[1], Output::new(peripherals.GPIO20, Level::High, OutputConfig::default())),
//! ];
//!
//! // Fails with `Error::DeviceNotReady` or `Error::ConfigurationFailed`.
//! let mut backlight = GpioHold::new(lines)?;
//! registry.register("gpio_hold", &mut backlight)?;
//! ```

#![cfg_attr(not(test), no_std)]

pub mod hold;
