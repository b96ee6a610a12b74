//! Shared building blocks for keymap behaviors that drive GPIO lines.
//!
//! This crate provides the contract between a keymap event dispatcher and the
//! behaviors it routes key events to, together with the GPIO side those
//! behaviors write to:
//!
//! * [`Behavior`] - the two callbacks (`on_pressed`, `on_released`) a behavior
//!   exposes, returning a [`Consumption`] signal.
//! * [`OutputLine`] - one digital output line with its active-level polarity.
//!   [`GpioPin`] implements it for any `embedded-hal` [`OutputPin`].
//! * [`BehaviorRegistry`] - a fixed-capacity table from behavior name to
//!   behavior instance, built once at startup by the firmware.
//!
//! # Usage
//!
//! ```ignore
//! use keymap_behavior::{BehaviorBinding, BehaviorRegistry, BindingEvent, GpioPin, GpioSpec};
//!
//! const BACKLIGHT: GpioSpec = GpioSpec::new("gpio0", 12);
//!
//! let line = GpioPin::new(BACKLIGHT, Output::new(peripherals.GPIO12, Level::Low, OutputConfig::default()));
//! let mut hold = GpioHold::new([line]).unwrap();
//!
//! let mut registry: BehaviorRegistry<'_, 4> = BehaviorRegistry::new();
//! registry.register("gpio_hold", &mut hold).unwrap();
//!
//! let binding = BehaviorBinding::new("gpio_hold");
//! registry.pressed(&binding, BindingEvent::new(0, 17, 0)).unwrap();
//! ```
//!
//! [`OutputPin`]: embedded_hal::digital::OutputPin

#![cfg_attr(not(any(test, feature = "mock")), no_std)]

mod behavior;
mod err;
pub mod gpio;
mod registry;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use behavior::*;
pub use err::Error;
pub use gpio::{ActiveLevel, Errno, GpioPin, GpioSpec, Level, OutputLine};
pub use registry::{BehaviorRegistry, RegistryError};
