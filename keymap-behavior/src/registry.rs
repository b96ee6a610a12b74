//! Name-to-behavior table consulted by the keymap dispatcher.

use core::fmt;

use heapless::Vec;

use crate::behavior::{Behavior, BehaviorBinding, BindingEvent, Consumption};

/// An error returned by [`BehaviorRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    /// The registry already holds its maximum number of behaviors.
    Full,
    /// A behavior with the same name is already registered.
    Duplicate,
    /// No behavior is registered under the binding's name.
    UnknownBehavior,
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => write!(f, "behavior registry is full"),
            Self::Duplicate => write!(f, "behavior already registered"),
            Self::UnknownBehavior => write!(f, "unknown behavior"),
        }
    }
}

/// Fixed-capacity mapping from behavior name to behavior instance.
///
/// The firmware fills the registry once at startup, after every behavior
/// has been initialized, and hands it to the dispatcher.
pub struct BehaviorRegistry<'a, const N: usize> {
    entries: Vec<(&'static str, &'a mut dyn Behavior), N>,
}

impl<'a, const N: usize> BehaviorRegistry<'a, N> {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Registers `behavior` under `name`.
    pub fn register(
        &mut self,
        name: &'static str,
        behavior: &'a mut dyn Behavior,
    ) -> Result<(), RegistryError> {
        if self.contains(name) {
            log::error!("Behavior {name} registered twice");
            return Err(RegistryError::Duplicate);
        }
        self.entries.push((name, behavior)).map_err(|_| {
            log::error!("No room to register behavior {name}");
            RegistryError::Full
        })?;
        log::debug!("Registered behavior {name}");
        Ok(())
    }

    /// Whether a behavior is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(entry, _)| *entry == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up the behavior registered under `name`.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut dyn Behavior> {
        self.entries
            .iter_mut()
            .find(|(entry, _)| *entry == name)
            .map(|(_, behavior)| &mut **behavior as &mut dyn Behavior)
    }

    /// Routes a key press to the behavior named by `binding`.
    pub fn pressed(
        &mut self,
        binding: &BehaviorBinding,
        event: BindingEvent,
    ) -> Result<Consumption, RegistryError> {
        let behavior = self.lookup(binding)?;
        Ok(behavior.on_pressed(binding, event))
    }

    /// Routes a key release to the behavior named by `binding`.
    pub fn released(
        &mut self,
        binding: &BehaviorBinding,
        event: BindingEvent,
    ) -> Result<Consumption, RegistryError> {
        let behavior = self.lookup(binding)?;
        Ok(behavior.on_released(binding, event))
    }

    fn lookup(&mut self, binding: &BehaviorBinding) -> Result<&mut dyn Behavior, RegistryError> {
        self.get_mut(binding.behavior_dev).ok_or_else(|| {
            log::warn!("No behavior named {}", binding.behavior_dev);
            RegistryError::UnknownBehavior
        })
    }
}

impl<const N: usize> Default for BehaviorRegistry<'_, N> {
    fn default() -> Self {
        Self::new()
    }
}
