//! Initialization errors shared by all GPIO behaviors.

use core::fmt;

use crate::gpio::{Errno, ENODEV};

/// An error raised while bringing a behavior instance up.
///
/// Both variants are fatal to the instance being initialized. The boot
/// sequence decides what to do with the status returned by [`Error::errno`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The GPIO controller backing a configured pin is not ready.
    DeviceNotReady,
    /// Configuring a pin as an output failed with the given driver status.
    ConfigurationFailed(Errno),
}

impl Error {
    /// The negative status code reported to the initialization sequencer.
    pub fn errno(self) -> Errno {
        match self {
            Self::DeviceNotReady => -ENODEV,
            Self::ConfigurationFailed(code) => code,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DeviceNotReady => write!(f, "GPIO device not ready"),
            Self::ConfigurationFailed(code) => write!(f, "GPIO configuration failed ({code})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errno_matches_variant() {
        assert_eq!(Error::DeviceNotReady.errno(), -19);
        assert_eq!(Error::ConfigurationFailed(-5).errno(), -5);
    }
}
