//! Error types

/// Errors that can occur when driving a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PwmError {
    /// Pin number is outside the channel table
    InvalidPin(u8),
    /// Frequency is zero or resolution is unsupported
    InvalidConfig,
}

impl core::fmt::Display for PwmError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PwmError::InvalidPin(pin) => write!(f, "pin {} has no channel slot", pin),
            PwmError::InvalidConfig => f.write_str("invalid PWM configuration"),
        }
    }
}

impl embedded_hal::pwm::Error for PwmError {
    fn kind(&self) -> embedded_hal::pwm::ErrorKind {
        embedded_hal::pwm::ErrorKind::Other
    }
}
