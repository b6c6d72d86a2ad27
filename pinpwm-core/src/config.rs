//! PWM configuration
//!
//! Timer settings applied to every channel the adapter configures, plus the
//! fixed table dimensions.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::PwmError;

/// Number of pins the channel table covers (0-39 on ESP32)
pub const MAX_PINS: usize = 40;

/// Hardware channels on the chip (0-15)
pub const CHANNEL_COUNT: u8 = 16;

/// Channel never handed out by the adapter (owned by the servo library)
pub const RESERVED_CHANNEL: u8 = pinpwm_hal::SERVO_CHANNEL;

/// Channel ids are assigned as `1 + pin % CHANNEL_MODULUS`
pub const CHANNEL_MODULUS: u8 = CHANNEL_COUNT - 1;

/// Default PWM frequency in Hz
pub const DEFAULT_FREQUENCY_HZ: u32 = 5000;

/// Default duty resolution in bits
pub const DEFAULT_RESOLUTION_BITS: u8 = 8;

/// Widest duty resolution that still fits a `u16` duty value
pub const MAX_RESOLUTION_BITS: u8 = 16;

/// Timer configuration for newly assigned channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PwmConfig {
    /// PWM frequency in Hz
    pub frequency_hz: u32,
    /// Duty resolution in bits (1-16)
    pub resolution_bits: u8,
}

impl PwmConfig {
    /// Create a new config
    pub const fn new(frequency_hz: u32, resolution_bits: u8) -> Self {
        Self {
            frequency_hz,
            resolution_bits,
        }
    }

    /// Largest duty value for the configured resolution
    ///
    /// 255 at the default 8 bits. Only meaningful on a validated config.
    pub const fn max_duty(&self) -> u16 {
        match self.resolution_bits {
            0 => 0,
            bits if bits >= MAX_RESOLUTION_BITS => u16::MAX,
            bits => (1u16 << bits) - 1,
        }
    }

    /// Check the config can be handed to a driver
    pub fn validate(&self) -> Result<(), PwmError> {
        if self.frequency_hz == 0 {
            return Err(PwmError::InvalidConfig);
        }
        if self.resolution_bits == 0 || self.resolution_bits > MAX_RESOLUTION_BITS {
            return Err(PwmError::InvalidConfig);
        }
        Ok(())
    }
}

impl Default for PwmConfig {
    fn default() -> Self {
        Self::new(DEFAULT_FREQUENCY_HZ, DEFAULT_RESOLUTION_BITS)
    }
}
