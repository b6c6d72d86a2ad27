//! `analogWrite`-style adapter over a channel-based PWM driver
//!
//! The first write to a pin assigns it a channel (`1 + pin % 15`, never the
//! servo channel 0), configures that channel's timer and routes it to the
//! pin. Every write, first or not, then sets the channel duty.
//!
//! Pins 15 apart share a channel id. Each pin still runs its own
//! configure/attach on first use, so the second pin reconfigures the
//! channel the first one set up and both pins follow the last write.

use pinpwm_hal::PwmChannelDriver;

use crate::config::{PwmConfig, DEFAULT_FREQUENCY_HZ, DEFAULT_RESOLUTION_BITS};
use crate::error::PwmError;
use crate::handle::PinPwm;
use crate::table::{Assignment, ChannelId, ChannelTable};

/// Pin-addressed PWM output over a channel-based driver
///
/// Owns the pin to channel table. Construct one per chip at startup and
/// pass it (or a [`SharedPinPwm`](crate::SharedPinPwm) around it) to
/// whoever needs PWM output.
pub struct PinPwmAdapter<D> {
    driver: D,
    config: PwmConfig,
    table: ChannelTable,
}

impl<D: PwmChannelDriver> PinPwmAdapter<D> {
    /// Create an adapter with the default 5 kHz / 8-bit timer config
    pub const fn new(driver: D) -> Self {
        Self {
            driver,
            config: PwmConfig::new(DEFAULT_FREQUENCY_HZ, DEFAULT_RESOLUTION_BITS),
            table: ChannelTable::new(),
        }
    }

    /// Create an adapter with a custom timer config
    pub fn with_config(driver: D, config: PwmConfig) -> Result<Self, PwmError> {
        config.validate()?;
        Ok(Self {
            driver,
            config,
            table: ChannelTable::new(),
        })
    }

    /// Drive a pin at the given level
    ///
    /// Assigns, configures and attaches a channel on the pin's first use,
    /// then writes `value` unchanged. Levels above
    /// [`max_duty`](Self::max_duty) are left to the driver to clamp or
    /// ignore.
    ///
    /// # Errors
    /// [`PwmError::InvalidPin`] if `pin` is outside the table. No driver
    /// call is made in that case.
    pub fn set_pin_level(&mut self, pin: u8, value: u16) -> Result<(), PwmError> {
        let assignment = self.table.assign(pin)?;
        let channel = assignment.channel().get();

        if let Assignment::New(_ch) = assignment {
            #[cfg(feature = "defmt")]
            defmt::debug!("pwm: pin {} -> {}", pin, _ch);

            self.driver.configure(
                channel,
                self.config.frequency_hz,
                self.config.resolution_bits,
            );
            self.driver.attach(pin, channel);
        }

        #[cfg(feature = "defmt")]
        defmt::trace!("pwm: write ch{} duty={}", channel, value);

        self.driver.write(channel, value);
        Ok(())
    }

    /// Get a `SetDutyCycle` handle for one pin
    ///
    /// The channel is still assigned lazily, on the handle's first write.
    pub fn pin(&mut self, pin: u8) -> Result<PinPwm<'_, D>, PwmError> {
        self.table.get(pin)?;
        Ok(PinPwm::new(self, pin))
    }
}

impl<D> PinPwmAdapter<D> {
    /// Channel assigned to a pin, if any
    ///
    /// `None` for pins not driven yet and for pins outside the table.
    pub fn channel_for(&self, pin: u8) -> Option<ChannelId> {
        self.table.get(pin).ok().flatten()
    }

    /// Check if a pin has been assigned a channel
    pub fn is_assigned(&self, pin: u8) -> bool {
        self.channel_for(pin).is_some()
    }

    /// Iterate over `(pin, channel)` assignments in pin order
    pub fn assigned_pins(&self) -> impl Iterator<Item = (u8, ChannelId)> + '_ {
        self.table.iter()
    }

    /// Get the timer configuration
    pub fn config(&self) -> &PwmConfig {
        &self.config
    }

    /// Largest level the configured resolution can represent
    pub fn max_duty(&self) -> u16 {
        self.config.max_duty()
    }

    /// Get the underlying driver
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Get the underlying driver mutably
    ///
    /// Calls made directly on the driver bypass the channel table.
    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Consume the adapter and return the driver
    pub fn into_driver(self) -> D {
        self.driver
    }
}
