//! Channel-based PWM abstractions
//!
//! A PWM channel is a timer/compare pair that produces one output signal.
//! It has to be configured (frequency, resolution) and routed to a pin
//! before a duty cycle written to it shows up on that pin.

/// Channel owned by the servo facility
///
/// Drivers may hand this channel to other users; callers of
/// [`PwmChannelDriver`] that share a chip with a servo library must not
/// touch it.
pub const SERVO_CHANNEL: u8 = 0;

/// Channel-based PWM peripheral
///
/// Implementations translate these calls into the chip's register or SDK
/// operations. None of the operations report errors: out-of-range arguments
/// are the implementation's to clamp or ignore.
pub trait PwmChannelDriver {
    /// Configure a channel's timer
    ///
    /// # Arguments
    /// - `channel`: Hardware channel number
    /// - `frequency_hz`: PWM frequency in Hz
    /// - `resolution_bits`: Duty resolution (8 gives a 0-255 duty range)
    fn configure(&mut self, channel: u8, frequency_hz: u32, resolution_bits: u8);

    /// Route a channel's output to a physical pin
    fn attach(&mut self, pin: u8, channel: u8);

    /// Set the duty cycle of a configured, attached channel
    fn write(&mut self, channel: u8, duty: u16);
}

// Lets an adapter borrow a driver instead of owning it
impl<T: PwmChannelDriver + ?Sized> PwmChannelDriver for &mut T {
    fn configure(&mut self, channel: u8, frequency_hz: u32, resolution_bits: u8) {
        T::configure(self, channel, frequency_hz, resolution_bits);
    }

    fn attach(&mut self, pin: u8, channel: u8) {
        T::attach(self, pin, channel);
    }

    fn write(&mut self, channel: u8, duty: u16) {
        T::write(self, channel, duty);
    }
}
