//! `embedded-hal` duty cycle handle for a single pin
//!
//! Lets drivers written against [`SetDutyCycle`] (LED dimmers, DC motor
//! drivers, buzzers) run on an adapter-managed pin.

use embedded_hal::pwm::{ErrorType, SetDutyCycle};
use pinpwm_hal::PwmChannelDriver;

use crate::adapter::PinPwmAdapter;
use crate::error::PwmError;

/// One pin of a [`PinPwmAdapter`]
///
/// Obtained from [`PinPwmAdapter::pin`], which has already checked the pin
/// number. Borrows the adapter mutably for its lifetime.
pub struct PinPwm<'a, D> {
    adapter: &'a mut PinPwmAdapter<D>,
    pin: u8,
}

impl<'a, D: PwmChannelDriver> PinPwm<'a, D> {
    pub(crate) fn new(adapter: &'a mut PinPwmAdapter<D>, pin: u8) -> Self {
        Self { adapter, pin }
    }

    /// Pin number this handle drives
    pub fn pin(&self) -> u8 {
        self.pin
    }
}

impl<D: PwmChannelDriver> ErrorType for PinPwm<'_, D> {
    type Error = PwmError;
}

impl<D: PwmChannelDriver> SetDutyCycle for PinPwm<'_, D> {
    fn max_duty_cycle(&self) -> u16 {
        self.adapter.max_duty()
    }

    /// Duties above [`max_duty_cycle`](Self::max_duty_cycle) are clamped
    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        let duty = duty.min(self.adapter.max_duty());
        self.adapter.set_pin_level(self.pin, duty)
    }
}
