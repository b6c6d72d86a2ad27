//! Mutex-guarded adapter for multi-context use
//!
//! The adapter's lookup, assign and configure steps must not interleave for
//! the same pin, or the channel gets configured twice. [`SharedPinPwm`]
//! runs every call inside one blocking-mutex section so it can live in a
//! `static` shared between tasks and interrupt handlers.
//!
//! ```ignore
//! static PWM: SharedPinPwm<CriticalSectionRawMutex, Ledc> =
//!     SharedPinPwm::new(PinPwmAdapter::new(Ledc::new()));
//!
//! PWM.set_pin_level(5, 128)?;
//! ```

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;
use pinpwm_hal::PwmChannelDriver;

use crate::adapter::PinPwmAdapter;
use crate::error::PwmError;
use crate::table::ChannelId;

/// [`PinPwmAdapter`] behind an `embassy-sync` blocking mutex
pub struct SharedPinPwm<M: RawMutex, D> {
    inner: Mutex<M, RefCell<PinPwmAdapter<D>>>,
}

impl<M: RawMutex, D: PwmChannelDriver> SharedPinPwm<M, D> {
    /// Wrap an adapter
    pub const fn new(adapter: PinPwmAdapter<D>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(adapter)),
        }
    }

    /// Drive a pin at the given level, see [`PinPwmAdapter::set_pin_level`]
    pub fn set_pin_level(&self, pin: u8, value: u16) -> Result<(), PwmError> {
        self.lock(|pwm| pwm.set_pin_level(pin, value))
    }

    /// Channel assigned to a pin, if any
    pub fn channel_for(&self, pin: u8) -> Option<ChannelId> {
        self.lock(|pwm| pwm.channel_for(pin))
    }

    /// Run a closure with exclusive access to the adapter
    ///
    /// The closure must not call back into this `SharedPinPwm`.
    pub fn lock<R>(&self, f: impl FnOnce(&mut PinPwmAdapter<D>) -> R) -> R {
        self.inner.lock(|cell| f(&mut cell.borrow_mut()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{Call, MockDriver};
    use embassy_sync::blocking_mutex::raw::{CriticalSectionRawMutex, NoopRawMutex};

    #[test]
    fn test_shared_write_sequence() {
        let pwm: SharedPinPwm<NoopRawMutex, _> =
            SharedPinPwm::new(PinPwmAdapter::new(MockDriver::new()));

        pwm.set_pin_level(5, 128).unwrap();
        pwm.set_pin_level(5, 200).unwrap();

        assert_eq!(pwm.channel_for(5).map(ChannelId::get), Some(6));
        pwm.lock(|adapter| {
            assert_eq!(adapter.driver().configure_count(), 1);
            assert_eq!(adapter.driver().attach_count(), 1);
            assert_eq!(
                adapter.driver().calls.last(),
                Some(&Call::Write {
                    channel: 6,
                    duty: 200,
                })
            );
        });
    }

    #[test]
    fn test_shared_invalid_pin() {
        let pwm: SharedPinPwm<NoopRawMutex, _> =
            SharedPinPwm::new(PinPwmAdapter::new(MockDriver::new()));

        assert_eq!(pwm.set_pin_level(40, 1), Err(PwmError::InvalidPin(40)));
        assert_eq!(pwm.channel_for(40), None);
    }

    static SHARED: SharedPinPwm<CriticalSectionRawMutex, MockDriver> =
        SharedPinPwm::new(PinPwmAdapter::new(MockDriver::new()));

    #[test]
    fn test_concurrent_first_use_configures_once() {
        let threads: std::vec::Vec<_> = (0..4)
            .map(|_| {
                std::thread::spawn(|| {
                    for pin in 0..10u8 {
                        SHARED.set_pin_level(pin, pin as u16).unwrap();
                    }
                })
            })
            .collect();

        for t in threads {
            t.join().unwrap();
        }

        SHARED.lock(|adapter| {
            assert_eq!(adapter.driver().configure_count(), 10);
            assert_eq!(adapter.driver().attach_count(), 10);
            assert_eq!(adapter.driver().write_count(), 40);
        });
    }
}
