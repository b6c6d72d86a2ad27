//! Board-agnostic `analogWrite`-style PWM output
//!
//! Chips with channel-based PWM (ESP32 LEDC and friends) have no call that
//! writes a duty cycle straight to a pin. This crate provides one:
//!
//! - [`PinPwmAdapter`] - assigns a channel to each pin on first use,
//!   configures and attaches it, then writes the duty cycle
//! - [`ChannelTable`] - the append-only pin to channel mapping
//! - [`SharedPinPwm`] - mutex-guarded adapter for use from several contexts
//! - [`PinPwm`] - `embedded-hal` [`SetDutyCycle`](embedded_hal::pwm::SetDutyCycle)
//!   handle for a single pin
//!
//! ```ignore
//! let mut pwm = PinPwmAdapter::new(ledc);
//! pwm.set_pin_level(5, 128)?; // configure(6, 5000, 8), attach(5, 6), write(6, 128)
//! pwm.set_pin_level(5, 200)?; // write(6, 200)
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod adapter;
pub mod config;
pub mod error;
pub mod handle;
pub mod shared;
pub mod table;

#[cfg(test)]
pub(crate) mod mock;

pub use adapter::PinPwmAdapter;
pub use config::{PwmConfig, CHANNEL_COUNT, MAX_PINS};
pub use error::PwmError;
pub use handle::PinPwm;
pub use shared::SharedPinPwm;
pub use table::{Assignment, ChannelId, ChannelTable};
