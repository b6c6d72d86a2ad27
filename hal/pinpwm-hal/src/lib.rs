//! pinpwm Hardware Abstraction Layer
//!
//! This crate defines the channel-based PWM driver trait that chip-specific
//! HALs implement. Platforms in this family (ESP32 LEDC and similar) do not
//! write a duty cycle to a pin directly: a hardware channel is configured,
//! routed to a pin, and then written.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (analogWrite-style calls)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  pinpwm-core (PinPwmAdapter)            │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  pinpwm-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             chip-specific driver
//! ```
//!
//! # Traits
//!
//! - [`pwm::PwmChannelDriver`] - Channel configuration, pin routing, duty writes

#![no_std]
#![deny(unsafe_code)]

pub mod pwm;

pub use pwm::{PwmChannelDriver, SERVO_CHANNEL};
