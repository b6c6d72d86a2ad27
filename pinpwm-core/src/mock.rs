//! Recording PWM driver for host tests

use heapless::Vec;
use pinpwm_hal::PwmChannelDriver;

/// Calls seen by [`MockDriver`], in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Configure {
        channel: u8,
        frequency_hz: u32,
        resolution_bits: u8,
    },
    Attach {
        pin: u8,
        channel: u8,
    },
    Write {
        channel: u8,
        duty: u16,
    },
}

/// Mock driver that logs every call
#[derive(Debug, Default)]
pub struct MockDriver {
    pub calls: Vec<Call, 256>,
}

impl MockDriver {
    pub const fn new() -> Self {
        Self { calls: Vec::new() }
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    pub fn configure_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::Configure { .. }))
            .count()
    }

    pub fn attach_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::Attach { .. }))
            .count()
    }

    pub fn write_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::Write { .. }))
            .count()
    }

    fn record(&mut self, call: Call) {
        self.calls.push(call).expect("mock call log full");
    }
}

impl PwmChannelDriver for MockDriver {
    fn configure(&mut self, channel: u8, frequency_hz: u32, resolution_bits: u8) {
        self.record(Call::Configure {
            channel,
            frequency_hz,
            resolution_bits,
        });
    }

    fn attach(&mut self, pin: u8, channel: u8) {
        self.record(Call::Attach { pin, channel });
    }

    fn write(&mut self, channel: u8, duty: u16) {
        self.record(Call::Write { channel, duty });
    }
}
