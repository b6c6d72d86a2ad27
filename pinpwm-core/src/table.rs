//! Pin to channel mapping
//!
//! Each pin gets a channel the first time it is driven and keeps it for the
//! life of the table. Channel ids come straight from the pin number, so
//! pins 15 apart share a channel.

use core::num::NonZeroU8;

use crate::config::{CHANNEL_MODULUS, MAX_PINS};
use crate::error::PwmError;

/// Channel id handed out by the table
///
/// Never the reserved servo channel (0): the id is a `NonZeroU8`, and an
/// empty slot is `None`, which occupies the same byte the C-style zero
/// sentinel would.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChannelId(NonZeroU8);

impl ChannelId {
    /// Wrap a raw channel number, rejecting the reserved channel
    pub const fn new(channel: u8) -> Option<Self> {
        match NonZeroU8::new(channel) {
            Some(id) => Some(Self(id)),
            None => None,
        }
    }

    /// Channel assigned to a pin: `1 + (pin % 15)`
    pub const fn for_pin(pin: u8) -> Self {
        Self(NonZeroU8::MIN.saturating_add(pin % CHANNEL_MODULUS))
    }

    /// Raw channel number for the driver
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ChannelId {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "ch{}", self.get())
    }
}

/// Result of [`ChannelTable::assign`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Assignment {
    /// Pin was unassigned and now owns this channel
    New(ChannelId),
    /// Pin already owned this channel
    Existing(ChannelId),
}

impl Assignment {
    /// The channel, however it was obtained
    pub const fn channel(self) -> ChannelId {
        match self {
            Assignment::New(ch) | Assignment::Existing(ch) => ch,
        }
    }

    /// Check if this call made the assignment
    pub const fn is_new(self) -> bool {
        matches!(self, Assignment::New(_))
    }
}

/// Append-only pin to channel table
#[derive(Debug, Clone)]
pub struct ChannelTable {
    slots: [Option<ChannelId>; MAX_PINS],
}

impl ChannelTable {
    /// Create a table with every pin unassigned
    pub const fn new() -> Self {
        Self {
            slots: [None; MAX_PINS],
        }
    }

    /// Look up the channel assigned to a pin
    ///
    /// Returns `Ok(None)` for a valid pin that has not been driven yet.
    pub fn get(&self, pin: u8) -> Result<Option<ChannelId>, PwmError> {
        self.slots
            .get(pin as usize)
            .copied()
            .ok_or(PwmError::InvalidPin(pin))
    }

    /// Assign a channel to a pin unless it already has one
    ///
    /// An existing assignment is never overwritten.
    pub fn assign(&mut self, pin: u8) -> Result<Assignment, PwmError> {
        let slot = self
            .slots
            .get_mut(pin as usize)
            .ok_or(PwmError::InvalidPin(pin))?;

        match *slot {
            Some(ch) => Ok(Assignment::Existing(ch)),
            None => {
                let ch = ChannelId::for_pin(pin);
                *slot = Some(ch);
                Ok(Assignment::New(ch))
            }
        }
    }

    /// Iterate over assigned pins in pin order
    pub fn iter(&self) -> impl Iterator<Item = (u8, ChannelId)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(pin, slot)| slot.map(|ch| (pin as u8, ch)))
    }

    /// Number of pins with a channel
    #[cfg(test)]
    pub(crate) fn assigned_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}

impl Default for ChannelTable {
    fn default() -> Self {
        Self::new()
    }
}
