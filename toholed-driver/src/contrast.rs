//! Contrast presets
//!
//! The notification daemon stores brightness as one of three 16-bit preset
//! codes. The high byte is the panel contrast value, the low byte the
//! pre-charge period: dimmer presets also shorten pre-charge so dark
//! surroundings are not lit by a bright, long-charged panel.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Brightness preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ContrastLevel {
    /// Night-time brightness
    Low,
    /// Indoor brightness
    Medium,
    /// Full brightness
    #[default]
    High,
}

/// Raised when a raw code does not match any preset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UnknownLevel(pub u16);

impl ContrastLevel {
    /// Raw code of the high preset
    pub const HIGH: u16 = 0xFFF1;

    /// Raw code of the medium preset
    pub const MEDIUM: u16 = 0x4071;

    /// Raw code of the low preset
    pub const LOW: u16 = 0x1011;

    /// Raw 16-bit preset code
    pub const fn raw(self) -> u16 {
        match self {
            ContrastLevel::Low => Self::LOW,
            ContrastLevel::Medium => Self::MEDIUM,
            ContrastLevel::High => Self::HIGH,
        }
    }

    /// Value for the set-contrast command
    pub const fn contrast(self) -> u8 {
        (self.raw() >> 8) as u8
    }

    /// Value for the set-pre-charge-period command
    pub const fn precharge(self) -> u8 {
        (self.raw() & 0xFF) as u8
    }
}

impl TryFrom<u16> for ContrastLevel {
    type Error = UnknownLevel;

    fn try_from(raw: u16) -> Result<Self, Self::Error> {
        match raw {
            Self::LOW => Ok(ContrastLevel::Low),
            Self::MEDIUM => Ok(ContrastLevel::Medium),
            Self::HIGH => Ok(ContrastLevel::High),
            other => Err(UnknownLevel(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_bytes() {
        assert_eq!(ContrastLevel::High.contrast(), 0xFF);
        assert_eq!(ContrastLevel::High.precharge(), 0xF1);
        assert_eq!(ContrastLevel::Medium.contrast(), 0x40);
        assert_eq!(ContrastLevel::Medium.precharge(), 0x71);
        assert_eq!(ContrastLevel::Low.contrast(), 0x10);
        assert_eq!(ContrastLevel::Low.precharge(), 0x11);
    }

    #[test]
    fn test_raw_codes() {
        for level in [ContrastLevel::Low, ContrastLevel::Medium, ContrastLevel::High] {
            assert_eq!(ContrastLevel::try_from(level.raw()), Ok(level));
        }
        assert_eq!(ContrastLevel::try_from(0xFF00), Err(UnknownLevel(0xFF00)));
        assert_eq!(ContrastLevel::try_from(0), Err(UnknownLevel(0)));
    }
}
