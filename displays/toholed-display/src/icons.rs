//! Icon sprites
//!
//! Status icons are 16x16 row-major bitmaps, the leftmost pixel in bit 15
//! of each row word. Ids are stable: the notification layer stores and
//! sends them as plain numbers.

/// Icon edge length in pixels
pub const ICON_SIZE: usize = 16;

/// Derp face edge length in pixels
pub const DERP_SIZE: usize = 32;

/// Refresh indicator edge length in pixels
pub const UPDATE_MARK_SIZE: usize = 5;

/// Status icon identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Icon {
    /// Unread text message
    Sms = 0,
    /// Missed or active call
    Call = 1,
    /// New email
    Email = 2,
    /// Twitter mention
    Twitter = 3,
    /// Facebook notification
    Facebook = 4,
    /// IRC highlight
    Irc = 5,
    /// Instant message
    Im = 6,
    /// Any other notification
    Other = 7,
    /// Charger connected
    Charger = 8,
    /// Silent profile active
    Silent = 9,
    /// Alarm pending
    Alarm = 10,
    /// Bluetooth enabled
    Bluetooth = 11,
    /// Wifi connected
    Wifi = 12,
    /// Cellular data, GSM
    Cellular2G = 13,
    /// Cellular data, UMTS
    Cellular3G = 14,
    /// Cellular data, LTE
    Cellular4G = 15,
}

/// Raised when an icon id does not name a known icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UnknownIcon(pub u8);

impl Icon {
    /// Number of icons
    pub const COUNT: usize = 16;

    /// All icons in id order
    pub const ALL: [Icon; Icon::COUNT] = [
        Icon::Sms,
        Icon::Call,
        Icon::Email,
        Icon::Twitter,
        Icon::Facebook,
        Icon::Irc,
        Icon::Im,
        Icon::Other,
        Icon::Charger,
        Icon::Silent,
        Icon::Alarm,
        Icon::Bluetooth,
        Icon::Wifi,
        Icon::Cellular2G,
        Icon::Cellular3G,
        Icon::Cellular4G,
    ];

    /// Numeric id
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Sprite rows, top to bottom
    pub fn sprite(self) -> &'static [u16; ICON_SIZE] {
        &ICON_SPRITES[self as usize]
    }
}

impl TryFrom<u8> for Icon {
    type Error = UnknownIcon;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Icon::ALL.get(id as usize).copied().ok_or(UnknownIcon(id))
    }
}

/// Derp face rows, leftmost pixel in bit 31
pub fn derp_sprite() -> &'static [u32; DERP_SIZE] {
    &DERP_SPRITE
}

/// Refresh indicator rows, leftmost pixel in bit 4
pub fn update_mark() -> &'static [u8; UPDATE_MARK_SIZE] {
    &UPDATE_MARK
}

#[rustfmt::skip]
const ICON_SPRITES: [[u16; ICON_SIZE]; Icon::COUNT] = [
    // Sms
    [
        0x0000, 0x0000, 0x7FFE, 0x4002,
        0x5FFA, 0x4002, 0x5FE2, 0x4002,
        0x5F02, 0x4002, 0x7FFE, 0x0600,
        0x0400, 0x0000, 0x0000, 0x0000,
    ],
    // Call
    [
        0x0000, 0x3800, 0x7800, 0x7800,
        0x7000, 0x3000, 0x3000, 0x3800,
        0x1800, 0x1C00, 0x0E38, 0x07F0,
        0x03F0, 0x00E0, 0x0000, 0x0000,
    ],
    // Email
    [
        0x0000, 0x0000, 0x0000, 0x7FFE,
        0x6002, 0x500A, 0x4812, 0x4422,
        0x4242, 0x4182, 0x4002, 0x4002,
        0x7FFE, 0x0000, 0x0000, 0x0000,
    ],
    // Twitter
    [
        0x0000, 0x0002, 0x407A, 0x60FC,
        0x70FE, 0x3CFC, 0x3FFC, 0x1FFC,
        0x0FF8, 0x07F8, 0x03F0, 0x1FF0,
        0x07C0, 0x0000, 0x0000, 0x0000,
    ],
    // Facebook
    [
        0x7FFE, 0x8001, 0x803D, 0x8061,
        0x8061, 0x81F9, 0x8061, 0x8061,
        0x8061, 0x8061, 0x8061, 0x8061,
        0x8061, 0x8061, 0x8061, 0x7F9E,
    ],
    // Irc
    [
        0x0000, 0x0000, 0x0840, 0x0840,
        0x3FF0, 0x0840, 0x0840, 0x1080,
        0x1080, 0x7FE0, 0x1080, 0x1080,
        0x2100, 0x0000, 0x0000, 0x0000,
    ],
    // Im
    [
        0x0000, 0x07E0, 0x1818, 0x2004,
        0x4002, 0x4C32, 0x4C32, 0x4002,
        0x4812, 0x27E4, 0x1818, 0x17E0,
        0x2000, 0x4000, 0x0000, 0x0000,
    ],
    // Other
    [
        0x0000, 0x0180, 0x03C0, 0x03C0,
        0x03C0, 0x03C0, 0x03C0, 0x0180,
        0x0180, 0x0000, 0x0180, 0x03C0,
        0x0180, 0x0000, 0x0000, 0x0000,
    ],
    // Charger
    [
        0x0000, 0x0060, 0x00C0, 0x01C0,
        0x0380, 0x0700, 0x0FF8, 0x1FF0,
        0x01C0, 0x0380, 0x0700, 0x0600,
        0x0C00, 0x0800, 0x0000, 0x0000,
    ],
    // Silent
    [
        0x0000, 0x8080, 0x4180, 0x2380,
        0x3780, 0x6F80, 0x7B80, 0x7D80,
        0x7E80, 0x7F00, 0x0740, 0x0320,
        0x0110, 0x0008, 0x0004, 0x0000,
    ],
    // Alarm
    [
        0x0000, 0x300C, 0x63C6, 0x4C32,
        0x1008, 0x2104, 0x2104, 0x4102,
        0x41E2, 0x4002, 0x2004, 0x2004,
        0x1008, 0x0C30, 0x13C8, 0x2004,
    ],
    // Bluetooth
    [
        0x0100, 0x0180, 0x0140, 0x1120,
        0x0910, 0x0520, 0x0380, 0x0100,
        0x0380, 0x0520, 0x0910, 0x1120,
        0x0140, 0x0180, 0x0100, 0x0000,
    ],
    // Wifi
    [
        0x0000, 0x0000, 0x0FF0, 0x300C,
        0x4002, 0x87E1, 0x1818, 0x2004,
        0x07E0, 0x0810, 0x0000, 0x0180,
        0x03C0, 0x0180, 0x0000, 0x0000,
    ],
    // Cellular2G
    [
        0x0000, 0x0000, 0x3C78, 0x4284,
        0x0280, 0x0280, 0x0480, 0x089C,
        0x1084, 0x2084, 0x4084, 0x7E78,
        0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // Cellular3G
    [
        0x0000, 0x0000, 0x7C78, 0x0284,
        0x0280, 0x0280, 0x3C80, 0x029C,
        0x0284, 0x0284, 0x0284, 0x7C78,
        0x0000, 0x0000, 0x0000, 0x0000,
    ],
    // Cellular4G
    [
        0x0000, 0x0000, 0x4478, 0x4484,
        0x4480, 0x4480, 0x4480, 0x7E9C,
        0x0484, 0x0484, 0x0484, 0x0478,
        0x0000, 0x0000, 0x0000, 0x0000,
    ],
];

#[rustfmt::skip]
const DERP_SPRITE: [u32; DERP_SIZE] = [
    0x00000000, 0x003FFC00, 0x01C00380, 0x06000060,
    0x08000010, 0x10000008, 0x20000004, 0x23F00FC4,
    0x44081022, 0x44C81022, 0x44C811A2, 0x840811A1,
    0x83F00FC1, 0x80000001, 0x80000001, 0x80000001,
    0x80000001, 0x80000001, 0x80800101, 0x80400201,
    0x40300C02, 0x400FF002, 0x40154002, 0x200A8004,
    0x20000004, 0x10000008, 0x08000010, 0x06000060,
    0x01C00380, 0x003FFC00, 0x00000000, 0x00000000,
];

const UPDATE_MARK: [u8; UPDATE_MARK_SIZE] = [0b00100, 0b01110, 0b11111, 0b01110, 0b00100];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for icon in Icon::ALL {
            assert_eq!(Icon::try_from(icon.id()), Ok(icon));
        }
    }

    #[test]
    fn test_unknown_id() {
        assert_eq!(Icon::try_from(16), Err(UnknownIcon(16)));
        assert_eq!(Icon::try_from(255), Err(UnknownIcon(255)));
    }

    #[test]
    fn test_sprites_not_blank() {
        for icon in Icon::ALL {
            assert!(icon.sprite().iter().any(|&row| row != 0), "{icon:?} is blank");
        }
        assert!(derp_sprite().iter().any(|&row| row != 0));
        assert!(update_mark().iter().all(|&row| row < 1 << UPDATE_MARK_SIZE));
    }
}
