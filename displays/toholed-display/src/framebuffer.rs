//! Packed monochrome framebuffer
//!
//! One bit per pixel, row-major: eight horizontally adjacent pixels share a
//! byte, bit 0 holding the leftmost of them.
//!
//! ```text
//! byte_index = x / 8 + y * BYTES_PER_ROW
//! bit_mask   = 1 << (x % 8)
//! ```

/// Panel width in pixels
pub const WIDTH: usize = 128;

/// Panel height in pixels
pub const HEIGHT: usize = 64;

/// Bytes per pixel row
pub const BYTES_PER_ROW: usize = WIDTH / 8;

/// Total framebuffer size in bytes
pub const BUFFER_SIZE: usize = BYTES_PER_ROW * HEIGHT;

/// Number of 8-row pages in the controller's display RAM
pub const PAGES: usize = HEIGHT / 8;

/// Pixel state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    /// Pixel dark
    Off,
    /// Pixel lit
    On,
}

impl From<bool> for Color {
    fn from(on: bool) -> Self {
        if on {
            Color::On
        } else {
            Color::Off
        }
    }
}

impl From<u8> for Color {
    /// Any nonzero value lights the pixel
    fn from(value: u8) -> Self {
        Color::from(value != 0)
    }
}

/// In-memory canvas for the 128x64 panel
///
/// The buffer never changes size. Drawing functions take it by mutable
/// reference and hold no reference across calls.
#[derive(Clone, PartialEq, Eq)]
pub struct Framebuffer {
    bits: [u8; BUFFER_SIZE],
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Framebuffer {
    /// Create a framebuffer with every pixel off
    pub const fn new() -> Self {
        Self {
            bits: [0; BUFFER_SIZE],
        }
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        self.bits.fill(0);
    }

    /// Byte index and bit mask for an in-range pixel
    fn locate(x: i32, y: i32) -> Option<(usize, u8)> {
        if x < 0 || y < 0 || x >= WIDTH as i32 || y >= HEIGHT as i32 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        Some((x / 8 + y * BYTES_PER_ROW, 1 << (x % 8)))
    }

    /// Set or clear one pixel; coordinates off the panel are ignored
    pub fn set(&mut self, x: i32, y: i32, color: Color) {
        if let Some((index, mask)) = Self::locate(x, y) {
            match color {
                Color::On => self.bits[index] |= mask,
                Color::Off => self.bits[index] &= !mask,
            }
        }
    }

    /// Read one pixel; coordinates off the panel read as off
    pub fn get(&self, x: i32, y: i32) -> bool {
        Self::locate(x, y).is_some_and(|(index, mask)| self.bits[index] & mask != 0)
    }

    /// Raw packed contents
    pub fn as_bytes(&self) -> &[u8; BUFFER_SIZE] {
        &self.bits
    }

    /// Check whether every pixel is off
    pub fn is_blank(&self) -> bool {
        self.bits.iter().all(|&b| b == 0)
    }

    /// Transpose one 8-row band into the controller's page layout
    ///
    /// The SSD1306 stores display RAM as pages: one byte per column, bit
    /// `k` of column `x` in page `p` is pixel `(x, p * 8 + k)`. Pages past
    /// the bottom of the panel leave `out` zeroed.
    pub fn render_page(&self, page: usize, out: &mut [u8; WIDTH]) {
        out.fill(0);
        if page >= PAGES {
            return;
        }

        for bit in 0..8 {
            let row = &self.bits[(page * 8 + bit) * BYTES_PER_ROW..][..BYTES_PER_ROW];
            for (column, byte) in out.iter_mut().enumerate() {
                if row[column / 8] & (1 << (column % 8)) != 0 {
                    *byte |= 1 << bit;
                }
            }
        }
    }
}

impl core::fmt::Debug for Framebuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let lit = self.bits.iter().map(|b| b.count_ones()).sum::<u32>();
        f.debug_struct("Framebuffer").field("lit", &lit).finish()
    }
}
