//! Glyph and icon compositor
//!
//! Blits fixed-size bitmaps into the framebuffer. Blits are opaque: pixels
//! that are dark in the bitmap are cleared, so text and icons overwrite
//! whatever was underneath their cell. Every pixel goes through
//! [`set_pixel`], so sprites hanging off the panel edge are clipped rather
//! than dropped.

use core::fmt::Write;

use heapless::String;

use crate::clock::validate_time;
use crate::error::DrawError;
use crate::font::{
    small_glyph, time_glyph, SMALL_ADVANCE, SMALL_GLYPH_WIDTH, SMALL_LINE_HEIGHT, TIME_ADVANCE,
    TIME_GLYPH_HEIGHT,
};
use crate::framebuffer::{Color, Framebuffer, WIDTH};
use crate::icons::{derp_sprite, update_mark, Icon, DERP_SIZE, ICON_SIZE, UPDATE_MARK_SIZE};
use crate::raster::set_pixel;

/// Top-left corner of the derp face
pub const DERP_POSITION: (i32, i32) = (48, 16);

/// Top-left corner of the refresh indicator
pub const UPDATE_MARK_POSITION: (i32, i32) = ((WIDTH - UPDATE_MARK_SIZE) as i32, 0);

/// Blit row-major bitmap rows whose art is `bits` wide, MSB-aligned
///
/// Only the leftmost `width` pixels of each row are drawn.
fn blit_rows<I>(fb: &mut Framebuffer, x0: i32, y0: i32, rows: I, bits: u32, width: u32)
where
    I: IntoIterator<Item = u32>,
{
    for (dy, row) in rows.into_iter().enumerate() {
        for dx in 0..width {
            let lit = (row >> (bits - 1 - dx)) & 1 != 0;
            set_pixel(
                fb,
                x0.saturating_add(dx as i32),
                y0.saturating_add(dy as i32),
                Color::from(lit),
            );
        }
    }
}

/// Blit one small-font cell: the 5 glyph columns plus a blank spacing column
fn blit_small_glyph(fb: &mut Framebuffer, x0: i32, y0: i32, glyph: &[u8; SMALL_GLYPH_WIDTH]) {
    for dx in 0..SMALL_ADVANCE {
        let column = glyph.get(dx as usize).copied().unwrap_or(0);
        for dy in 0..SMALL_LINE_HEIGHT {
            let lit = column & (1 << dy) != 0;
            set_pixel(fb, x0.saturating_add(dx), y0.saturating_add(dy), Color::from(lit));
        }
    }
}

/// Draw text in the small 6x8 font
///
/// `(x0, y0)` is the top-left corner of the first cell. Characters outside
/// printable ASCII render as a placeholder box; `'\n'` starts a new line
/// at `x0`.
pub fn draw_small_text(fb: &mut Framebuffer, x0: i32, y0: i32, text: &str) {
    let (mut x, mut y) = (x0, y0);

    for ch in text.chars() {
        if ch == '\n' {
            x = x0;
            y = y.saturating_add(SMALL_LINE_HEIGHT);
            continue;
        }
        blit_small_glyph(fb, x, y, small_glyph(ch));
        x = x.saturating_add(SMALL_ADVANCE);
    }
}

/// Draw a preformatted time string (e.g. `"12:34"`) in the large digit font
///
/// Characters other than digits and `':'` render as blank cells.
pub fn draw_time(fb: &mut Framebuffer, x0: i32, y0: i32, t_now: &str) {
    const BLANK: [u16; TIME_GLYPH_HEIGHT] = [0; TIME_GLYPH_HEIGHT];

    let mut x = x0;
    for ch in t_now.chars() {
        let glyph = time_glyph(ch).unwrap_or(&BLANK);
        blit_rows(fb, x, y0, glyph.iter().map(|&r| u32::from(r)), 16, TIME_ADVANCE as u32);
        x = x.saturating_add(TIME_ADVANCE);
    }
}

/// Format a time of day as `"HH:MM"`
pub fn format_time(hours: u8, minutes: u8) -> Result<String<5>, DrawError> {
    validate_time(hours, minutes)?;

    let mut text = String::new();
    write!(text, "{hours:02}:{minutes:02}").map_err(|_| DrawError::InvalidTime)?;
    Ok(text)
}

/// Format and draw a time of day in the large digit font
pub fn draw_clock_time(
    fb: &mut Framebuffer,
    x0: i32,
    y0: i32,
    hours: u8,
    minutes: u8,
) -> Result<(), DrawError> {
    let text = format_time(hours, minutes)?;
    draw_time(fb, x0, y0, &text);
    Ok(())
}

/// Draw a 16x16 status icon with its top-left corner at `(x0, y0)`
///
/// Accepts an [`Icon`] or a raw icon id. An unknown id fails with
/// [`DrawError::InvalidIcon`] before anything is drawn.
pub fn draw_icon<I>(fb: &mut Framebuffer, x0: i32, y0: i32, icon: I) -> Result<(), DrawError>
where
    I: TryInto<Icon>,
{
    let icon = icon.try_into().map_err(|_| DrawError::InvalidIcon)?;
    let sprite = icon.sprite();
    blit_rows(fb, x0, y0, sprite.iter().map(|&r| u32::from(r)), 16, ICON_SIZE as u32);
    Ok(())
}

/// Draw the derp face at its fixed position
pub fn draw_derp(fb: &mut Framebuffer) {
    let (x0, y0) = DERP_POSITION;
    blit_rows(fb, x0, y0, derp_sprite().iter().copied(), 32, DERP_SIZE as u32);
}

/// Draw the refresh indicator in the top-right corner
pub fn draw_update_time(fb: &mut Framebuffer) {
    let (x0, y0) = UPDATE_MARK_POSITION;
    let size = UPDATE_MARK_SIZE as u32;
    blit_rows(fb, x0, y0, update_mark().iter().map(|&r| u32::from(r)), size, size);
}
