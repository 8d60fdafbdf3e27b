//! Display engine for the Toholed OLED
//!
//! This crate provides everything that decides *how* pixels get set on the
//! 128x64 monochrome panel, with no hardware dependency:
//!
//! - [`Framebuffer`] - bit-packed canvas, one bit per pixel
//! - [`raster`] - pixels, Bresenham lines, midpoint circles, clock hands
//! - [`compose`] - small text, large time digits, status icons, fixed sprites
//! - [`clock`] - analog clock face from hours and minutes
//!
//! # Architecture
//!
//! All drawing functions are stateless and take the caller's framebuffer
//! as an explicit argument. A typical frame is composed by the
//! notification layer and then handed to the panel driver:
//!
//! ```text
//! clear → draw_analog_clock → draw_icon ... → draw_update_time → Panel::update
//! ```
//!
//! Drawing off the panel is never an error; shapes are clipped pixel by
//! pixel. Only caller mistakes (unknown icon, impossible time) fail.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod clock;
pub mod compose;
pub mod error;
pub mod font;
pub mod framebuffer;
pub mod icons;
pub mod raster;

// Re-export key types
pub use clock::{draw_analog_clock, draw_analog_clock_at, hand_angles};
pub use compose::{
    draw_clock_time, draw_derp, draw_icon, draw_small_text, draw_time, draw_update_time,
    format_time,
};
pub use error::DrawError;
pub use framebuffer::{Color, Framebuffer, BUFFER_SIZE, HEIGHT, PAGES, WIDTH};
pub use icons::Icon;
pub use raster::{draw_circle, draw_hand, draw_line, set_pixel, AnalogHand};

/// Turn every pixel in the buffer off
pub fn clear(fb: &mut Framebuffer) {
    fb.clear();
}
