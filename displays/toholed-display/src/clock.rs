//! Analog clock face
//!
//! The hour hand sweeps a full turn every 12 hours and creeps forward with
//! the minutes; the minute hand sweeps a full turn every hour.

use core::f32::consts::PI;

use crate::error::DrawError;
use crate::framebuffer::{Color, Framebuffer};
use crate::raster::{draw_circle, draw_hand, AnalogHand};

/// Centre of the default clock face (left half of the panel)
pub const FACE_CENTER: (i32, i32) = (32, 32);

/// Radius of the default clock face
pub const FACE_RADIUS: i32 = 30;

/// Hour hand (base, tip) radii on the default face
pub const HOUR_HAND: (i32, i32) = (2, 16);

/// Minute hand (base, tip) radii on the default face
pub const MINUTE_HAND: (i32, i32) = (2, 26);

const DEG_TO_RAD: f32 = PI / 180.0;

/// Reject hours outside 0-23 and minutes outside 0-59
pub fn validate_time(hours: u8, minutes: u8) -> Result<(), DrawError> {
    if hours > 23 || minutes > 59 {
        return Err(DrawError::InvalidTime);
    }
    Ok(())
}

/// Hour and minute hand angles in radians, clockwise from 12 o'clock
pub fn hand_angles(hours: u8, minutes: u8) -> Result<(f32, f32), DrawError> {
    validate_time(hours, minutes)?;

    let hour_deg = f32::from(hours % 12) * 30.0 + f32::from(minutes) * 0.5;
    let minute_deg = f32::from(minutes) * 6.0;
    Ok((hour_deg * DEG_TO_RAD, minute_deg * DEG_TO_RAD))
}

/// Draw the default clock face on the left half of the panel
pub fn draw_analog_clock(fb: &mut Framebuffer, hours: u8, minutes: u8) -> Result<(), DrawError> {
    draw_analog_clock_at(fb, FACE_CENTER, FACE_RADIUS, hours, minutes)
}

/// Draw a clock face of `radius` around `center`
///
/// Hand lengths scale with the radius, keeping the default face's
/// proportions. Invalid times fail before anything is drawn.
pub fn draw_analog_clock_at(
    fb: &mut Framebuffer,
    center: (i32, i32),
    radius: i32,
    hours: u8,
    minutes: u8,
) -> Result<(), DrawError> {
    let (hour_angle, minute_angle) = hand_angles(hours, minutes)?;
    // |len| < FACE_RADIUS, so the scaled length fits back into i32
    let scale = |len: i32| (i64::from(len) * i64::from(radius) / i64::from(FACE_RADIUS)) as i32;

    draw_circle(fb, center.0, center.1, radius, Color::On);

    for (angle, (base, tip)) in [(hour_angle, HOUR_HAND), (minute_angle, MINUTE_HAND)] {
        if let Some(hand) = AnalogHand::new(center, angle, scale(base), scale(tip)) {
            draw_hand(fb, &hand, Color::On);
        }
    }

    Ok(())
}
