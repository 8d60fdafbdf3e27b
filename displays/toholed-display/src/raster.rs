//! Rasterization primitives
//!
//! Stateless functions over a caller-owned [`Framebuffer`]. Every pixel
//! goes through [`set_pixel`], so shapes running off the panel are clipped
//! pixel by pixel and never wrap into neighbouring rows.

use core::ops::RangeInclusive;

use crate::framebuffer::{Color, Framebuffer, HEIGHT, WIDTH};

/// Set or clear a single pixel
///
/// Coordinates outside the panel are silently ignored.
#[inline]
pub fn set_pixel(fb: &mut Framebuffer, x: i32, y: i32, color: Color) {
    fb.set(x, y, color);
}

/// `set_pixel` for widened coordinates
#[inline]
fn plot(fb: &mut Framebuffer, x: i64, y: i64, color: Color) {
    if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
        set_pixel(fb, x, y, color);
    }
}

/// Steps `i` in `0..=len` for which `start + step * i` lands in `0..limit`
fn visible_steps(start: i64, step: i64, len: i64, limit: i64) -> Option<RangeInclusive<i64>> {
    let (lo, hi) = match step {
        1 => (-start, limit - 1 - start),
        -1 => (start - (limit - 1), start),
        _ if (0..limit).contains(&start) => (0, len),
        _ => return None,
    };
    let (lo, hi) = (lo.max(0), hi.min(len));
    (lo <= hi).then_some(lo..=hi)
}

/// Minor-axis offset after `i` major steps, rounded half up
fn minor_offset(i: i64, minor: i64, major: i64) -> i64 {
    if major == 0 {
        return 0;
    }
    let (i, minor, major) = (i128::from(i), i128::from(minor), i128::from(major));
    ((2 * i * minor + major) / (2 * major)) as i64
}

/// Draw a line between two points (inclusive) using Bresenham's algorithm
///
/// Endpoints are put in a canonical order first, so `(a, b)` and `(b, a)`
/// light exactly the same pixels. The error term is evaluated per step, so
/// the walk starts at the first major-axis step that lands on the panel
/// and stops at the last one.
pub fn draw_line(fb: &mut Framebuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
    let ((x0, y0), (x1, y1)) = if (x0, y0) <= (x1, y1) {
        ((x0, y0), (x1, y1))
    } else {
        ((x1, y1), (x0, y0))
    };
    let (x0, y0, x1, y1) = (i64::from(x0), i64::from(y0), i64::from(x1), i64::from(y1));
    let (width, height) = (WIDTH as i64, HEIGHT as i64);

    if x0.max(x1) < 0 || x0.min(x1) >= width || y0.max(y1) < 0 || y0.min(y1) >= height {
        return;
    }

    let (dx, dy) = (x1 - x0, y1 - y0);
    let (sx, sy) = (dx.signum(), dy.signum());
    let (adx, ady) = (dx.abs(), dy.abs());

    if adx >= ady {
        let Some(steps) = visible_steps(x0, sx, adx, width) else {
            return;
        };
        for i in steps {
            plot(fb, x0 + sx * i, y0 + sy * minor_offset(i, ady, adx), color);
        }
    } else {
        let Some(steps) = visible_steps(y0, sy, ady, height) else {
            return;
        };
        for i in steps {
            plot(fb, x0 + sx * minor_offset(i, adx, ady), y0 + sy * i, color);
        }
    }
}

/// Draw a horizontal run of `len` pixels starting at `(x, y)`
pub fn draw_hline(fb: &mut Framebuffer, x: i32, y: i32, len: i32, color: Color) {
    let start = i64::from(x).max(0);
    let end = (i64::from(x) + i64::from(len)).min(WIDTH as i64);
    for px in start..end {
        plot(fb, px, i64::from(y), color);
    }
}

/// Fill a `w` x `h` rectangle with its top-left corner at `(x, y)`
pub fn fill_rect(fb: &mut Framebuffer, x: i32, y: i32, w: i32, h: i32, color: Color) {
    let start = i64::from(y).max(0);
    let end = (i64::from(y) + i64::from(h)).min(HEIGHT as i64);
    for py in start..end {
        draw_hline(fb, x, py as i32, w, color);
    }
}

/// Outline height in the first octant at column offset `x`
///
/// Largest `y` whose midpoint `(x, y - 1/2)` lies inside the circle, i.e.
/// `x^2 + y^2 - y < r^2`. `None` once the column is past the radius.
fn octant_y(x: i64, r: i64) -> Option<i64> {
    let room = i128::from(r) * i128::from(r) - i128::from(x) * i128::from(x);
    if room <= 0 {
        return None;
    }

    let fits = |y: i128| y * (y - 1) < room;
    let mut y = libm::sqrt(room as f64) as i128 + 1;
    while !fits(y) {
        y -= 1;
    }
    while fits(y + 1) {
        y += 1;
    }
    Some(y as i64)
}

/// Draw a circle outline with the midpoint algorithm
///
/// A radius of zero lights only the centre pixel; a negative radius draws
/// nothing. Each of the eight mirrored points has one coordinate offset by
/// the octant column `x` from the centre, so only columns that put that
/// coordinate on the panel are evaluated.
pub fn draw_circle(fb: &mut Framebuffer, x0: i32, y0: i32, r: i32, color: Color) {
    if r < 0 {
        return;
    }
    let (cx, cy, r) = (i64::from(x0), i64::from(y0), i64::from(r));
    let (width, height) = (WIDTH as i64, HEIGHT as i64);

    if cx + r < 0 || cx - r >= width || cy + r < 0 || cy - r >= height {
        return;
    }
    if r == 0 {
        plot(fb, cx, cy, color);
        return;
    }

    let columns = [
        visible_steps(cx, 1, r, width),
        visible_steps(cx, -1, r, width),
        visible_steps(cy, 1, r, height),
        visible_steps(cy, -1, r, height),
    ];

    for x in columns.into_iter().flatten().flatten() {
        let Some(y) = octant_y(x, r) else {
            continue;
        };
        if x > y {
            continue;
        }

        for (px, py) in [
            (cx + x, cy + y),
            (cx - x, cy + y),
            (cx + x, cy - y),
            (cx - x, cy - y),
            (cx + y, cy + x),
            (cx - y, cy + x),
            (cx + y, cy - x),
            (cx - y, cy - x),
        ] {
            plot(fb, px, py, color);
        }
    }
}

/// One hand of an analog clock
///
/// The hand is a segment on the ray from `center` at `angle` radians,
/// measured clockwise from 12 o'clock, spanning `base_radius..=hand_radius`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnalogHand {
    /// Rotation centre (the clock face centre)
    pub center: (i32, i32),
    /// Angle in radians, 0 at 12 o'clock, increasing clockwise
    pub angle: f32,
    /// Distance from the centre where the hand starts
    pub base_radius: i32,
    /// Distance from the centre to the hand tip
    pub hand_radius: i32,
}

impl AnalogHand {
    /// Create a hand, rejecting `base_radius > hand_radius` or negative radii
    pub fn new(center: (i32, i32), angle: f32, base_radius: i32, hand_radius: i32) -> Option<Self> {
        if base_radius < 0 || base_radius > hand_radius {
            return None;
        }
        Some(Self {
            center,
            angle,
            base_radius,
            hand_radius,
        })
    }

    /// Point at `radius` along the hand, rounded to the nearest pixel
    pub fn point_at(&self, radius: i32) -> (i32, i32) {
        let (sin, cos) = (libm::sinf(self.angle), libm::cosf(self.angle));
        let r = radius as f32;
        (
            self.center.0.saturating_add(libm::roundf(r * sin) as i32),
            self.center.1.saturating_sub(libm::roundf(r * cos) as i32),
        )
    }

    /// Inner and outer endpoints of the hand
    pub fn endpoints(&self) -> ((i32, i32), (i32, i32)) {
        (self.point_at(self.base_radius), self.point_at(self.hand_radius))
    }
}

/// Draw a clock hand as a line from its base to its tip
pub fn draw_hand(fb: &mut Framebuffer, hand: &AnalogHand, color: Color) {
    let ((x0, y0), (x1, y1)) = hand.endpoints();
    draw_line(fb, x0, y0, x1, y1, color);
}
