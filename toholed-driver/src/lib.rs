//! SSD1306 panel driver for the Toholed OLED
//!
//! Ties the drawing engine in `toholed-display` to the transports in
//! `toholed-hal`:
//!
//! - [`Panel`] - session lifecycle, frame upload, brightness and inversion
//! - [`ContrastLevel`] - the three brightness presets
//! - [`PanelConfig`] - settings applied when a session starts
//!
//! # Example
//!
//! ```ignore
//! let bus = I2cPanelBus::with_default_address(EhI2c(i2c));
//! let mut panel = Panel::new(bus, EhOutputPin::new(vdd_enable));
//! panel.init(ContrastLevel::High)?;
//!
//! let mut fb = Framebuffer::new();
//! draw_analog_clock(&mut fb, 10, 42)?;
//! panel.update(&fb)?;
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod contrast;
pub mod error;
pub mod ssd1306;

pub use config::PanelConfig;
pub use contrast::{ContrastLevel, UnknownLevel};
pub use error::PanelError;
pub use ssd1306::{Panel, PanelState};
