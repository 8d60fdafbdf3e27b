//! Toholed Hardware Abstraction Layer
//!
//! This crate defines the hardware seams the panel driver is written
//! against, so the same driver runs on the phone's I2C bus, on an SPI
//! breakout, or against a recording fake in tests.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  toholed-driver (SSD1306 panel session) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  PanelBus (command + data channels)     │
//! └─────────────────────────────────────────┘
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  I2cPanelBus  │       │  SpiPanelBus  │
//! │   (I2cBus)    │       │ (SpiBus + DC) │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital output (power-enable, D/C lines)
//! - [`i2c::I2cBus`] - I2C bus operations
//! - [`spi::SpiBus`] - SPI bus operations
//! - [`bus::PanelBus`] - Two-channel transport to the display controller
//!
//! Blocking `embedded-hal` 1.0 peripherals plug in through the adapters
//! [`gpio::EhOutputPin`], [`i2c::EhI2c`] and [`spi::EhSpi`].

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod bus;
pub mod gpio;
pub mod i2c;
pub mod spi;

// Re-export key traits at crate root for convenience
pub use bus::{I2cPanelBus, PanelBus, SpiPanelBus};
pub use gpio::OutputPin;
pub use i2c::I2cBus;
pub use spi::SpiBus;
