//! Panel transport
//!
//! SSD1306-class controllers take two kinds of traffic over the same wires:
//! command bytes (setup, contrast, addressing) and display data bytes. How
//! the two are told apart depends on the wiring:
//!
//! - **I2C**: every transaction starts with a control byte, `0x00` for
//!   commands and `0x40` for data.
//! - **4-wire SPI**: a D/C GPIO is driven low for commands, high for data.

use crate::gpio::OutputPin;
use crate::i2c::I2cBus;
use crate::spi::SpiBus;

/// Default 7-bit I2C address of the panel (SA0 tied low)
pub const DEFAULT_I2C_ADDRESS: u8 = 0x3C;

/// Largest payload sent in a single I2C transaction
pub const MAX_I2C_CHUNK: usize = 128;

/// I2C control byte: following bytes are commands
const CONTROL_COMMAND: u8 = 0x00;

/// I2C control byte: following bytes are display RAM data
const CONTROL_DATA: u8 = 0x40;

/// Two-channel transport to a display controller
///
/// A bus is opened once per panel session and closed on teardown.
/// Implementations must not retry failed writes; the caller decides
/// whether to resend a frame.
pub trait PanelBus {
    /// Error type for transport operations
    type Error;

    /// Acquire the transport and check the device answers
    fn open(&mut self) -> Result<(), Self::Error>;

    /// Release the transport. Must be safe to call on a closed bus.
    fn close(&mut self);

    /// Send bytes on the command channel
    fn send_commands(&mut self, commands: &[u8]) -> Result<(), Self::Error>;

    /// Send bytes on the data channel
    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error>;
}

/// Panel transport over I2C
pub struct I2cPanelBus<I> {
    i2c: I,
    address: u8,
}

impl<I: I2cBus> I2cPanelBus<I> {
    /// Create a transport for the panel at `address`
    pub fn new(i2c: I, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Create a transport for the panel at [`DEFAULT_I2C_ADDRESS`]
    pub fn with_default_address(i2c: I) -> Self {
        Self::new(i2c, DEFAULT_I2C_ADDRESS)
    }

    /// Device address in use
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Give back the I2C bus
    pub fn release(self) -> I {
        self.i2c
    }

    fn send(&mut self, control: u8, bytes: &[u8]) -> Result<(), I::Error> {
        let mut frame = [0u8; MAX_I2C_CHUNK + 1];
        frame[0] = control;

        for chunk in bytes.chunks(MAX_I2C_CHUNK) {
            frame[1..=chunk.len()].copy_from_slice(chunk);
            self.i2c.write(self.address, &frame[..=chunk.len()])?;
        }

        Ok(())
    }
}

impl<I: I2cBus> PanelBus for I2cPanelBus<I> {
    type Error = I::Error;

    fn open(&mut self) -> Result<(), Self::Error> {
        // Zero-length write: fails with a NACK when nothing sits at the address
        self.i2c.write(self.address, &[])
    }

    fn close(&mut self) {}

    fn send_commands(&mut self, commands: &[u8]) -> Result<(), Self::Error> {
        self.send(CONTROL_COMMAND, commands)
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.send(CONTROL_DATA, data)
    }
}

/// Panel transport over 4-wire SPI
pub struct SpiPanelBus<S, DC> {
    spi: S,
    dc: DC,
}

impl<S: SpiBus, DC: OutputPin> SpiPanelBus<S, DC> {
    /// Create a transport from an SPI bus and the D/C select pin
    pub fn new(spi: S, dc: DC) -> Self {
        Self { spi, dc }
    }

    /// Give back the SPI bus and D/C pin
    pub fn release(self) -> (S, DC) {
        (self.spi, self.dc)
    }

    fn send(&mut self, data_mode: bool, bytes: &[u8]) -> Result<(), S::Error> {
        self.dc.set_state(data_mode);
        self.spi.write(bytes)?;
        // D/C must not change while bytes are still shifting out
        self.spi.flush()
    }
}

impl<S: SpiBus, DC: OutputPin> PanelBus for SpiPanelBus<S, DC> {
    type Error = S::Error;

    fn open(&mut self) -> Result<(), Self::Error> {
        self.dc.set_low();
        Ok(())
    }

    fn close(&mut self) {
        self.dc.set_low();
    }

    fn send_commands(&mut self, commands: &[u8]) -> Result<(), Self::Error> {
        self.send(false, commands)
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.send(true, data)
    }
}
