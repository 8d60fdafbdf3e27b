//! I2C bus abstractions
//!
//! The SSD1306 is write-only over I2C: every transfer is a control byte
//! followed by command or pixel bytes, so only master writes are modelled.

/// I2C bus master
pub trait I2cBus {
    /// Error type for I2C operations
    type Error;

    /// Write data to a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `data` - Bytes to write (may be empty for an address probe)
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error>;
}

/// Adapter for blocking `embedded-hal` 1.0 I2C masters
pub struct EhI2c<T>(pub T);

impl<T: embedded_hal::i2c::I2c> I2cBus for EhI2c<T> {
    type Error = T::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.0.write(address, data)
    }
}
