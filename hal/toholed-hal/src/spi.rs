//! SPI bus abstractions
//!
//! Four-wire SPI panels only ever receive bytes; the data/command split is
//! carried on a separate GPIO (see [`crate::bus::SpiPanelBus`]).

/// SPI bus master
pub trait SpiBus {
    /// Error type for SPI operations
    type Error;

    /// Write data without reading
    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Block until all queued words have been clocked out
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// Adapter for blocking `embedded-hal` 1.0 SPI buses
pub struct EhSpi<T>(pub T);

impl<T: embedded_hal::spi::SpiBus<u8>> SpiBus for EhSpi<T> {
    type Error = T::Error;

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.0.write(data)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.0.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::spi::ErrorType;

    #[derive(Default)]
    struct Recorder {
        sent: Vec<u8>,
        flushes: usize,
    }

    impl ErrorType for Recorder {
        type Error = Infallible;
    }

    impl embedded_hal::spi::SpiBus<u8> for Recorder {
        fn read(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
            words.fill(0);
            Ok(())
        }

        fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
            self.sent.extend_from_slice(words);
            Ok(())
        }

        fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), Self::Error> {
            self.sent.extend_from_slice(write);
            read.fill(0);
            Ok(())
        }

        fn transfer_in_place(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
            self.sent.extend_from_slice(words);
            Ok(())
        }

        fn flush(&mut self) -> Result<(), Self::Error> {
            self.flushes += 1;
            Ok(())
        }
    }

    #[test]
    fn test_adapter_forwards_writes() {
        let mut bus = EhSpi(Recorder::default());
        bus.write(&[0xAE, 0xD5]).unwrap();
        bus.write(&[0x80]).unwrap();
        bus.flush().unwrap();

        assert_eq!(bus.0.sent, [0xAE, 0xD5, 0x80]);
        assert_eq!(bus.0.flushes, 1);
    }
}
