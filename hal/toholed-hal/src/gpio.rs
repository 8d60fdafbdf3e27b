//! GPIO pin abstractions
//!
//! The panel needs two digital outputs at most: the supply enable line
//! and, on SPI wiring, the data/command select line.

/// Digital output pin
///
/// Implementations should handle the actual hardware register manipulation
/// for the specific chip.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently set low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

/// Adapter for `embedded-hal` 1.0 output pins
///
/// The embedded-hal trait is fallible and write-only; this wrapper keeps
/// the last level that was driven successfully so `is_set_high` can be
/// answered without a stateful pin. A failed write leaves the tracked
/// level unchanged and latches [`EhOutputPin::is_faulted`] until the next
/// successful write.
pub struct EhOutputPin<P> {
    pin: P,
    high: bool,
    faulted: bool,
}

impl<P: embedded_hal::digital::OutputPin> EhOutputPin<P> {
    /// Wrap a pin, driving it low so the starting level is known
    pub fn new(pin: P) -> Self {
        let mut wrapped = Self {
            pin,
            high: false,
            faulted: false,
        };
        wrapped.drive(false);
        wrapped
    }

    /// Whether the most recent write to the pin failed
    pub fn is_faulted(&self) -> bool {
        self.faulted
    }

    /// Give back the wrapped pin
    pub fn into_inner(self) -> P {
        self.pin
    }

    fn drive(&mut self, high: bool) {
        let result = if high {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };

        match result {
            Ok(()) => {
                self.high = high;
                self.faulted = false;
            }
            Err(_) => {
                self.faulted = true;
                #[cfg(feature = "defmt")]
                defmt::warn!("Output pin write failed (high: {})", high);
            }
        }
    }
}

impl<P: embedded_hal::digital::OutputPin> OutputPin for EhOutputPin<P> {
    fn set_high(&mut self) {
        self.drive(true);
    }

    fn set_low(&mut self) {
        self.drive(false);
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}
