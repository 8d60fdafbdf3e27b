//! Panel driver errors

/// Errors from the panel session
///
/// `E` is the transport's error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelError<E> {
    /// Contrast value is not one of the presets
    InvalidLevel,
    /// Operation needs an initialized session
    InvalidState,
    /// Supply enable line did not switch on
    PowerFault,
    /// Bus I/O failed
    Transport(E),
}

impl<E> From<E> for PanelError<E> {
    fn from(e: E) -> Self {
        PanelError::Transport(e)
    }
}
