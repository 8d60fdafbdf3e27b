//! Drawing errors
//!
//! Only caller mistakes are errors here. Drawing off the edge of the panel
//! is not: shapes are clipped pixel by pixel.

/// Errors from the compositor and clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DrawError {
    /// Icon id outside the known set
    InvalidIcon,
    /// Hour outside 0-23 or minute outside 0-59
    InvalidTime,
}
