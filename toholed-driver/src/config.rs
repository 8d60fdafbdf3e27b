//! Panel configuration
//!
//! Settings the host keeps across restarts and applies when a panel
//! session starts.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::contrast::ContrastLevel;

/// Panel session configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PanelConfig {
    /// Brightness preset used when the caller has no preference
    pub contrast: ContrastLevel,
    /// Start the session with inverted pixels
    pub inverted: bool,
    /// Panel mounted upside down (undo the segment/COM remap)
    pub rotate_180: bool,
}

impl PanelConfig {
    /// Default configuration with a different brightness preset
    pub const fn with_contrast(contrast: ContrastLevel) -> Self {
        Self {
            contrast,
            inverted: false,
            rotate_180: false,
        }
    }
}
