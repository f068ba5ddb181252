//! Viewer configuration

use crate::error::{Error, Result};

/// Largest supported window scale
pub const MAX_SCALE: u32 = 4;

/// Host window presentation settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Integer upscaling of the 640x480 raster
    pub scale: u32,
    /// Frames presented per second
    pub target_fps: u32,
}

impl DisplayConfig {
    /// 1:1 pixels at the native 60 Hz refresh
    pub const DEFAULT: Self = Self {
        scale: 1,
        target_fps: 60,
    };

    /// Build a config with the given scale
    pub fn with_scale(scale: u32) -> Result<Self> {
        let config = Self {
            scale,
            ..Self::DEFAULT
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the viewer cannot honor
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_SCALE).contains(&self.scale) {
            return Err(Error::InvalidScale(self.scale));
        }
        if self.target_fps == 0 {
            return Err(Error::InvalidFps(self.target_fps));
        }
        Ok(())
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
