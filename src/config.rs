//! Analysis configuration and defaults.

use crate::error::{EntropyError, Result};

// =============================================================================
// Defaults
// =============================================================================

/// Sliding window size in bytes.
pub const DEFAULT_WINDOW_SIZE: u32 = 32;

/// Bytes the window advances per step.
pub const DEFAULT_WINDOW_STRIDE: u32 = 1;

pub const DEFAULT_CANVAS_WIDTH: u32 = 800;
pub const DEFAULT_CANVAS_HEIGHT: u32 = 600;

/// Number of discrete colors between black (lowest entropy) and red (highest).
pub const DEFAULT_GRADIENT_STEPS: usize = 256;

// =============================================================================
// Window parameters
// =============================================================================

/// Sliding window geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowParams {
    pub size: u32,
    pub stride: u32,
}

impl WindowParams {
    /// Build window parameters, rejecting a zero size and any stride outside `1..=size`.
    pub fn new(size: u32, stride: u32) -> Result<Self> {
        let params = Self { size, stride };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(EntropyError::InvalidConfiguration(
                "window size must be greater than zero".to_string(),
            ));
        }
        if self.stride == 0 || self.stride > self.size {
            return Err(EntropyError::InvalidConfiguration(format!(
                "stride must be greater than zero and less than/equal to size (size={}, stride={})",
                self.size, self.stride
            )));
        }
        Ok(())
    }
}

impl Default for WindowParams {
    fn default() -> Self {
        Self {
            size: DEFAULT_WINDOW_SIZE,
            stride: DEFAULT_WINDOW_STRIDE,
        }
    }
}

// =============================================================================
// Full analysis configuration
// =============================================================================

/// Everything a complete run (entropy sequence plus rendered canvas) needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisConfig {
    pub window: WindowParams,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub gradient_steps: usize,
}

impl AnalysisConfig {
    pub fn with_window(mut self, size: u32, stride: u32) -> Self {
        self.window = WindowParams { size, stride };
        self
    }

    pub fn with_canvas(mut self, width: u32, height: u32) -> Self {
        self.canvas_width = width;
        self.canvas_height = height;
        self
    }

    pub fn with_gradient_steps(mut self, steps: usize) -> Self {
        self.gradient_steps = steps;
        self
    }

    /// Validate every parameter. Called before any byte is read.
    pub fn validate(&self) -> Result<()> {
        self.window.validate()?;
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(EntropyError::InvalidConfiguration(format!(
                "canvas must be at least 1x1 (got {}x{})",
                self.canvas_width, self.canvas_height
            )));
        }
        if self.gradient_steps < 2 {
            return Err(EntropyError::InvalidConfiguration(format!(
                "gradient needs at least 2 steps (got {})",
                self.gradient_steps
            )));
        }
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            window: WindowParams::default(),
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            gradient_steps: DEFAULT_GRADIENT_STEPS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AnalysisConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.window.size, 32);
        assert_eq!(config.window.stride, 1);
        assert_eq!((config.canvas_width, config.canvas_height), (800, 600));
    }

    #[test]
    fn test_invalid_stride_rejected() {
        assert!(matches!(
            WindowParams::new(10, 0),
            Err(EntropyError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            WindowParams::new(10, 11),
            Err(EntropyError::InvalidConfiguration(_))
        ));
        assert!(WindowParams::new(10, 10).is_ok());
    }

    #[test]
    fn test_zero_canvas_rejected() {
        let config = AnalysisConfig::default().with_canvas(0, 600);
        assert!(config.validate().is_err());
        let config = AnalysisConfig::default().with_gradient_steps(1);
        assert!(config.validate().is_err());
    }
}
