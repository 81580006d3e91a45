//! Pixel colors and the discrete entropy gradient.

use bytemuck::{Pod, Zeroable};

use crate::error::{EntropyError, Result};

/// 8-bit RGB pixel, laid out as three consecutive bytes.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const RED: Self = Self::new(255, 0, 0);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Fixed palette of discrete color steps indexed by a normalized value.
///
/// Quantizing keeps the lookup table small and gives consistent banding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gradient {
    colors: Vec<Rgb>,
}

impl Gradient {
    /// Use `colors` as the palette, lowest value first.
    pub fn new(colors: Vec<Rgb>) -> Result<Self> {
        if colors.len() < 2 {
            return Err(EntropyError::InvalidConfiguration(format!(
                "gradient needs at least 2 steps (got {})",
                colors.len()
            )));
        }
        Ok(Self { colors })
    }

    /// Linear ramp from black (0.0) to full-intensity red (1.0).
    pub fn black_to_red(steps: usize) -> Result<Self> {
        Self::linear(Rgb::BLACK, Rgb::RED, steps)
    }

    /// Linear ramp between two colors, both endpoints included.
    pub fn linear(from: Rgb, to: Rgb, steps: usize) -> Result<Self> {
        if steps < 2 {
            return Err(EntropyError::InvalidConfiguration(format!(
                "gradient needs at least 2 steps (got {steps})"
            )));
        }

        let last = (steps - 1) as u32;
        let lerp = |a: u8, b: u8, i: u32| -> u8 {
            let (a, b) = (u32::from(a), u32::from(b));
            if b >= a {
                (a + (b - a) * i / last) as u8
            } else {
                (a - (a - b) * i / last) as u8
            }
        };

        let colors = (0..steps as u32)
            .map(|i| Rgb::new(lerp(from.r, to.r, i), lerp(from.g, to.g, i), lerp(from.b, to.b, i)))
            .collect();
        Ok(Self { colors })
    }

    pub fn steps(&self) -> usize {
        self.colors.len()
    }

    /// Palette index for a normalized value: `floor(scaled * (steps - 1))`.
    /// Values outside [0, 1] are clamped; NaN maps to 0.
    #[inline]
    pub fn index_for(&self, scaled: f64) -> usize {
        if scaled.is_nan() {
            return 0;
        }
        let index = (scaled.clamp(0.0, 1.0) * (self.colors.len() - 1) as f64).floor() as usize;
        index.min(self.colors.len() - 1)
    }

    /// Color at a palette index, clamped to the last step.
    #[inline]
    pub fn color(&self, index: usize) -> Rgb {
        self.colors[index.min(self.colors.len() - 1)]
    }

    #[inline]
    pub fn color_for(&self, scaled: f64) -> Rgb {
        self.color(self.index_for(scaled))
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }
}

impl Default for Gradient {
    /// 256-step black to red ramp.
    fn default() -> Self {
        let colors = (0..=255u8).map(|r| Rgb::new(r, 0, 0)).collect();
        Self { colors }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_to_red_endpoints() {
        let gradient = Gradient::black_to_red(256).unwrap();
        assert_eq!(gradient.steps(), 256);
        assert_eq!(gradient.color(0), Rgb::BLACK);
        assert_eq!(gradient.color(255), Rgb::RED);
        assert_eq!(gradient.color(128), Rgb::new(128, 0, 0));
        assert_eq!(gradient, Gradient::default());
    }

    #[test]
    fn test_index_quantization() {
        let gradient = Gradient::black_to_red(256).unwrap();
        assert_eq!(gradient.index_for(0.0), 0);
        assert_eq!(gradient.index_for(1.0), 255);
        assert_eq!(gradient.index_for(0.5), 127);
        assert_eq!(gradient.index_for(-3.0), 0);
        assert_eq!(gradient.index_for(7.0), 255);
        assert_eq!(gradient.index_for(f64::NAN), 0);

        let coarse = Gradient::black_to_red(4).unwrap();
        assert_eq!(coarse.index_for(0.99), 2);
        assert_eq!(coarse.color_for(1.0), Rgb::RED);
        assert_eq!(coarse.color(1), Rgb::new(85, 0, 0));
    }

    #[test]
    fn test_descending_ramp() {
        let gradient = Gradient::linear(Rgb::new(255, 255, 255), Rgb::BLACK, 3).unwrap();
        assert_eq!(gradient.colors(), &[
            Rgb::new(255, 255, 255),
            Rgb::new(128, 128, 128),
            Rgb::BLACK
        ]);
    }

    #[test]
    fn test_too_few_steps() {
        assert!(Gradient::black_to_red(1).is_err());
        assert!(Gradient::new(vec![Rgb::RED]).is_err());
    }

    #[test]
    fn test_rgb_is_three_bytes() {
        let pixels = [Rgb::new(1, 2, 3), Rgb::new(4, 5, 6)];
        let bytes: &[u8] = bytemuck::cast_slice(&pixels);
        assert_eq!(bytes, &[1, 2, 3, 4, 5, 6]);
    }
}
