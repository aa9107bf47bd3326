//! Color constants for the robot face.
//!
//! The face works in `Rgb888` so palette channel values stay exact (0, 85, 170,
//! 255). Hosts with a narrower native format convert at flush time.

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black (0, 0, 0). Monochrome background and primary, dark secondary.
pub const BLACK: Rgb888 = Rgb888::BLACK;

/// Pure white (255, 255, 255). Monochrome secondary, light secondary.
pub const WHITE: Rgb888 = Rgb888::WHITE;

// =============================================================================
// Palette Quantization
// =============================================================================

/// Step between two quantized channel levels.
pub const CHANNEL_STEP: u8 = 85;

/// Number of quantized levels per channel: 0, 85, 170, 255.
pub const CHANNEL_LEVELS: u32 = 4;

/// Channel sum below which a primary color counts as dark.
/// Dark primaries get white secondary text, light ones get black.
pub const BRIGHTNESS_THRESHOLD: u16 = 320;

const _: () = assert!(CHANNEL_STEP as u32 * (CHANNEL_LEVELS - 1) == 255);

/// Sum of the three channels of a color.
#[inline]
pub fn channel_sum(color: Rgb888) -> u16 { u16::from(color.r()) + u16::from(color.g()) + u16::from(color.b()) }

/// Whether every channel of `color` is one of the quantized levels.
#[cfg(test)]
pub fn is_quantized(color: Rgb888) -> bool {
    [color.r(), color.g(), color.b()]
        .iter()
        .all(|c| c % CHANNEL_STEP == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_sum() {
        assert_eq!(channel_sum(BLACK), 0);
        assert_eq!(channel_sum(WHITE), 765);
        assert_eq!(channel_sum(Rgb888::new(85, 170, 0)), 255);
    }

    #[test]
    fn test_is_quantized() {
        assert!(is_quantized(Rgb888::new(0, 85, 255)));
        assert!(is_quantized(WHITE));
        assert!(!is_quantized(Rgb888::new(0, 84, 255)));
    }
}
