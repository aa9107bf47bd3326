//! Palette generation.
//!
//! A palette is the three colors the whole face is painted with:
//!
//! | Role       | Used for                                      |
//! |------------|-----------------------------------------------|
//! | background | Window background                             |
//! | primary    | Eye and mouth fill, inner nose stroke         |
//! | secondary  | Eye and mouth ring, outer nose stroke, text   |
//!
//! On color displays background and primary are drawn from 64 quantized
//! colors (4 levels per channel). Secondary is not random: it is white on dark
//! primaries and black on light ones so the digits stay readable.

use embedded_graphics::pixelcolor::Rgb888;
use rand_xoshiro::Xoroshiro128StarStar;
use rand_xoshiro::rand_core::{RngCore, SeedableRng};

use crate::colors::{BLACK, BRIGHTNESS_THRESHOLD, CHANNEL_LEVELS, CHANNEL_STEP, WHITE, channel_sum};
use crate::config::ColorCapability;

/// The colors the face is currently painted with.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ColorTriple {
    pub primary: Rgb888,
    pub secondary: Rgb888,
    pub background: Rgb888,
}

impl ColorTriple {
    /// Fixed palette for black and white displays.
    pub const MONOCHROME: Self = Self {
        primary: BLACK,
        secondary: WHITE,
        background: BLACK,
    };

    /// Generate a palette for the given capability.
    ///
    /// `seed` should be the current wall-clock time; equal seeds produce equal
    /// palettes. Monochrome ignores the seed.
    pub fn generate(
        capability: ColorCapability,
        seed: u64,
    ) -> Self {
        match capability {
            ColorCapability::Monochrome => Self::MONOCHROME,
            ColorCapability::Color => {
                let mut rng = Xoroshiro128StarStar::seed_from_u64(seed);
                // Background first, then primary
                let background = random_color(&mut rng);
                let primary = random_color(&mut rng);
                Self {
                    primary,
                    secondary: secondary_for(primary),
                    background,
                }
            }
        }
    }
}

impl Default for ColorTriple {
    fn default() -> Self { Self::MONOCHROME }
}

/// Contrast color for text drawn over `primary`.
#[inline]
pub fn secondary_for(primary: Rgb888) -> Rgb888 {
    if channel_sum(primary) < BRIGHTNESS_THRESHOLD {
        WHITE
    } else {
        BLACK
    }
}

fn random_level<R: RngCore>(rng: &mut R) -> u8 { (rng.next_u32() % CHANNEL_LEVELS) as u8 * CHANNEL_STEP }

fn random_color<R: RngCore>(rng: &mut R) -> Rgb888 {
    let r = random_level(rng);
    let g = random_level(rng);
    let b = random_level(rng);
    Rgb888::new(r, g, b)
}
