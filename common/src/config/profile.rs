//! Device capability descriptor.
//!
//! Geometry, palette and renderer take a [`DeviceProfile`] (or one of its
//! fields) instead of branching on the target at compile time. The profile the
//! firmware is built for is [`DeviceProfile::BUILD`], chosen with the `round`
//! and `monochrome` Cargo features.

use super::layout::{RECTANGULAR, ROUND, ScreenGeometry};

/// Physical shape of the display.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum DisplayShape {
    /// 144x168 rectangular screen.
    #[default]
    Rectangular,
    /// 180x180 round screen.
    Round,
}

impl DisplayShape {
    /// Screen geometry preset for this shape.
    pub const fn geometry(self) -> ScreenGeometry {
        match self {
            Self::Rectangular => RECTANGULAR,
            Self::Round => ROUND,
        }
    }
}

/// Whether the display can render colors other than black and white.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum ColorCapability {
    /// 64-color display, random palettes.
    #[default]
    Color,
    /// Black and white only, fixed palette.
    Monochrome,
}

impl ColorCapability {
    #[inline]
    pub const fn is_color(self) -> bool { matches!(self, Self::Color) }
}

/// Shape and color capability of the target device.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct DeviceProfile {
    pub shape: DisplayShape,
    pub color: ColorCapability,
}

impl DeviceProfile {
    /// Profile selected by Cargo features at build time.
    pub const BUILD: Self = Self {
        shape: if cfg!(feature = "round") {
            DisplayShape::Round
        } else {
            DisplayShape::Rectangular
        },
        color: if cfg!(feature = "monochrome") {
            ColorCapability::Monochrome
        } else {
            ColorCapability::Color
        },
    };

    pub const fn new(
        shape: DisplayShape,
        color: ColorCapability,
    ) -> Self {
        Self { shape, color }
    }

    /// Screen geometry for this profile's shape.
    #[inline]
    pub const fn geometry(self) -> ScreenGeometry { self.shape.geometry() }
}
