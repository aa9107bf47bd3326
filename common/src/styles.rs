//! Fonts and text styles for the face widgets.
//!
//! Color displays get a thinner digit font, black and white displays a heavier
//! one that survives the 1-bit panel. The weekday font is the same on both.
//! All text is horizontally centered in its widget frame and hangs from the
//! frame's top edge.

use embedded_graphics::{
    mono_font::{MonoFont, ascii::FONT_10X20},
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::{PROFONT_18_POINT, PROFONT_24_POINT};

use crate::config::ColorCapability;

/// Centered, top-anchored text. Used by every face widget.
pub const CENTERED_TOP: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Top)
    .build();

/// Weekday font.
pub const DATE_FONT: &MonoFont = &PROFONT_18_POINT;

/// Which of the two face fonts a text widget uses.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FaceFont {
    /// Hour and minute digits.
    Time,
    /// Weekday text.
    Text,
}

impl FaceFont {
    /// Concrete font for this role on the given display.
    pub const fn mono_font(
        self,
        capability: ColorCapability,
    ) -> &'static MonoFont<'static> {
        match (self, capability) {
            (Self::Time, ColorCapability::Color) => &PROFONT_24_POINT,
            (Self::Time, ColorCapability::Monochrome) => &FONT_10X20,
            (Self::Text, _) => DATE_FONT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_font_depends_on_capability() {
        let color = FaceFont::Time.mono_font(ColorCapability::Color);
        let mono = FaceFont::Time.mono_font(ColorCapability::Monochrome);
        assert_ne!(color.character_size, mono.character_size);
    }

    #[test]
    fn test_text_font_is_shared() {
        let color = FaceFont::Text.mono_font(ColorCapability::Color);
        let mono = FaceFont::Text.mono_font(ColorCapability::Monochrome);
        assert_eq!(color.character_size, mono.character_size);
    }

    #[test]
    fn test_time_digits_fit_eye_width() {
        use crate::config::RECTANGULAR;
        for capability in [ColorCapability::Color, ColorCapability::Monochrome] {
            let font = FaceFont::Time.mono_font(capability);
            let two_digits = font.character_size.width * 2 + font.character_spacing;
            assert!(two_digits <= (RECTANGULAR.eye_radius * 2) as u32);
        }
    }
}
