//! Drawing the face shapes.
//!
//! The renderer is stateless: everything it needs comes from the palette, the
//! layout and the color capability, so the same inputs always produce the same
//! pixels. Text is not drawn here; hour, minute and weekday are host widgets
//! layered on top of the canvas.
//!
//! # Draw Order
//!
//! Later shapes cover earlier ones, which is how the rings are made:
//!
//! | Pass | Shapes                                    | Color     |
//! |------|-------------------------------------------|-----------|
//! | 1    | Eye discs (full radius), mouth box        | secondary |
//! | 2    | Outer nose outline                        | secondary |
//! | 2    | Inner nose outline                        | primary   |
//! | 3    | Eye discs (inner radius), inner mouth box | primary   |

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle};

use crate::config::ColorCapability;
use crate::geometry::{FaceLayout, Triangle};
use crate::palette::ColorTriple;

/// Nose stroke width on black and white displays.
const MONOCHROME_STROKE: u32 = 1;

/// Stroke width used for the nose outlines.
pub const fn nose_stroke_width(
    layout: &FaceLayout,
    capability: ColorCapability,
) -> u32 {
    match capability {
        ColorCapability::Color => layout.geometry().nose_border as u32,
        ColorCapability::Monochrome => MONOCHROME_STROKE,
    }
}

/// Draw eyes, nose and mouth.
pub fn draw_face<D>(
    display: &mut D,
    palette: &ColorTriple,
    layout: &FaceLayout,
    capability: ColorCapability,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    let ring = PrimitiveStyle::with_fill(palette.secondary);
    let fill = PrimitiveStyle::with_fill(palette.primary);

    // Pass 1: eye and mouth rings
    draw_eyes(display, layout, layout.eye_outer_radius(), ring)?;
    layout.mouth_outer_rounded().into_styled(ring).draw(display)?;

    // Pass 2: nose outline, then the inner highlight
    let stroke = nose_stroke_width(layout, capability);
    draw_triangle(
        display,
        &layout.nose_outer(),
        PrimitiveStyle::with_stroke(palette.secondary, stroke),
    )?;
    draw_triangle(
        display,
        &layout.nose_inner(),
        PrimitiveStyle::with_stroke(palette.primary, stroke),
    )?;

    // Pass 3: fill inside the rings
    draw_eyes(display, layout, layout.eye_inner_radius(), fill)?;
    layout.mouth_inner_rounded().into_styled(fill).draw(display)?;

    Ok(())
}

fn draw_eyes<D>(
    display: &mut D,
    layout: &FaceLayout,
    radius: i32,
    style: PrimitiveStyle<Rgb888>,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    for center in [layout.left_eye_center(), layout.right_eye_center()] {
        disc(center, radius).into_styled(style).draw(display)?;
    }
    Ok(())
}

/// Circle of `radius` pixels around an integer center.
///
/// The diameter is odd so the disc is symmetric around the center pixel.
#[inline]
pub fn disc(
    center: Point,
    radius: i32,
) -> Circle {
    Circle::with_center(center, (radius.max(0) * 2 + 1) as u32)
}

/// Stroke the three edges of a triangle as separate lines.
fn draw_triangle<D>(
    display: &mut D,
    points: &Triangle,
    style: PrimitiveStyle<Rgb888>,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    let [a, b, c] = *points;
    for (start, end) in [(a, b), (b, c), (c, a)] {
        Line::new(start, end).into_styled(style).draw(display)?;
    }
    Ok(())
}
