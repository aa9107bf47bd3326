//! Integer layout of the face.
//!
//! Every position is derived from a [`ScreenGeometry`] with truncating integer
//! division, so the face lands on the same pixels on every host.
//!
//! ```text
//!        ( HH )   ( MM )        <- eyes, hour and minute text
//!             /\
//!            /__\               <- nose (outer + inner triangle)
//!    [ Wednesday        ]       <- mouth, date text
//! ```

use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::primitives::{CornerRadii, Rectangle, RoundedRectangle};

use crate::config::ScreenGeometry;

/// Nose height as a fraction of its base (roughly equilateral).
const NOSE_HEIGHT_NUM: i32 = 26;
const NOSE_HEIGHT_DEN: i32 = 30;

/// Corner points of a nose triangle: left base, right base, apex.
pub type Triangle = [Point; 3];

/// Pre-computed positions of every face element.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FaceLayout {
    geometry: ScreenGeometry,
}

impl FaceLayout {
    pub const fn new(geometry: ScreenGeometry) -> Self { Self { geometry } }

    #[inline]
    pub const fn geometry(&self) -> &ScreenGeometry { &self.geometry }

    /// Full-screen bounds, used for the canvas layer.
    pub const fn screen(&self) -> Rectangle {
        Rectangle::new(
            Point::zero(),
            Size::new(self.geometry.width as u32, self.geometry.height as u32),
        )
    }

    /// Distance from the screen center to each eye center.
    #[inline]
    const fn eye_offset(&self) -> i32 { self.geometry.eye_radius + self.geometry.eyes_distance }

    pub const fn left_eye_center(&self) -> Point {
        Point::new(self.geometry.width / 2 - self.eye_offset(), self.geometry.eyes_level)
    }

    pub const fn right_eye_center(&self) -> Point {
        Point::new(self.geometry.width / 2 + self.eye_offset(), self.geometry.eyes_level)
    }

    /// Radius of the eye ring (secondary color).
    #[inline]
    pub const fn eye_outer_radius(&self) -> i32 { self.geometry.eye_radius }

    /// Radius of the eye fill (primary color).
    #[inline]
    pub const fn eye_inner_radius(&self) -> i32 { self.geometry.eye_radius - self.geometry.eye_border }

    /// Mouth bounding box.
    pub const fn mouth_outer(&self) -> Rectangle {
        let g = &self.geometry;
        Rectangle::new(
            Point::new((g.width - g.mouth_width) / 2, g.mouth_level - g.mouth_height / 2),
            Size::new(g.mouth_width as u32, g.mouth_height as u32),
        )
    }

    /// Mouth box inset by the border on every side.
    pub const fn mouth_inner(&self) -> Rectangle {
        let g = &self.geometry;
        let outer = self.mouth_outer();
        Rectangle::new(
            Point::new(outer.top_left.x + g.mouth_border, outer.top_left.y + g.mouth_border),
            Size::new(
                (g.mouth_width - g.mouth_border * 2) as u32,
                (g.mouth_height - g.mouth_border * 2) as u32,
            ),
        )
    }

    /// Corner radius shared by both mouth rectangles.
    #[inline]
    pub const fn mouth_corner(&self) -> Size {
        Size::new(self.geometry.mouth_border as u32, self.geometry.mouth_border as u32)
    }

    pub fn mouth_outer_rounded(&self) -> RoundedRectangle {
        RoundedRectangle::new(self.mouth_outer(), CornerRadii::new(self.mouth_corner()))
    }

    pub fn mouth_inner_rounded(&self) -> RoundedRectangle {
        RoundedRectangle::new(self.mouth_inner(), CornerRadii::new(self.mouth_corner()))
    }

    /// Outer nose triangle, apex pointing up, base on the nose level.
    pub const fn nose_outer(&self) -> Triangle { self.nose(self.geometry.nose_level, self.geometry.nose_size) }

    /// Inner nose triangle: raised by the border and narrowed by four borders.
    pub const fn nose_inner(&self) -> Triangle {
        let g = &self.geometry;
        self.nose(g.nose_level - g.nose_border, g.nose_size - g.nose_border * 4)
    }

    const fn nose(
        &self,
        level: i32,
        size: i32,
    ) -> Triangle {
        let width = self.geometry.width;
        let start = (width - size) / 2;
        [
            Point::new(start, level),
            Point::new(start + size, level),
            Point::new(width / 2, level - (size * NOSE_HEIGHT_NUM / NOSE_HEIGHT_DEN)),
        ]
    }

    /// Text box centered on the left eye.
    pub const fn hour_frame(&self) -> Rectangle { self.eye_text_frame(self.left_eye_center()) }

    /// Text box centered on the right eye.
    pub const fn minute_frame(&self) -> Rectangle { self.eye_text_frame(self.right_eye_center()) }

    const fn eye_text_frame(
        &self,
        center: Point,
    ) -> Rectangle {
        let g = &self.geometry;
        Rectangle::new(
            Point::new(
                center.x - g.eye_radius,
                g.eyes_level - g.time_font_size / 2 - g.time_height_adjustment,
            ),
            Size::new((g.eye_radius * 2) as u32, g.time_font_size as u32),
        )
    }

    /// Full-width band for the weekday, over the mouth.
    pub const fn date_frame(&self) -> Rectangle {
        let g = &self.geometry;
        Rectangle::new(
            Point::new(0, g.date_top),
            // Screen width, not a fixed 144: keeps the text centered on round screens
            Size::new(g.width as u32, g.date_height as u32),
        )
    }
}
