//! Interfaces of the host services the face runs on.
//!
//! The face never owns a window, a timer or a font renderer. It asks the host
//! to create widgets, tells it what to show, and gets called back on load,
//! unload and every minute. Any platform that implements these traits can run
//! the face: the desktop simulator, a device firmware, or a test double.

use chrono::{NaiveDateTime, Weekday};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::primitives::Rectangle;

use crate::styles::FaceFont;

/// Text widgets of the face.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TextField {
    /// Hour digits, inside the left eye.
    Hour,
    /// Minute digits, inside the right eye.
    Minute,
    /// Weekday name, inside the mouth.
    Date,
}

impl TextField {
    /// Creation order of the text widgets.
    pub const ALL: [Self; 3] = [Self::Hour, Self::Minute, Self::Date];
}

/// Handle to a widget created through [`WindowService`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Widget {
    /// The drawing layer the face shapes are rendered on.
    Canvas,
    Text(TextField),
}

/// How a text widget is created.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TextSpec {
    pub frame: Rectangle,
    pub font: FaceFont,
    pub color: Rgb888,
}

/// Window and layer service.
///
/// Calls are non-failing by contract. Text is always horizontally centered in
/// the widget frame on a transparent background.
pub trait WindowService {
    /// Create the drawing layer. The host calls the controller's `draw` with a
    /// canvas whenever it is dirty.
    fn create_canvas(
        &mut self,
        frame: Rectangle,
    );

    fn create_text(
        &mut self,
        field: TextField,
        spec: TextSpec,
    );

    fn destroy(
        &mut self,
        widget: Widget,
    );

    fn set_text(
        &mut self,
        field: TextField,
        text: &str,
    );

    fn set_text_color(
        &mut self,
        field: TextField,
        color: Rgb888,
    );

    fn set_background(
        &mut self,
        color: Rgb888,
    );

    /// Request a canvas redraw.
    fn mark_dirty(&mut self);
}

/// Wall clock and locale service.
pub trait ClockService {
    /// Current local time.
    fn now(&self) -> NaiveDateTime;

    /// Whether the user prefers 24-hour time.
    fn clock_is_24h_style(&self) -> bool;

    /// Localized full weekday name. Case is normalized by the formatter.
    fn weekday_name(
        &self,
        day: Weekday,
    ) -> &str {
        english_weekday(day)
    }
}

/// English weekday names, lowercase after the first letter.
pub const fn english_weekday(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
