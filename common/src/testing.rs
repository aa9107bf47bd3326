//! Test doubles: an in-memory canvas and a host that records every call.

use chrono::NaiveDateTime;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::colors::BLACK;
use crate::geometry::FaceLayout;
use crate::host::{ClockService, TextField, TextSpec, Widget, WindowService};

/// Heap-backed RGB888 canvas. Pixels outside the bounds are dropped.
#[derive(Clone, PartialEq, Eq)]
pub struct Framebuffer {
    size: Size,
    pixels: Vec<Rgb888>,
}

impl Framebuffer {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            pixels: vec![BLACK; (size.width * size.height) as usize],
        }
    }

    pub fn for_layout(layout: &FaceLayout) -> Self { Self::new(layout.screen().size) }

    pub fn pixel(
        &self,
        point: Point,
    ) -> Option<Rgb888> {
        self.index(point).map(|i| self.pixels[i])
    }

    fn index(
        &self,
        point: Point,
    ) -> Option<usize> {
        let (w, h) = (self.size.width as i32, self.size.height as i32);
        if point.x < 0 || point.y < 0 || point.x >= w || point.y >= h {
            return None;
        }
        Some((point.y * w + point.x) as usize)
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size { self.size }
}

impl DrawTarget for Framebuffer {
    type Color = Rgb888;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let Some(i) = self.index(point) {
                self.pixels[i] = color;
            }
        }
        Ok(())
    }
}

/// Every call a [`RecordingHost`] received, in order.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum HostEvent {
    CreateCanvas(Rectangle),
    CreateText(TextField, TextSpec),
    Destroy(Widget),
    SetText(TextField, std::string::String),
    SetTextColor(TextField, Rgb888),
    SetBackground(Rgb888),
    MarkDirty,
}

#[derive(Clone, Debug)]
struct TextWidget {
    field: TextField,
    text: std::string::String,
    color: Rgb888,
}

/// Host double that keeps widget contents and an event log.
pub struct RecordingHost {
    pub now: NaiveDateTime,
    pub use_24h: bool,
    pub background: Option<Rgb888>,
    pub events: Vec<HostEvent>,
    canvas: bool,
    texts: Vec<TextWidget>,
}

impl RecordingHost {
    pub fn new(
        now: NaiveDateTime,
        use_24h: bool,
    ) -> Self {
        Self {
            now,
            use_24h,
            background: None,
            events: Vec::new(),
            canvas: false,
            texts: Vec::new(),
        }
    }

    pub fn text(
        &self,
        field: TextField,
    ) -> Option<&str> {
        self.texts
            .iter()
            .find(|t| t.field == field)
            .map(|t| t.text.as_str())
    }

    pub fn text_color(
        &self,
        field: TextField,
    ) -> Option<Rgb888> {
        self.texts.iter().find(|t| t.field == field).map(|t| t.color)
    }

    /// Number of widgets created but not yet destroyed.
    pub fn live_widgets(&self) -> usize { self.texts.len() + usize::from(self.canvas) }

    /// Number of create calls seen so far.
    pub fn created_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, HostEvent::CreateCanvas(_) | HostEvent::CreateText(..)))
            .count()
    }

    fn text_mut(
        &mut self,
        field: TextField,
    ) -> Option<&mut TextWidget> {
        self.texts.iter_mut().find(|t| t.field == field)
    }
}

impl WindowService for RecordingHost {
    fn create_canvas(
        &mut self,
        frame: Rectangle,
    ) {
        assert!(!self.canvas, "canvas created twice");
        self.canvas = true;
        self.events.push(HostEvent::CreateCanvas(frame));
    }

    fn create_text(
        &mut self,
        field: TextField,
        spec: TextSpec,
    ) {
        assert!(self.text(field).is_none(), "{field:?} created twice");
        self.texts.push(TextWidget {
            field,
            text: std::string::String::new(),
            color: spec.color,
        });
        self.events.push(HostEvent::CreateText(field, spec));
    }

    fn destroy(
        &mut self,
        widget: Widget,
    ) {
        match widget {
            Widget::Canvas => {
                assert!(self.canvas, "canvas destroyed twice");
                self.canvas = false;
            }
            Widget::Text(field) => {
                let before = self.texts.len();
                self.texts.retain(|t| t.field != field);
                assert_eq!(self.texts.len() + 1, before, "{field:?} destroyed twice");
            }
        }
        self.events.push(HostEvent::Destroy(widget));
    }

    fn set_text(
        &mut self,
        field: TextField,
        text: &str,
    ) {
        if let Some(widget) = self.text_mut(field) {
            widget.text = text.into();
        }
        self.events.push(HostEvent::SetText(field, text.into()));
    }

    fn set_text_color(
        &mut self,
        field: TextField,
        color: Rgb888,
    ) {
        if let Some(widget) = self.text_mut(field) {
            widget.color = color;
        }
        self.events.push(HostEvent::SetTextColor(field, color));
    }

    fn set_background(
        &mut self,
        color: Rgb888,
    ) {
        self.background = Some(color);
        self.events.push(HostEvent::SetBackground(color));
    }

    fn mark_dirty(&mut self) { self.events.push(HostEvent::MarkDirty); }
}

impl ClockService for RecordingHost {
    fn now(&self) -> NaiveDateTime { self.now }

    fn clock_is_24h_style(&self) -> bool { self.use_24h }
}
