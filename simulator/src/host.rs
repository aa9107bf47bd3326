//! Desktop implementation of the watch host services.
//!
//! Owns the simulated display and the text widgets the face creates. Text is
//! drawn here, on top of the face canvas, the way the watch's layer system
//! stacks text layers over the drawing layer.

use chrono::{Duration, Local, NaiveDateTime};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Text;
use embedded_graphics_simulator::SimulatorDisplay;
use heapless::String;
use log::{debug, warn};
use robot_face_common::colors::BLACK;
use robot_face_common::config::ColorCapability;
use robot_face_common::host::{ClockService, TextField, TextSpec, Widget, WindowService};
use robot_face_common::styles::CENTERED_TOP;
use robot_face_common::FaceController;

/// Longest text a widget keeps. The face never sends more than a weekday.
const TEXT_CAPACITY: usize = 16;

/// A text layer created by the face.
struct TextLayer {
    field: TextField,
    spec: TextSpec,
    text: String<TEXT_CAPACITY>,
}

/// Simulated watch: window, layers, clock and locale.
pub struct SimHost {
    display: SimulatorDisplay<Rgb888>,
    capability: ColorCapability,
    canvas: Option<Rectangle>,
    texts: Vec<TextLayer>,
    background: Rgb888,
    dirty: bool,
    use_24h: bool,
    /// Added to the local time so minutes can be skipped with a key press.
    offset: Duration,
}

impl SimHost {
    pub fn new(
        size: Size,
        capability: ColorCapability,
    ) -> Self {
        Self {
            display: SimulatorDisplay::new(size),
            capability,
            canvas: None,
            texts: Vec::new(),
            background: BLACK,
            dirty: true,
            use_24h: true,
            offset: Duration::zero(),
        }
    }

    #[inline]
    pub const fn display(&self) -> &SimulatorDisplay<Rgb888> { &self.display }

    #[inline]
    pub const fn use_24h(&self) -> bool { self.use_24h }

    pub fn toggle_24h(&mut self) {
        self.use_24h = !self.use_24h;
        debug!("24h style: {}", self.use_24h);
    }

    /// Move the simulated clock forward by one minute.
    pub fn skip_minute(&mut self) { self.offset += Duration::minutes(1); }

    /// Redraw background, face and text if anything changed.
    ///
    /// Returns whether the display was updated.
    pub fn compose(
        &mut self,
        face: &mut FaceController,
    ) -> bool {
        if !self.dirty {
            return false;
        }

        self.display.clear(self.background).ok();
        if self.canvas.is_some() {
            // Infallible on the simulator display
            face.draw(&mut self.display).ok();
        }
        for layer in &self.texts {
            draw_text_layer(&mut self.display, layer, self.capability);
        }

        self.dirty = false;
        true
    }

    fn layer_mut(
        &mut self,
        field: TextField,
    ) -> Option<&mut TextLayer> {
        self.texts.iter_mut().find(|l| l.field == field)
    }
}

fn draw_text_layer(
    display: &mut SimulatorDisplay<Rgb888>,
    layer: &TextLayer,
    capability: ColorCapability,
) {
    let style = MonoTextStyle::new(layer.spec.font.mono_font(capability), layer.spec.color);
    let frame = layer.spec.frame;
    let anchor = Point::new(frame.top_left.x + frame.size.width as i32 / 2, frame.top_left.y);
    let mut clipped = display.clipped(&frame);
    Text::with_text_style(&layer.text, anchor, style, CENTERED_TOP)
        .draw(&mut clipped)
        .ok();
}

impl WindowService for SimHost {
    fn create_canvas(
        &mut self,
        frame: Rectangle,
    ) {
        self.canvas = Some(frame);
        self.dirty = true;
    }

    fn create_text(
        &mut self,
        field: TextField,
        spec: TextSpec,
    ) {
        self.texts.push(TextLayer {
            field,
            spec,
            text: String::new(),
        });
        self.dirty = true;
    }

    fn destroy(
        &mut self,
        widget: Widget,
    ) {
        match widget {
            Widget::Canvas => self.canvas = None,
            Widget::Text(field) => self.texts.retain(|l| l.field != field),
        }
        self.dirty = true;
    }

    fn set_text(
        &mut self,
        field: TextField,
        text: &str,
    ) {
        let Some(layer) = self.layer_mut(field) else {
            warn!("set_text on missing {field:?} layer");
            return;
        };
        layer.text.clear();
        for c in text.chars() {
            if layer.text.push(c).is_err() {
                break;
            }
        }
        self.dirty = true;
    }

    fn set_text_color(
        &mut self,
        field: TextField,
        color: Rgb888,
    ) {
        if let Some(layer) = self.layer_mut(field) {
            layer.spec.color = color;
            self.dirty = true;
        }
    }

    fn set_background(
        &mut self,
        color: Rgb888,
    ) {
        self.background = color;
        self.dirty = true;
    }

    fn mark_dirty(&mut self) { self.dirty = true; }
}

impl ClockService for SimHost {
    fn now(&self) -> NaiveDateTime { Local::now().naive_local() + self.offset }

    fn clock_is_24h_style(&self) -> bool { self.use_24h }
}

