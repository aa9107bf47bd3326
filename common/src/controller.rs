//! Face lifecycle.
//!
//! [`FaceController`] is the only stateful part of the face. The host calls it
//! on window load and unload, on every minute tick, and whenever the canvas
//! needs drawing. Everything it owns lives in [`FaceState`], which exists only
//! while the window is loaded.
//!
//! # Phases
//!
//! ```text
//! Unloaded --on_load--> Loaded --(first time shown)--> Active
//! Active --draw--> Redrawing --(done)--> Active
//! Active --on_unload--> Unloaded
//! ```
//!
//! # Palette Changes
//!
//! On color displays the palette is re-rolled when the minute reads `00` or
//! `30`. The new palette goes to the window background and every text widget,
//! and the canvas is marked dirty so the shapes follow.

use chrono::NaiveDateTime;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::DrawTarget;
use heapless::Vec;
use log::{debug, info, warn};

use crate::clock::ClockStrings;
use crate::config::{DeviceProfile, FaceSettings};
use crate::geometry::FaceLayout;
use crate::host::{ClockService, TextField, TextSpec, Widget, WindowService};
use crate::messaging::AppMessageHandler;
use crate::palette::ColorTriple;
use crate::render::draw_face;
use crate::styles::FaceFont;

/// Number of widgets the face creates (canvas + three text fields).
pub const WIDGET_COUNT: usize = 4;

/// Lifecycle phase of the face.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum FacePhase {
    /// No window; no state.
    #[default]
    Unloaded,
    /// Widgets exist, time not shown yet.
    Loaded,
    /// Showing the time, waiting for ticks.
    Active,
    /// Inside a canvas draw.
    Redrawing,
}

/// What a minute tick did.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TickOutcome {
    /// Face not loaded, tick dropped.
    Ignored,
    /// Text refreshed, palette kept.
    TextUpdated,
    /// Text refreshed and a new palette applied.
    PaletteChanged,
}

/// State owned by the controller between load and unload.
#[derive(Clone, Debug)]
pub struct FaceState {
    pub palette: ColorTriple,
    pub clock: ClockStrings,
    /// Widgets in acquisition order; released back to front.
    widgets: Vec<Widget, WIDGET_COUNT>,
}

impl FaceState {
    /// Widgets currently held, in acquisition order.
    pub fn widgets(&self) -> &[Widget] { &self.widgets }
}

/// Drives the face from host callbacks.
pub struct FaceController {
    profile: DeviceProfile,
    settings: FaceSettings,
    layout: FaceLayout,
    phase: FacePhase,
    state: Option<FaceState>,
}

impl FaceController {
    pub fn new(
        profile: DeviceProfile,
        settings: FaceSettings,
    ) -> Self {
        Self {
            profile,
            settings,
            layout: FaceLayout::new(profile.geometry()),
            phase: FacePhase::Unloaded,
            state: None,
        }
    }

    #[inline]
    pub const fn phase(&self) -> FacePhase { self.phase }

    #[inline]
    pub const fn layout(&self) -> &FaceLayout { &self.layout }

    #[inline]
    pub const fn profile(&self) -> DeviceProfile { self.profile }

    /// Current state, `None` while unloaded.
    #[inline]
    pub const fn state(&self) -> Option<&FaceState> { self.state.as_ref() }

    /// Current palette, `None` while unloaded.
    pub fn palette(&self) -> Option<&ColorTriple> { self.state.as_ref().map(|s| &s.palette) }

    /// Create widgets, apply the first palette and show the time.
    pub fn on_load<H>(
        &mut self,
        host: &mut H,
    ) where
        H: WindowService + ClockService,
    {
        if self.phase != FacePhase::Unloaded {
            warn!("Load ignored: face already loaded ({:?})", self.phase);
            return;
        }

        let now = host.now();
        let palette = ColorTriple::generate(self.profile.color, seed_from(&now));
        let mut widgets: Vec<Widget, WIDGET_COUNT> = Vec::new();

        host.create_canvas(self.layout.screen());
        widgets.push(Widget::Canvas).ok();

        for field in TextField::ALL {
            host.create_text(field, self.text_spec(field, &palette));
            widgets.push(Widget::Text(field)).ok();
        }
        host.set_background(palette.background);

        self.state = Some(FaceState {
            palette,
            clock: ClockStrings::new(),
            widgets,
        });
        self.phase = FacePhase::Loaded;
        info!("Face loaded ({:?})", self.profile);

        // Show the time right away instead of waiting for the first tick
        self.refresh_time(host, &now);
        self.phase = FacePhase::Active;
    }

    /// Handle a minute tick.
    pub fn on_tick<H>(
        &mut self,
        host: &mut H,
        now: NaiveDateTime,
    ) -> TickOutcome
    where
        H: WindowService + ClockService,
    {
        if self.state.is_none() {
            warn!("Tick ignored: face not loaded");
            return TickOutcome::Ignored;
        }

        let mark = self.refresh_time(host, &now);
        if !(self.profile.color.is_color() && mark) {
            return TickOutcome::TextUpdated;
        }

        let palette = ColorTriple::generate(self.profile.color, seed_from(&now));
        self.apply_palette(host, palette);
        TickOutcome::PaletteChanged
    }

    /// Re-format the current time without a tick, e.g. after the user changed
    /// the 12/24-hour preference. The palette is left alone.
    ///
    /// Returns false when the face is not loaded.
    pub fn refresh<H>(
        &mut self,
        host: &mut H,
    ) -> bool
    where
        H: WindowService + ClockService,
    {
        if self.state.is_none() {
            warn!("Refresh ignored: face not loaded");
            return false;
        }

        let now = host.now();
        self.refresh_time(host, &now);
        true
    }

    /// Draw the face shapes onto the canvas.
    pub fn draw<D>(
        &mut self,
        canvas: &mut D,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let Some(state) = self.state.as_ref() else {
            return Ok(());
        };

        let previous = self.phase;
        self.phase = FacePhase::Redrawing;
        let result = draw_face(canvas, &state.palette, &self.layout, self.profile.color);
        self.phase = previous;
        result
    }

    /// Release every widget in reverse order and drop the state.
    pub fn on_unload<H>(
        &mut self,
        host: &mut H,
    ) where
        H: WindowService,
    {
        let Some(mut state) = self.state.take() else {
            warn!("Unload ignored: face not loaded");
            return;
        };

        while let Some(widget) = state.widgets.pop() {
            host.destroy(widget);
        }
        self.phase = FacePhase::Unloaded;
        info!("Face unloaded");
    }

    fn text_spec(
        &self,
        field: TextField,
        palette: &ColorTriple,
    ) -> TextSpec {
        let (frame, font) = match field {
            TextField::Hour => (self.layout.hour_frame(), FaceFont::Time),
            TextField::Minute => (self.layout.minute_frame(), FaceFont::Time),
            TextField::Date => (self.layout.date_frame(), FaceFont::Text),
        };
        TextSpec {
            frame,
            font,
            color: palette.secondary,
        }
    }

    /// Reformat the clock and push it to the text widgets.
    ///
    /// Returns whether the new minute is a palette mark.
    fn refresh_time<H>(
        &mut self,
        host: &mut H,
        now: &NaiveDateTime,
    ) -> bool
    where
        H: WindowService + ClockService,
    {
        let use_24h = host.clock_is_24h_style();
        let show_date = self.settings.show_date;
        let Some(state) = self.state.as_mut() else {
            return false;
        };

        let locale: &H = host;
        state.clock.update(now, use_24h, |day| locale.weekday_name(day));
        debug!(
            "Time {}:{} {}",
            state.clock.hour.as_str(),
            state.clock.minute.as_str(),
            state.clock.weekday.as_str()
        );

        host.set_text(TextField::Hour, state.clock.hour.as_str());
        host.set_text(TextField::Minute, state.clock.minute.as_str());
        host.set_text(TextField::Date, if show_date { state.clock.weekday.as_str() } else { "" });

        state.clock.is_palette_mark()
    }

    fn apply_palette<H>(
        &mut self,
        host: &mut H,
        palette: ColorTriple,
    ) where
        H: WindowService,
    {
        let Some(state) = self.state.as_mut() else {
            return;
        };

        state.palette = palette;
        host.set_background(palette.background);
        for field in TextField::ALL {
            host.set_text_color(field, palette.secondary);
        }
        host.mark_dirty();
        debug!("Palette changed: {:?}", palette);
    }
}

impl AppMessageHandler for FaceController {}

/// Palette seed from a wall-clock time.
fn seed_from(now: &NaiveDateTime) -> u64 { now.and_utc().timestamp() as u64 }
