//! Robot face simulator for desktop platforms.
//!
//! Runs the watchface in an SDL2 window via `embedded-graphics-simulator`.
//! The simulator plays the part of the watch: it owns the window and the text
//! layers, delivers minute ticks from the local clock and forwards lifecycle
//! callbacks to the face controller.
//!
//! # Key bindings
//!
//! | Key | Action                                   |
//! |-----|------------------------------------------|
//! | H   | Toggle 12/24-hour time                   |
//! | N   | Skip ahead one minute                    |
//! | M   | Simulate a dropped inbound message       |
//! | Q   | Quit                                     |
//!
//! Build with `--features round` or `--features monochrome` to switch the
//! simulated hardware. `RUST_LOG=debug` shows every tick.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]

mod host;
mod timing;

use std::thread;
use std::time::Instant;

use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorEvent, Window};
use log::info;
use robot_face_common::host::ClockService;
use robot_face_common::messaging::{AppMessageHandler, MessageError};
use robot_face_common::{DeviceProfile, FaceController, FaceSettings, TickOutcome};

use crate::host::SimHost;
use crate::timing::{FRAME_TIME, MinuteTicker};

/// Pixel scale factor for the simulator window.
const WINDOW_SCALE: u32 = 3;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let profile = DeviceProfile::BUILD;
    let mut face = FaceController::new(profile, FaceSettings::default());
    let screen = face.layout().screen().size;

    let mut host = SimHost::new(screen, profile.color);
    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new("Robot Face", &output_settings);

    info!("Simulating {:?} ({}x{})", profile, screen.width, screen.height);

    face.on_load(&mut host);
    let mut ticker = MinuteTicker::starting_at(&host.now());

    'running: loop {
        let frame_start = Instant::now();

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => break 'running,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::Q => break 'running,
                        Keycode::H => {
                            host.toggle_24h();
                            info!("Clock style: {}", if host.use_24h() { "24h" } else { "12h" });
                            face.refresh(&mut host);
                        }
                        Keycode::N => host.skip_minute(),
                        Keycode::M => face.inbox_dropped(MessageError::BufferOverflow),
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        let now = host.now();
        if ticker.poll(&now) && face.on_tick(&mut host, now) == TickOutcome::PaletteChanged {
            info!("New palette at {}", now.format("%H:%M"));
        }

        if host.compose(&mut face) {
            window.update(host.display());
        }

        let elapsed = frame_start.elapsed();
        if let Some(remaining) = FRAME_TIME.checked_sub(elapsed) {
            thread::sleep(remaining);
        }
    }

    face.on_unload(&mut host);
}
