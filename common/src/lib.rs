//! Core of the robot face watchface.
//!
//! This crate contains the platform-agnostic logic shared between the desktop
//! simulator and any device host:
//!
//! - [`colors`]: RGB888 color constants and the quantized channel levels
//! - [`palette`]: Random palette generation with the secondary contrast rule
//! - [`config`]: Device profile, screen geometry presets and face settings
//! - [`geometry`]: Integer layout of eyes, nose, mouth and text frames
//! - [`render`]: Drawing the face shapes onto any `DrawTarget`
//! - [`styles`]: Fonts and text styles per color capability
//! - [`clock`]: Hour, minute and weekday strings in fixed-size buffers
//! - [`host`]: Interfaces of the window and clock services the face consumes
//! - [`messaging`]: App-message callbacks (inert, logging only)
//! - [`controller`]: The face lifecycle that ties everything together
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test -p robot-face-common
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), while the library itself is
//! `no_std` so it can be linked into device firmware.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod clock;
pub mod colors;
pub mod config;
pub mod controller;
pub mod geometry;
pub mod host;
pub mod messaging;
pub mod palette;
pub mod render;
pub mod styles;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used items
pub use clock::ClockStrings;
pub use config::{ColorCapability, DeviceProfile, DisplayShape, FaceSettings, ScreenGeometry};
pub use controller::{FaceController, FacePhase, TickOutcome};
pub use geometry::FaceLayout;
pub use palette::ColorTriple;
