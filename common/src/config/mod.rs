//! Watchface configuration.
//!
//! - `layout`: Screen presets and the fixed shape constants of the face
//! - `profile`: Device capability descriptor selected at build time
//!
//! Runtime options that are not tied to the hardware live in [`FaceSettings`].

pub mod layout;
pub mod profile;

pub use layout::{RECTANGULAR, ROUND, ScreenGeometry};
pub use profile::{ColorCapability, DeviceProfile, DisplayShape};

/// User-facing face options.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FaceSettings {
    /// Show the weekday inside the mouth. When off the date widget stays
    /// allocated but displays nothing.
    pub show_date: bool,
}

impl FaceSettings {
    /// Settings used when the host supplies none.
    pub const DEFAULT: Self = Self { show_date: true };
}

impl Default for FaceSettings {
    fn default() -> Self { Self::DEFAULT }
}
