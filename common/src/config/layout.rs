//! Screen presets and shape constants.
//!
//! All values are in pixels and signed so layout arithmetic never needs casts.
//! The two presets differ only in screen size; the face itself has the same
//! proportions on both and is centered horizontally.

// =============================================================================
// Display Configuration
// =============================================================================

/// Rectangular display width (144x168).
pub const RECT_SCREEN_WIDTH: i32 = 144;

/// Rectangular display height.
pub const RECT_SCREEN_HEIGHT: i32 = 168;

/// Round display diameter (180x180).
pub const ROUND_SCREEN_SIZE: i32 = 180;

// =============================================================================
// Eyes
// =============================================================================

/// Outer radius of each eye.
pub const EYE_RADIUS: i32 = 28;

/// Width of the ring drawn around each eye.
pub const EYE_BORDER_SIZE: i32 = 4;

/// Vertical center of both eyes.
pub const EYES_LEVEL: i32 = 45;

/// Horizontal gap between the screen center and the edge of each eye.
pub const EYES_DISTANCE: i32 = 10;

// =============================================================================
// Mouth
// =============================================================================

/// Width of the mouth ring. Also used as the corner radius.
pub const MOUTH_BORDER_SIZE: i32 = 4;

/// Vertical center of the mouth.
pub const MOUTH_LEVEL: i32 = 135;

pub const MOUTH_HEIGHT: i32 = 37;

pub const MOUTH_WIDTH: i32 = 130;

// =============================================================================
// Nose
// =============================================================================

/// Y coordinate of the nose base.
pub const NOSE_LEVEL: i32 = 100;

/// Width of the nose base.
pub const NOSE_SIZE: i32 = 30;

/// Inset of the inner nose triangle and stroke width on color displays.
pub const NOSE_BORDER_SIZE: i32 = 3;

// =============================================================================
// Text Frames
// =============================================================================

/// Height of the hour/minute text boxes.
pub const TIME_FONT_SIZE: i32 = 30;

/// Moves the hour/minute boxes up so the digits sit visually centered.
pub const TIME_HEIGHT_ADJUSTMENT: i32 = 3;

/// Top of the date band (inside the mouth).
pub const DATE_TOP: i32 = 118;

pub const DATE_HEIGHT: i32 = 50;

// =============================================================================
// Screen Geometry
// =============================================================================

/// Fixed numeric description of the face for one screen size.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ScreenGeometry {
    pub width: i32,
    pub height: i32,
    pub eye_radius: i32,
    pub eye_border: i32,
    pub eyes_level: i32,
    pub eyes_distance: i32,
    pub mouth_border: i32,
    pub mouth_level: i32,
    pub mouth_height: i32,
    pub mouth_width: i32,
    pub nose_level: i32,
    pub nose_size: i32,
    pub nose_border: i32,
    pub time_font_size: i32,
    pub time_height_adjustment: i32,
    pub date_top: i32,
    pub date_height: i32,
}

impl ScreenGeometry {
    /// Face constants on a screen of the given size.
    pub const fn with_screen(
        width: i32,
        height: i32,
    ) -> Self {
        Self {
            width,
            height,
            eye_radius: EYE_RADIUS,
            eye_border: EYE_BORDER_SIZE,
            eyes_level: EYES_LEVEL,
            eyes_distance: EYES_DISTANCE,
            mouth_border: MOUTH_BORDER_SIZE,
            mouth_level: MOUTH_LEVEL,
            mouth_height: MOUTH_HEIGHT,
            mouth_width: MOUTH_WIDTH,
            nose_level: NOSE_LEVEL,
            nose_size: NOSE_SIZE,
            nose_border: NOSE_BORDER_SIZE,
            time_font_size: TIME_FONT_SIZE,
            time_height_adjustment: TIME_HEIGHT_ADJUSTMENT,
            date_top: DATE_TOP,
            date_height: DATE_HEIGHT,
        }
    }
}

/// 144x168 rectangular preset.
pub const RECTANGULAR: ScreenGeometry = ScreenGeometry::with_screen(RECT_SCREEN_WIDTH, RECT_SCREEN_HEIGHT);

/// 180x180 round preset.
pub const ROUND: ScreenGeometry = ScreenGeometry::with_screen(ROUND_SCREEN_SIZE, ROUND_SCREEN_SIZE);

// Compile-time validation: the face must fit on the smaller preset
const _: () = assert!(2 * (2 * EYE_RADIUS + EYES_DISTANCE) <= RECT_SCREEN_WIDTH);
const _: () = assert!(MOUTH_WIDTH <= RECT_SCREEN_WIDTH);
const _: () = assert!(MOUTH_LEVEL + MOUTH_HEIGHT / 2 < RECT_SCREEN_HEIGHT);
const _: () = assert!(EYE_BORDER_SIZE < EYE_RADIUS);
const _: () = assert!(2 * MOUTH_BORDER_SIZE < MOUTH_HEIGHT);
// The inner nose must still have a positive base
const _: () = assert!(4 * NOSE_BORDER_SIZE < NOSE_SIZE);
