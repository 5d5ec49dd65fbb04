//! Centralized constants for mjolnir_ui
//!
//! Lengths are in inches and get converted to pixels through `Dpi`.

// =============================================================================
// Surface
// =============================================================================

/// Resolution assumed until the host reports the real one
pub const DEFAULT_DPI: f32 = 96.0;

/// Largest resolution accepted from a host or config file
pub const MAX_DPI: f32 = 4800.0;

// =============================================================================
// Scrollbar geometry
// =============================================================================

/// Height of each extremity button, and of the optional vent
pub const EXTREMITY_INCHES: f32 = 0.1875;

/// Smallest thumb the track will shrink to
pub const MIN_THUMB_INCHES: f32 = 0.15;

/// Minimum region width before the thumb narrows to a pill and shows its grip
pub const GRIP_MIN_WIDTH_INCHES: f32 = 0.1875;

/// Pill width as `dpi / PILL_DIVISOR` once the thumb is wide enough
pub const PILL_DIVISOR: f32 = 7.0;

/// Grip mark size as `dpi / GRIP_DIVISOR`
pub const GRIP_DIVISOR: f32 = 18.0;

/// Extremity dot size as `dpi / DOT_DIVISOR`; also the grip height threshold
pub const DOT_DIVISOR: f32 = 16.0;

/// Vent mark size as `dpi / VENT_DIVISOR`
pub const VENT_DIVISOR: f32 = 9.0;

// =============================================================================
// Auto-repeat
// =============================================================================

/// Pause before the first repeat of a held track click
pub const REPEAT_FIRST_DELAY_MS: u64 = 400;

/// Steady-state repeat interval once the first repeat has fired
pub const REPEAT_INTERVAL_MS: u64 = 60;

// =============================================================================
// Initial model
// =============================================================================

/// Exposure fraction before the host's first refresh
pub const INITIAL_EXPOSURE: f32 = 0.1;

/// Progress fraction before the host's first refresh
pub const INITIAL_PROGRESS: f32 = 0.0;
