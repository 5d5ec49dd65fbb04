//! Type-safe wrappers for numeric units
//!
//! Region sizes in the panels are expressed as fractions of an inch and
//! converted to whole pixels with the surface DPI.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DPI, MAX_DPI};

// =============================================================================
// Dpi
// =============================================================================

/// Dots per inch on both axes of the target surface.
///
/// # Example
///
/// ```
/// use mjolnir_ui::Dpi;
///
/// let dpi = Dpi::new(96.0, 96.0);
/// assert_eq!(dpi.scale_y(0.1875), 18);
/// ```
///
/// Deserialized values go through the same checks as `Dpi::new`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawDpi")]
pub struct Dpi {
    pub x: f32,
    pub y: f32,
}

/// Unchecked wire form of `Dpi`.
#[derive(Deserialize)]
struct RawDpi {
    x: f32,
    y: f32,
}

impl From<RawDpi> for Dpi {
    fn from(raw: RawDpi) -> Self {
        Self::new(raw.x, raw.y)
    }
}

impl Dpi {
    /// The classic 96x96 desktop resolution.
    pub const STANDARD: Self = Self {
        x: DEFAULT_DPI,
        y: DEFAULT_DPI,
    };

    /// Create a new DPI pair. Non-finite, non-positive or absurdly large
    /// values fall back to the standard resolution for that axis.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: sanitize(x),
            y: sanitize(y),
        }
    }

    /// Horizontal pixels for a length given in inches, truncated.
    #[inline]
    pub fn scale_x(self, inches: f32) -> i32 {
        (self.x * inches) as i32
    }

    /// Vertical pixels for a length given in inches, truncated.
    #[inline]
    pub fn scale_y(self, inches: f32) -> i32 {
        (self.y * inches) as i32
    }

    /// Horizontal pixels for `dpi / divisor`, truncated.
    #[inline]
    pub fn divide_x(self, divisor: f32) -> i32 {
        (self.x / divisor) as i32
    }

    /// Vertical pixels for `dpi / divisor`, truncated.
    #[inline]
    pub fn divide_y(self, divisor: f32) -> i32 {
        (self.y / divisor) as i32
    }
}

impl Default for Dpi {
    fn default() -> Self {
        Self::STANDARD
    }
}

fn sanitize(value: f32) -> f32 {
    if value.is_finite() && value > 0.0 && value <= MAX_DPI {
        value
    } else {
        log::warn!("Ignoring invalid DPI value {}, using {}", value, DEFAULT_DPI);
        DEFAULT_DPI
    }
}

// =============================================================================
// Fraction
// =============================================================================

/// Clamp a normalized scroll fraction into `[0, 1]`.
///
/// NaN maps to 0 so a misbehaving host can never poison the layout math.
pub fn clamp_fraction(value: f32) -> f32 {
    if value.is_nan() {
        log::warn!("Scroll fraction was NaN, clamping to 0");
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}
