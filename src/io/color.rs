//! Color values for map styling.

use std::fmt;

use serde::{Serialize, Serializer};

/// Simple RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self { Self { r, g, b } }
}

impl fmt::Display for Rgb {
    /// Format as CSS hex: #rrggbb
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Sequential blue ramp for a normalized value t in [0.0, 1.0].
pub(crate) fn sequential_color(t: f64) -> Rgb {
    // Handle NaN / infinities: fall back to neutral gray.
    if !t.is_finite() { return Rgb::new(150, 150, 150) }

    let x = t.clamp(0.0, 1.0);

    // (lower, upper, color), ranges are [lower, upper) except the last which includes 1.0.
    const BREAKS: &[(f64, f64, Rgb)] = &[
        (0.0,   1.0 / 7.0, Rgb::new(239, 243, 255)),
        (1.0 / 7.0, 2.0 / 7.0, Rgb::new(198, 219, 239)),
        (2.0 / 7.0, 3.0 / 7.0, Rgb::new(158, 202, 225)),
        (3.0 / 7.0, 4.0 / 7.0, Rgb::new(107, 174, 214)),
        (4.0 / 7.0, 5.0 / 7.0, Rgb::new( 66, 146, 198)),
        (5.0 / 7.0, 6.0 / 7.0, Rgb::new( 33, 113, 181)),
        (6.0 / 7.0, 1.0,       Rgb::new(  8,  69, 148)),
    ];

    for &(lo, hi, color) in BREAKS {
        if x >= lo && (x < hi || (hi == 1.0 && x <= hi)) { return color }
    }

    Rgb::new(150, 150, 150)
}
