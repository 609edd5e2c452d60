//! 256-step hue wheel
//!
//! Red → green → blue → red, three linear segments of 85 steps.
//! Full saturation and brightness only; no gamma.

use crate::color::Rgb;

const SEGMENT: u8 = 85;

/// Map a wheel position (0-255) to a color
///
/// Position 0 is red, 85 is green, 170 is blue.
pub const fn wheel(position: u8) -> Rgb {
    let pos = 255 - position;
    if pos < SEGMENT {
        return Rgb {
            r: 255 - pos * 3,
            g: 0,
            b: pos * 3,
        };
    }
    if pos < SEGMENT * 2 {
        let pos = pos - SEGMENT;
        return Rgb {
            r: 0,
            g: pos * 3,
            b: 255 - pos * 3,
        };
    }
    let pos = pos - SEGMENT * 2;
    Rgb {
        r: pos * 3,
        g: 255 - pos * 3,
        b: 0,
    }
}
