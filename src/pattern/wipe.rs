//! Color wipe
//!
//! The cursor moves one pixel per call and paints it with the color, or with
//! black on every other pass. The cursor is stepped before painting, so a
//! fresh wipe starts at pixel 1 and pixel 0 is painted when the pass wraps.

use crate::color::{BLACK, Rgb};
use crate::pattern::WipePhase;
use crate::strip::PixelStrip;

pub(super) fn wipe<S: PixelStrip + ?Sized>(strip: &mut S, phase: &mut WipePhase, color: Rgb) {
    phase.cursor += 1;
    if phase.cursor >= strip.pixel_count() {
        phase.cursor = 0;
        phase.blank = !phase.blank;
    }

    strip.set_pixel(phase.cursor, if phase.blank { BLACK } else { color });
    strip.show();
}
