//! Two-color alternating layouts
//!
//! Both renderers swap which color leads on every call. The first call leads
//! with the second color.

use crate::color::Rgb;
use crate::pattern::FlipPhase;
use crate::strip::PixelStrip;

fn leading(phase: &mut FlipPhase, [first, second]: [Rgb; 2]) -> (Rgb, Rgb) {
    if phase.advance() {
        (second, first)
    } else {
        (first, second)
    }
}

pub(super) fn alternating_halves<S: PixelStrip + ?Sized>(
    strip: &mut S,
    phase: &mut FlipPhase,
    colors: [Rgb; 2],
) {
    let (lead, trail) = leading(phase, colors);
    let count = strip.pixel_count();
    let half = count / 2;

    for index in 0..count {
        strip.set_pixel(index, if index < half { lead } else { trail });
    }
    strip.show();
}

pub(super) fn alternating_bands<S: PixelStrip + ?Sized>(
    strip: &mut S,
    phase: &mut FlipPhase,
    colors: [Rgb; 2],
    width: u8,
) {
    let (lead, trail) = leading(phase, colors);
    let width = usize::from(width.max(1));

    for index in 0..strip.pixel_count() {
        let band = index / width;
        strip.set_pixel(index, if band % 2 == 0 { lead } else { trail });
    }
    strip.show();
}
