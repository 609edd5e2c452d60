//! Hue-wheel renderers

use crate::color::{BLACK, wheel};
use crate::pattern::{HueChasePhase, HuePhase};
use crate::strip::PixelStrip;

/// Wheel position of `value`, taken modulo 256
#[allow(clippy::cast_possible_truncation)]
const fn wheel_byte(value: usize) -> u8 {
    (value & 0xFF) as u8
}

/// One wheel step per pixel
pub(super) fn rainbow<S: PixelStrip + ?Sized>(strip: &mut S, phase: &mut HuePhase) {
    let cycle = usize::from(phase.cycle);
    for index in 0..strip.pixel_count() {
        strip.set_pixel(index, wheel(wheel_byte(index + cycle)));
    }
    strip.show();
    phase.advance();
}

/// The whole wheel spread across the strip
pub(super) fn rainbow_full<S: PixelStrip + ?Sized>(strip: &mut S, phase: &mut HuePhase) {
    let count = strip.pixel_count();
    let cycle = usize::from(phase.cycle);
    for index in 0..count {
        strip.set_pixel(index, wheel(wheel_byte(index * 256 / count + cycle)));
    }
    strip.show();
    phase.advance();
}

/// Wheel colors on every third pixel
///
/// The lit pixels are blanked again in the buffer right after the push, so
/// each frame shows only the current lattice.
#[allow(clippy::cast_possible_truncation)]
pub(super) fn rainbow_chase<S: PixelStrip + ?Sized>(strip: &mut S, phase: &mut HueChasePhase) {
    let count = strip.pixel_count();
    let cycle = usize::from(phase.hue.cycle);

    for index in (0..count).step_by(3) {
        // 255, not 256: the wheel never quite closes on this pattern
        let hue = ((index + cycle) % 255) as u8;
        strip.set_pixel(index + phase.queue, wheel(hue));
    }
    strip.show();
    for index in (0..count).step_by(3) {
        strip.set_pixel(index + phase.queue, BLACK);
    }

    phase.queue += 1;
    if phase.queue >= 3 {
        phase.queue = 0;
    }
    phase.hue.advance();
}
