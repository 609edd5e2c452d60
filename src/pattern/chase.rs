//! Theater-marquee chases
//!
//! All variants clear the strip, paint a lattice of pixels starting at a
//! rotating offset, push, then step the offset.

use crate::color::{BLACK, Rgb};
use crate::pattern::ChasePhase;
use crate::strip::PixelStrip;

/// Paint every `step`-th pixel from `start`
fn paint_lattice<S: PixelStrip + ?Sized>(strip: &mut S, start: usize, step: usize, color: Rgb) {
    for index in (start..strip.pixel_count()).step_by(step) {
        strip.set_pixel(index, color);
    }
}

pub(super) fn theater_chase<S: PixelStrip + ?Sized>(
    strip: &mut S,
    phase: &mut ChasePhase,
    color: Rgb,
) {
    strip.clear();
    paint_lattice(strip, phase.offset, 3, color);
    strip.show();
    phase.advance(3);
}

pub(super) fn tricolor_chase<S: PixelStrip + ?Sized>(
    strip: &mut S,
    phase: &mut ChasePhase,
    colors: [Rgb; 3],
) {
    strip.clear();
    for (slot, color) in colors.into_iter().enumerate() {
        paint_lattice(strip, phase.offset + slot, 3, color);
    }
    strip.show();
    phase.advance(3);
}

/// Three colors, then three dark pixels
pub(super) fn spaced_tricolor_chase<S: PixelStrip + ?Sized>(
    strip: &mut S,
    phase: &mut ChasePhase,
    colors: [Rgb; 3],
) {
    strip.clear();
    for (slot, color) in colors.into_iter().enumerate() {
        paint_lattice(strip, phase.offset + slot, 6, color);
    }
    strip.show();
    phase.advance(6);
}

/// Six slots of `width` pixels: color, gap, color, gap, color, gap
///
/// Pixels before the offset belong to the tail of the previous period, so
/// the pattern always covers the whole strip.
pub(super) fn banded_tricolor_chase<S: PixelStrip + ?Sized>(
    strip: &mut S,
    phase: &mut ChasePhase,
    [first, second, third]: [Rgb; 3],
    width: u8,
) {
    let width = usize::from(width.max(1));
    let period = width * 6;
    let slots = [first, BLACK, second, BLACK, third, BLACK];
    let offset = phase.offset % period;

    strip.clear();
    for index in 0..strip.pixel_count() {
        let position = (index + period - offset) % period;
        if let Some(&color) = slots.get(position / width) {
            strip.set_pixel(index, color);
        }
    }
    strip.show();
    phase.advance(period);
}
