use crate::color::{BLACK, Rgb};
use crate::pattern::FlipPhase;
use crate::strip::PixelStrip;

pub(super) fn off<S: PixelStrip + ?Sized>(strip: &mut S) {
    strip.clear();
    strip.show();
}

pub(super) fn solid<S: PixelStrip + ?Sized>(strip: &mut S, color: Rgb) {
    strip.fill(color);
    strip.show();
}

/// Lit on the first call, dark on the next, and so on
pub(super) fn flashing<S: PixelStrip + ?Sized>(strip: &mut S, phase: &mut FlipPhase, color: Rgb) {
    let lit = phase.advance();
    strip.fill(if lit { color } else { BLACK });
    strip.show();
}
