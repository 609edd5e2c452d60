//! Pixel strip abstraction
//!
//! Renderers paint through [`PixelStrip`]: they set individual pixels in a
//! buffer and push the whole buffer once per frame. [`BufferedStrip`] is the
//! stock implementation, owning a fixed-size frame buffer and forwarding
//! finished frames to an [`OutputDriver`].

use smart_leds::{RGB8, SmartLedsWrite};

use crate::OutputDriver;
use crate::color::{BLACK, Rgb};
use crate::math8::scale8;

/// Addressable pixel strip as seen by the renderers
pub trait PixelStrip {
    /// Number of pixels on the strip
    fn pixel_count(&self) -> usize;

    /// Set one pixel in the buffer. Out-of-range indices are ignored.
    fn set_pixel(&mut self, index: usize, color: Rgb);

    /// Set every pixel in the buffer to black
    fn clear(&mut self);

    /// Push the buffer to the hardware
    fn show(&mut self);

    /// Set global brightness (0-255) applied when pushing
    fn set_brightness(&mut self, level: u8);

    /// Set every pixel in the buffer to one color
    fn fill(&mut self, color: Rgb) {
        for index in 0..self.pixel_count() {
            self.set_pixel(index, color);
        }
    }
}

/// Strip backed by an in-memory frame buffer of `N` pixels
///
/// Brightness is applied to a scratch copy at [`show`](PixelStrip::show) time,
/// so the buffer keeps full-scale colors.
pub struct BufferedStrip<O: OutputDriver, const N: usize> {
    output: O,
    frame_buffer: [Rgb; N],
    scratch: [Rgb; N],
    brightness: u8,
}

impl<O: OutputDriver, const N: usize> BufferedStrip<O, N> {
    /// Create a new strip with all pixels off and full brightness
    pub const fn new(output: O) -> Self {
        Self {
            output,
            frame_buffer: [BLACK; N],
            scratch: [BLACK; N],
            brightness: u8::MAX,
        }
    }

    /// Current buffer contents (not brightness-scaled)
    pub fn pixels(&self) -> &[Rgb] {
        &self.frame_buffer
    }

    /// Color of one pixel, if the index is on the strip
    pub fn pixel(&self, index: usize) -> Option<Rgb> {
        self.frame_buffer.get(index).copied()
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Get a reference to the output driver.
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Get a mutable reference to the output driver.
    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }
}

impl<O: OutputDriver, const N: usize> PixelStrip for BufferedStrip<O, N> {
    fn pixel_count(&self) -> usize {
        N
    }

    fn set_pixel(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.frame_buffer.get_mut(index) {
            *pixel = color;
        }
    }

    fn clear(&mut self) {
        self.frame_buffer = [BLACK; N];
    }

    fn show(&mut self) {
        if self.brightness == u8::MAX {
            self.output.write(&self.frame_buffer);
            return;
        }

        for (out, pixel) in self.scratch.iter_mut().zip(self.frame_buffer.iter()) {
            *out = Rgb {
                r: scale8(pixel.r, self.brightness),
                g: scale8(pixel.g, self.brightness),
                b: scale8(pixel.b, self.brightness),
            };
        }
        self.output.write(&self.scratch);
    }

    fn set_brightness(&mut self, level: u8) {
        self.brightness = level;
    }
}

/// [`OutputDriver`] for any `smart-leds` writer (WS2812 over RMT, SPI, PIO...)
///
/// Write failures are logged and the frame is dropped; the next frame
/// simply tries again.
pub struct SmartLedsOutput<W> {
    writer: W,
    failed_writes: u32,
}

impl<W> SmartLedsOutput<W>
where
    W: SmartLedsWrite<Color = RGB8>,
{
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            failed_writes: 0,
        }
    }

    /// Number of frames the writer rejected so far
    pub const fn failed_writes(&self) -> u32 {
        self.failed_writes
    }

    /// Release the wrapped writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> OutputDriver for SmartLedsOutput<W>
where
    W: SmartLedsWrite<Color = RGB8>,
{
    fn write(&mut self, colors: &[Rgb]) {
        if self.writer.write(colors.iter().copied()).is_err() {
            self.failed_writes = self.failed_writes.wrapping_add(1);
            warn!("strip write failed ({} so far)", self.failed_writes);
        }
    }
}
