#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::digital::{ErrorKind, ErrorType, InputPin};
use smart_leds::{RGB8, SmartLedsWrite};
use strip_controller::{BufferedStrip, OutputDriver, PersistentStorage, Rgb};

/// Output driver keeping every pushed frame
#[derive(Debug, Default)]
pub struct RecordingOutput {
    pub frames: Vec<Vec<Rgb>>,
}

impl RecordingOutput {
    pub fn last(&self) -> &[Rgb] {
        self.frames.last().map(Vec::as_slice).unwrap_or(&[])
    }
}

impl OutputDriver for RecordingOutput {
    fn write(&mut self, colors: &[Rgb]) {
        self.frames.push(colors.to_vec());
    }
}

pub type TestStrip<const N: usize> = BufferedStrip<RecordingOutput, N>;

pub fn test_strip<const N: usize>() -> TestStrip<N> {
    BufferedStrip::new(RecordingOutput::default())
}

/// Byte storage shared with the test, counting writes per cell
#[derive(Debug, Clone)]
pub struct SharedStorage {
    cells: Rc<RefCell<Vec<u8>>>,
    writes: Rc<RefCell<Vec<u32>>>,
}

impl SharedStorage {
    pub fn new(image: &[u8]) -> Self {
        Self {
            cells: Rc::new(RefCell::new(image.to_vec())),
            writes: Rc::new(RefCell::new(vec![0; image.len()])),
        }
    }

    pub fn image(&self) -> Vec<u8> {
        self.cells.borrow().clone()
    }

    pub fn writes(&self) -> Vec<u32> {
        self.writes.borrow().clone()
    }

    pub fn total_writes(&self) -> u32 {
        self.writes.borrow().iter().sum()
    }

    /// Change a cell behind the controller's back
    pub fn poke(&self, address: usize, value: u8) {
        self.cells.borrow_mut()[address] = value;
    }
}

impl PersistentStorage for SharedStorage {
    fn capacity(&self) -> usize {
        self.cells.borrow().len()
    }

    fn read_byte(&mut self, address: usize) -> u8 {
        self.cells.borrow()[address]
    }

    fn write_byte(&mut self, address: usize, value: u8) {
        self.cells.borrow_mut()[address] = value;
        self.writes.borrow_mut()[address] += 1;
    }
}

/// Input pin whose level is driven by the test through a cloned handle
#[derive(Debug, Clone)]
pub struct MockPin {
    high: Rc<Cell<bool>>,
}

impl MockPin {
    pub fn new(high: bool) -> Self {
        Self {
            high: Rc::new(Cell::new(high)),
        }
    }

    pub fn set_high(&self) {
        self.high.set(true);
    }

    pub fn set_low(&self) {
        self.high.set(false);
    }
}

impl ErrorType for MockPin {
    type Error = Infallible;
}

impl InputPin for MockPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.high.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.high.get())
    }
}

#[derive(Debug)]
pub struct PinFault;

impl embedded_hal::digital::Error for PinFault {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Input pin whose reads always fail
#[derive(Debug)]
pub struct FailingPin;

impl ErrorType for FailingPin {
    type Error = PinFault;
}

impl InputPin for FailingPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Err(PinFault)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Err(PinFault)
    }
}

/// `smart-leds` writer that records frames, or rejects them when `fail` is set
#[derive(Debug, Default)]
pub struct FakeWriter {
    pub frames: Vec<Vec<RGB8>>,
    pub fail: bool,
}

impl SmartLedsWrite for FakeWriter {
    type Error = ();
    type Color = RGB8;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        if self.fail {
            return Err(());
        }
        self.frames.push(iterator.into_iter().map(Into::into).collect());
        Ok(())
    }
}
