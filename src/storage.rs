//! Byte-addressable persistent storage primitive
//!
//! Models an EEPROM-like device: single-byte reads and writes, no erase
//! blocks, no atomicity beyond one byte. Implement [`PersistentStorage`]
//! for the board's EEPROM or emulated-EEPROM driver.

/// Raw persistent byte storage
pub trait PersistentStorage {
    /// Number of addressable bytes
    fn capacity(&self) -> usize;

    /// Read the byte at `address`
    ///
    /// `address` is always below [`capacity`](Self::capacity).
    fn read_byte(&mut self, address: usize) -> u8;

    /// Write the byte at `address`
    ///
    /// `address` is always below [`capacity`](Self::capacity).
    fn write_byte(&mut self, address: usize, value: u8);
}

/// Volatile storage of `N` bytes
///
/// Useful on boards without EEPROM (the locked pattern then lasts until
/// reset) and for host-side simulation.
#[derive(Debug, Clone)]
pub struct RamStorage<const N: usize> {
    cells: [u8; N],
}

impl<const N: usize> RamStorage<N> {
    /// All cells erased (zero)
    pub const fn new() -> Self {
        Self { cells: [0; N] }
    }

    /// Start from an existing image
    pub const fn from_image(cells: [u8; N]) -> Self {
        Self { cells }
    }

    pub const fn image(&self) -> &[u8; N] {
        &self.cells
    }
}

impl<const N: usize> Default for RamStorage<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> PersistentStorage for RamStorage<N> {
    fn capacity(&self) -> usize {
        N
    }

    fn read_byte(&mut self, address: usize) -> u8 {
        self.cells.get(address).copied().unwrap_or(0)
    }

    fn write_byte(&mut self, address: usize, value: u8) {
        if let Some(cell) = self.cells.get_mut(address) {
            *cell = value;
        }
    }
}
