//! Wear-leveled storage for the locked pattern.
//!
//! Exactly one cell in the storage holds a nonzero byte: the locked pattern.
//! Every commit moves it one cell forward (wrapping at the end), zeroing the
//! old cell first. Over `capacity` commits every cell is written the same
//! number of times, so cell endurance is multiplied by the capacity.
//!
//! There is no checksum. A stray nonzero byte within `1..=total` is taken as
//! a valid pattern; bytes above `total` are skipped during the boot scan.

use crate::error::{Error, Result};
use crate::pattern::PatternId;
use crate::storage::PersistentStorage;

/// Pattern found (or written) by the boot scan, and the cell holding it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StoredPattern {
    pub pattern: PatternId,
    pub address: usize,
}

/// Persistent Pattern Store over a raw byte storage
pub struct PatternStore<S: PersistentStorage> {
    storage: S,
    total: u8,
    default_pattern: PatternId,
}

impl<S: PersistentStorage> PatternStore<S> {
    /// Wrap `storage` for a table of `total` patterns
    ///
    /// Fails if the storage has no cells, or `default_pattern` is not within
    /// `1..=total`.
    pub fn new(storage: S, total: u8, default_pattern: PatternId) -> Result<Self> {
        if storage.capacity() == 0 {
            return Err(Error::ZeroCapacity);
        }
        if !default_pattern.is_valid(total) {
            return Err(Error::InvalidDefaultPattern {
                pattern: default_pattern.get(),
                total,
            });
        }
        Ok(Self {
            storage,
            total,
            default_pattern,
        })
    }

    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Scan from address 0 for the first byte in `1..=total`
    ///
    /// Zero and out-of-range bytes are skipped. If no cell qualifies, the
    /// default pattern is written to address 0 and adopted. Runs once at boot.
    pub fn load_initial(&mut self) -> StoredPattern {
        for address in 0..self.storage.capacity() {
            let pattern = PatternId::from_raw(self.storage.read_byte(address));
            if pattern.is_valid(self.total) {
                info!("locked pattern {} found at {}", pattern.get(), address);
                return StoredPattern { pattern, address };
            }
        }

        warn!(
            "no locked pattern in {} cells, storing default {}",
            self.storage.capacity(),
            self.default_pattern.get()
        );
        self.storage.write_byte(0, self.default_pattern.get());
        StoredPattern {
            pattern: self.default_pattern,
            address: 0,
        }
    }

    /// Lock `pattern` in the cell after `address` and return that cell
    ///
    /// The old cell is zeroed before the new one is written. Losing power
    /// in between leaves no valid cell, and the next boot falls back to the
    /// default pattern.
    pub fn commit(&mut self, pattern: PatternId, address: usize) -> usize {
        let next = self.next_address(address);
        self.storage.write_byte(address, 0);
        self.storage.write_byte(next, pattern.get());
        info!("locked pattern {} moved {} -> {}", pattern.get(), address, next);
        next
    }

    /// Raw byte at `address`, as a pattern identifier (may be invalid)
    pub fn read(&mut self, address: usize) -> PatternId {
        PatternId::from_raw(self.storage.read_byte(address))
    }

    /// Get a reference to the underlying storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Get a mutable reference to the underlying storage.
    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    fn next_address(&self, address: usize) -> usize {
        let next = address + 1;
        if next >= self.storage.capacity() {
            0
        } else {
            next
        }
    }
}
