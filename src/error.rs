//! Boot-time configuration errors
//!
//! Nothing in the running loop returns an error; these only come out of
//! [`Controller::new`](crate::Controller::new) and table construction.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    #[error("persistent storage has zero capacity")]
    ZeroCapacity,
    #[error("pattern table is empty")]
    EmptyPatternTable,
    #[error("pattern table is full")]
    PatternTableFull,
    #[error("default pattern {pattern} is outside 1..={total}")]
    InvalidDefaultPattern { pattern: u8, total: u8 },
}

pub type Result<T> = core::result::Result<T, Error>;
