//! Internal logging macros.
//!
//! The backend is picked at compile time: `defmt`, then `esp32-log`, then the
//! `log` facade. Without any of them the macros only type-check their
//! arguments. Format strings must stick to plain `{}` placeholders so every
//! backend accepts them.

#[cfg(feature = "defmt")]
macro_rules! log_at {
    (trace, $($arg:tt)*) => { defmt::trace!($($arg)*) };
    (debug, $($arg:tt)*) => { defmt::debug!($($arg)*) };
    (info, $($arg:tt)*) => { defmt::info!($($arg)*) };
    (warn, $($arg:tt)*) => { defmt::warn!($($arg)*) };
}

#[cfg(all(not(feature = "defmt"), feature = "esp32-log"))]
macro_rules! log_at {
    ($level:ident, $($arg:tt)*) => {
        esp_println::println!(
            "[{}] {}",
            stringify!($level),
            format_args!($($arg)*)
        )
    };
}

#[cfg(all(not(feature = "defmt"), not(feature = "esp32-log"), feature = "log"))]
macro_rules! log_at {
    ($level:ident, $($arg:tt)*) => { log::$level!($($arg)*) };
}

#[cfg(all(not(feature = "defmt"), not(feature = "esp32-log"), not(feature = "log")))]
macro_rules! log_at {
    ($level:ident, $($arg:tt)*) => {{
        let _ = format_args!($($arg)*);
    }};
}

macro_rules! trace {
    ($($arg:tt)*) => { log_at!(trace, $($arg)*) };
}

macro_rules! debug {
    ($($arg:tt)*) => { log_at!(debug, $($arg)*) };
}

macro_rules! info {
    ($($arg:tt)*) => { log_at!(info, $($arg)*) };
}

macro_rules! warn {
    ($($arg:tt)*) => { log_at!(warn, $($arg)*) };
}
