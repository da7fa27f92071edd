//! Logging macros with verbosity level control.
//!
//! Events are emitted through `tracing`; the verbosity gate keeps a run silent
//! unless the caller opts in, even when a subscriber is installed.
//! - 0: SILENT
//! - 1: CHANGES (project cost, chosen critical path)
//! - 2: CHECKS (graph shape, cycle detection outcome)
//! - 3: DEBUG (per-activity timings, each path hop)

#[doc(hidden)]
pub use tracing;

/// Verbosity level constants.
pub const VERBOSITY_SILENT: u8 = 0;
pub const VERBOSITY_CHANGES: u8 = 1;
pub const VERBOSITY_CHECKS: u8 = 2;
pub const VERBOSITY_DEBUG: u8 = 3;

/// Log at CHANGES level (verbosity >= 1) as an `info` event.
#[macro_export]
macro_rules! log_changes {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_CHANGES {
            $crate::logging::tracing::info!($($arg)*);
        }
    };
}

/// Log at CHECKS level (verbosity >= 2) as a `debug` event.
#[macro_export]
macro_rules! log_checks {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_CHECKS {
            $crate::logging::tracing::debug!($($arg)*);
        }
    };
}

/// Log at DEBUG level (verbosity >= 3) as a `trace` event.
#[macro_export]
macro_rules! log_debug {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_DEBUG {
            $crate::logging::tracing::trace!($($arg)*);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_constants() {
        assert_eq!(VERBOSITY_SILENT, 0);
        assert_eq!(VERBOSITY_CHANGES, 1);
        assert_eq!(VERBOSITY_CHECKS, 2);
        assert_eq!(VERBOSITY_DEBUG, 3);
    }

    #[test]
    fn test_log_macros_compile() {
        let verbosity = VERBOSITY_DEBUG;
        log_changes!(verbosity, "test {}", 1);
        log_checks!(verbosity, nodes = 2, "test");
        log_debug!(verbosity, "test {}", 3);
    }
}
