use std::fmt;

/// Unwraps a `Result` read from another process,
/// logging the error as a warning and evaluating `$never` on failure.
///
/// ```ignore
/// let here = try_log!(source.position(), expect "Cannot read vehicle position" or return Advisory::Unavailable);
/// ```
#[macro_export]
macro_rules! try_log {
    ($expr:expr, expect $context:literal or $never:expr) => {
        match $crate::TryLog::ok_or_warn($expr, $context) {
            Some(value) => value,
            None => $never,
        }
    };
}

pub use try_log;

/// Inputs from other processes are routinely unavailable for a few cycles,
/// so their errors are warnings rather than failures.
pub trait TryLog<T> {
    /// Returns the value, or logs the error after `context` and returns `None`.
    fn ok_or_warn(self, context: &str) -> Option<T>;
}

impl<T, E: fmt::Display> TryLog<T> for Result<T, E> {
    fn ok_or_warn(self, context: &str) -> Option<T> {
        self.inspect_err(|err| bevy::log::warn!("{context}: {err}")).ok()
    }
}
