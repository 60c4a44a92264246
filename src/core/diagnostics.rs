//! Reporting of failures that have no caller to return to
//!
//! Automatic flushes run on the background worker, so writer failures there
//! are handed to an optional callback and kept in a last-error slot.

use super::error::LoggerError;
use parking_lot::Mutex;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

/// Callback type for background failure notifications
pub type ErrorCallback = Arc<dyn Fn(&LoggerError) + Send + Sync>;

#[derive(Default)]
pub struct Diagnostics {
    on_error: Option<ErrorCallback>,
    last_error: Mutex<Option<LoggerError>>,
}

impl Diagnostics {
    pub fn new(on_error: Option<ErrorCallback>) -> Self {
        Self {
            on_error,
            last_error: Mutex::new(None),
        }
    }

    /// Report a background failure
    ///
    /// Without a callback the failure is written to stderr, as it is when the
    /// callback panics. Either way it replaces the previous contents of the
    /// last-error slot.
    pub fn report(&self, error: LoggerError) {
        match self.on_error {
            Some(ref callback) => {
                if panic::catch_unwind(AssertUnwindSafe(|| callback(&error))).is_err() {
                    eprintln!(
                        "[LOGGER ERROR] Error callback panicked while reporting: {}",
                        error
                    );
                }
            }
            None => eprintln!("[LOGGER ERROR] Background flush failed: {}", error),
        }
        *self.last_error.lock() = Some(error);
    }

    pub fn take_last_error(&self) -> Option<LoggerError> {
        self.last_error.lock().take()
    }

    pub fn has_error(&self) -> bool {
        self.last_error.lock().is_some()
    }
}

impl fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Diagnostics")
            .field("on_error", &self.on_error.is_some())
            .field("has_error", &self.has_error())
            .finish()
    }
}
