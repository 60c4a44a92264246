//! Logging macros for ergonomic log message formatting.
//!
//! These macros accept `format!` syntax and forward the finished message to
//! a [`LogClient`](crate::LogClient). Use [`LogClient::submit`] for
//! positional `{0}` templates instead.
//!
//! # Examples
//!
//! ```
//! use easy_log::prelude::*;
//! use easy_log::info;
//!
//! let logger = Logger::new().unwrap();
//! let client = logger.client("http");
//!
//! info!(client, "Server started");
//!
//! let port = 8080;
//! info!(client, "Server listening on port {}", port);
//! ```

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use easy_log::prelude::*;
/// # let logger = Logger::new().unwrap();
/// # let client = logger.default_client();
/// use easy_log::log;
/// log!(client, Level::Info, "Simple message");
/// log!(client, Level::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($client:expr, $level:expr, $($arg:tt)+) => {
        $client.log($level, format!($($arg)+))
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($client:expr, $($arg:tt)+) => {
        $crate::log!($client, $crate::Level::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($client:expr, $($arg:tt)+) => {
        $crate::log!($client, $crate::Level::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use easy_log::prelude::*;
/// # let logger = Logger::new().unwrap();
/// # let client = logger.default_client();
/// use easy_log::warn;
/// warn!(client, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($client:expr, $($arg:tt)+) => {
        $crate::log!($client, $crate::Level::Warning, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($client:expr, $($arg:tt)+) => {
        $crate::log!($client, $crate::Level::Error, $($arg)+)
    };
}

/// Log a critical-level message.
#[macro_export]
macro_rules! critical {
    ($client:expr, $($arg:tt)+) => {
        $crate::log!($client, $crate::Level::Critical, $($arg)+)
    };
}
