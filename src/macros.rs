//! Logging macros for ergonomic log message formatting.
//!
//! These macros format their arguments like `format!` into a
//! [`MessageBuilder`](crate::MessageBuilder), which submits the message when
//! the statement ends. Delivery failures are reported on stderr and counted
//! in the logger's metrics; use the builder's `finish` directly when the
//! caller needs the error.
//!
//! # Examples
//!
//! ```
//! use chainlog::prelude::*;
//! use chainlog::{error, info};
//!
//! let logger = Logger::new();
//!
//! info!(logger, "Server started");
//!
//! let disk_id = 3;
//! error!(logger, "disk {} failed", disk_id);
//! ```

/// Log a message at the given severity.
///
/// # Examples
///
/// ```
/// # use chainlog::prelude::*;
/// # let logger = Logger::new();
/// use chainlog::log;
/// log!(logger, Severity::Info, "Simple message");
/// log!(logger, Severity::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $severity:expr, $($arg:tt)+) => {{
        $logger.message($severity).display(&format_args!($($arg)+));
    }};
}

/// Log an emergency message.
#[macro_export]
macro_rules! emergency {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Emergency, $($arg)+)
    };
}

/// Log an alert message.
#[macro_export]
macro_rules! alert {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Alert, $($arg)+)
    };
}

/// Log a critical message.
///
/// # Examples
///
/// ```
/// # use chainlog::prelude::*;
/// # let logger = Logger::new();
/// use chainlog::critical;
/// critical!(logger, "flash write failed at block {}", 1024);
/// ```
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Critical, $($arg)+)
    };
}

/// Log an error message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Error, $($arg)+)
    };
}

/// Log a warning message.
///
/// # Examples
///
/// ```
/// # use chainlog::prelude::*;
/// # let logger = Logger::new();
/// use chainlog::warning;
/// warning!(logger, "Low disk space");
/// warning!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Warning, $($arg)+)
    };
}

/// Log a notice message.
#[macro_export]
macro_rules! notice {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Notice, $($arg)+)
    };
}

/// Log an info message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Info, $($arg)+)
    };
}

/// Log a debug message.
///
/// # Examples
///
/// ```
/// # use chainlog::prelude::*;
/// # let logger = Logger::new();
/// use chainlog::debug;
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Debug, $($arg)+)
    };
}
