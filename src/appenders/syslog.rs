//! Syslog sink implementation (unix only)
//!
//! Uses the POSIX `openlog`/`syslog`/`closelog` API. POSIX keeps a single
//! connection per process, so only one `SyslogSink` should be alive at a
//! time; a second one overrides the program name of the first.
//!
//! The most recently created sink owns the connection. Dropping a sink that
//! has been superseded leaves the connection alone, so replacing a chain
//! (new sink opened, then old sink dropped) keeps the new program name.
//! A superseded sink still writes, under the newer sink's program name, and
//! is dropped without an end marker.

use crate::core::{LoggerError, Result, Severity, Sink};
use parking_lot::Mutex;
use std::ffi::CString;
use std::os::raw::c_char;
use std::sync::atomic::{AtomicU64, Ordering};

const FORMAT: &[u8] = b"%s\0";

/// Generation of the sink that last called `openlog`; 0 when closed.
static CONNECTION: Mutex<u64> = parking_lot::const_mutex(0);
static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

/// Sends each message to the local syslog daemon, with the syslog priority
/// taken from the message severity.
pub struct SyslogSink {
    // openlog keeps this pointer until closelog; it must outlive the connection.
    ident: CString,
    generation: u64,
}

impl SyslogSink {
    /// Register `program` with syslog (facility `LOG_USER`) and log a
    /// start marker.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::InvalidConfiguration`] if the program name
    /// contains a NUL byte.
    pub fn new(program: &str) -> Result<Self> {
        let ident = CString::new(program)
            .map_err(|_| LoggerError::config("SyslogSink", "program name contains a NUL byte"))?;

        let generation = NEXT_GENERATION.fetch_add(1, Ordering::Relaxed);
        let mut connection = CONNECTION.lock();
        // SAFETY: ident is owned by the returned sink. It stays registered
        // until this sink closes the connection in Drop or a newer sink
        // calls openlog with its own name.
        unsafe {
            libc::openlog(ident.as_ptr(), libc::LOG_CONS | libc::LOG_PID, libc::LOG_USER);
        }
        *connection = generation;

        let sink = Self { ident, generation };
        sink.send(libc::LOG_INFO, "started logging");
        Ok(sink)
    }

    /// Whether this sink still owns the process syslog connection.
    pub fn is_active(&self) -> bool {
        *CONNECTION.lock() == self.generation
    }

    pub fn program(&self) -> &str {
        self.ident.to_str().unwrap_or_default()
    }

    fn send(&self, priority: libc::c_int, text: &str) {
        let message = match CString::new(text) {
            Ok(message) => message,
            Err(_) => {
                let stripped: Vec<u8> = text.bytes().filter(|b| *b != 0).collect();
                // No NUL bytes remain after filtering.
                CString::new(stripped).unwrap_or_default()
            }
        };

        // SAFETY: both pointers are valid NUL-terminated strings, and the
        // message is passed through "%s" so it is never read as a format.
        unsafe {
            libc::syslog(priority, FORMAT.as_ptr() as *const c_char, message.as_ptr());
        }
    }
}

impl Sink for SyslogSink {
    fn write(&mut self, severity: Severity, text: &str) -> Result<()> {
        self.send(libc::c_int::from(severity.rank()), text);
        Ok(())
    }

    fn name(&self) -> &str {
        "syslog"
    }
}

impl Drop for SyslogSink {
    fn drop(&mut self) {
        let mut connection = CONNECTION.lock();
        if *connection != self.generation {
            return;
        }
        self.send(libc::LOG_INFO, "ended logging");
        // SAFETY: closelog takes no arguments and is always safe to call.
        unsafe {
            libc::closelog();
        }
        *connection = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Sinks share one process-wide connection.
    static SERIAL: Mutex<()> = parking_lot::const_mutex(());

    #[test]
    fn test_severity_ranks_match_syslog_priorities() {
        assert_eq!(libc::c_int::from(Severity::Emergency.rank()), libc::LOG_EMERG);
        assert_eq!(libc::c_int::from(Severity::Alert.rank()), libc::LOG_ALERT);
        assert_eq!(libc::c_int::from(Severity::Critical.rank()), libc::LOG_CRIT);
        assert_eq!(libc::c_int::from(Severity::Error.rank()), libc::LOG_ERR);
        assert_eq!(libc::c_int::from(Severity::Warning.rank()), libc::LOG_WARNING);
        assert_eq!(libc::c_int::from(Severity::Notice.rank()), libc::LOG_NOTICE);
        assert_eq!(libc::c_int::from(Severity::Info.rank()), libc::LOG_INFO);
        assert_eq!(libc::c_int::from(Severity::Debug.rank()), libc::LOG_DEBUG);
    }

    #[test]
    fn test_nul_in_program_name_rejected() {
        let result = SyslogSink::new("bad\0name");
        assert!(matches!(result, Err(LoggerError::InvalidConfiguration { .. })));
    }

    #[test]
    fn test_write_with_embedded_nul() {
        let _serial = SERIAL.lock();
        let mut sink = SyslogSink::new("chainlog-test").unwrap();
        assert_eq!(sink.program(), "chainlog-test");
        sink.write(Severity::Debug, "embedded\0nul").unwrap();
    }

    #[test]
    fn test_superseded_sink_does_not_close_newer_connection() {
        let _serial = SERIAL.lock();
        let old = SyslogSink::new("chainlog-old").unwrap();
        let new = SyslogSink::new("chainlog-new").unwrap();

        assert!(!old.is_active());
        assert!(new.is_active());

        drop(old);
        assert!(new.is_active());

        drop(new);
        assert_eq!(*CONNECTION.lock(), 0);
    }

    #[test]
    fn test_chain_replacement_keeps_new_connection() {
        use crate::core::{Logger, OutputChain};

        let _serial = SERIAL.lock();
        let logger = Logger::with_chain(OutputChain::new().link(
            SyslogSink::new("chainlog-first").unwrap(),
            Severity::Debug,
            true,
        ));

        let replacement = SyslogSink::new("chainlog-second").unwrap();
        let generation = replacement.generation;
        logger.set_chain(OutputChain::new().link(replacement, Severity::Debug, true));

        assert_eq!(*CONNECTION.lock(), generation);
        logger.log(Severity::Info, "after replacement").unwrap();
    }
}
