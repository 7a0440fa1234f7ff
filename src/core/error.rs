//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// A sink could not acquire its resource at construction
    #[error("Resource unavailable: {resource}: {source}")]
    ResourceUnavailable {
        resource: String,
        #[source]
        source: std::io::Error,
    },

    /// A sink failed while writing a delivered message
    #[error("Sink '{sink}' failed to write: {source}")]
    Write {
        sink: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LoggerError {
    /// Create a resource unavailable error for a sink that failed to open
    pub fn resource_unavailable(resource: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::ResourceUnavailable {
            resource: resource.into(),
            source,
        }
    }

    /// Create a write error for the named sink
    pub fn write(sink: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::Write {
            sink: sink.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::config("FileSink", "Invalid path");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory");
        let err = LoggerError::resource_unavailable("/missing/app.log", io_err);
        assert!(matches!(err, LoggerError::ResourceUnavailable { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::config("SyslogSink", "program name contains NUL");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for SyslogSink: program name contains NUL"
        );

        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = LoggerError::write("stdout", io_err);
        assert_eq!(err.to_string(), "Sink 'stdout' failed to write: pipe closed");
    }

    #[test]
    fn test_write_error_keeps_source() {
        use std::error::Error;

        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = LoggerError::write("file", io_err);

        let source = err.source().expect("write error carries its io source");
        assert_eq!(source.to_string(), "access denied");
    }

    #[test]
    fn test_from_conversions() {
        fn read_missing() -> Result<String> {
            Ok(std::fs::read_to_string("/nonexistent-dir/chainlog.json")?)
        }
        fn parse_garbage() -> Result<serde_json::Value> {
            Ok(serde_json::from_str("{ not json")?)
        }

        assert!(matches!(read_missing(), Err(LoggerError::Io(_))));

        let err = parse_garbage().unwrap_err();
        assert!(matches!(err, LoggerError::Json(_)));
        assert!(err.to_string().starts_with("JSON error: "));
    }
}
