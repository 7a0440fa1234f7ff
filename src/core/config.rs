//! Declarative chain configuration
//!
//! Describes a chain topology as data so it can be loaded at startup, for
//! example from a JSON file:
//!
//! ```
//! use chainlog::ChainConfig;
//!
//! let config = ChainConfig::from_json(r#"{
//!     "links": [
//!         { "sink": { "type": "stderr" }, "threshold": "error", "propagate": false },
//!         { "sink": { "type": "stdout" }, "threshold": "info" }
//!     ]
//! }"#).unwrap();
//!
//! let chain = config.build().unwrap();
//! assert_eq!(chain.len(), 2);
//! ```

use super::{
    chain::{Link, OutputChain},
    error::{LoggerError, Result},
    severity::Severity,
    sink::Sink,
};
use crate::appenders::{BufferSink, ConsoleSink, FileSink};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Description of one concrete sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SinkConfig {
    Stdout,
    Stderr,
    File {
        path: PathBuf,
        #[serde(default)]
        truncate: bool,
    },
    Syslog {
        program: String,
    },
    Buffer,
}

impl SinkConfig {
    /// Construct the sink, acquiring its resource.
    pub fn build(&self) -> Result<Box<dyn Sink>> {
        match self {
            SinkConfig::Stdout => Ok(Box::new(ConsoleSink::stdout())),
            SinkConfig::Stderr => Ok(Box::new(ConsoleSink::stderr())),
            SinkConfig::File { path, truncate } => Ok(Box::new(FileSink::open(path, *truncate)?)),
            SinkConfig::Syslog { program } => build_syslog(program),
            SinkConfig::Buffer => Ok(Box::new(BufferSink::new())),
        }
    }
}

#[cfg(all(unix, feature = "syslog"))]
fn build_syslog(program: &str) -> Result<Box<dyn Sink>> {
    Ok(Box::new(crate::appenders::SyslogSink::new(program)?))
}

#[cfg(not(all(unix, feature = "syslog")))]
fn build_syslog(_program: &str) -> Result<Box<dyn Sink>> {
    Err(LoggerError::config(
        "SyslogSink",
        "syslog output is not available on this build",
    ))
}

fn default_threshold() -> Severity {
    Severity::Debug
}

fn default_propagate() -> bool {
    true
}

/// One link: a sink with its threshold and propagation policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkConfig {
    pub sink: SinkConfig,
    #[serde(default = "default_threshold")]
    pub threshold: Severity,
    #[serde(default = "default_propagate")]
    pub propagate: bool,
}

impl LinkConfig {
    pub fn new(sink: SinkConfig, threshold: Severity, propagate: bool) -> Self {
        Self {
            sink,
            threshold,
            propagate,
        }
    }

    pub fn build(&self) -> Result<Link> {
        Ok(Link::boxed(self.sink.build()?, self.threshold, self.propagate))
    }
}

/// Ordered list of links making up a chain
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainConfig {
    #[serde(default)]
    pub links: Vec<LinkConfig>,
}

impl ChainConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| LoggerError::resource_unavailable(path.display().to_string(), e))?;
        Self::from_json(&content)
    }

    /// Build every sink in order.
    ///
    /// A sink that fails to construct aborts the whole build; sinks built
    /// before it are dropped again.
    pub fn build(&self) -> Result<OutputChain> {
        let links = self
            .links
            .iter()
            .map(LinkConfig::build)
            .collect::<Result<Vec<_>>>()?;
        Ok(OutputChain::from(links))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied() {
        let config = ChainConfig::from_json(r#"{ "links": [ { "sink": { "type": "buffer" } } ] }"#)
            .unwrap();

        assert_eq!(
            config.links,
            vec![LinkConfig::new(SinkConfig::Buffer, Severity::Debug, true)]
        );
    }

    #[test]
    fn test_file_sink_config() {
        let config = ChainConfig::from_json(
            r#"{ "links": [ { "sink": { "type": "file", "path": "/tmp/app.log" }, "threshold": "warn" } ] }"#,
        )
        .unwrap();

        assert_eq!(
            config.links[0].sink,
            SinkConfig::File {
                path: PathBuf::from("/tmp/app.log"),
                truncate: false
            }
        );
        assert_eq!(config.links[0].threshold, Severity::Warning);
    }

    #[test]
    fn test_unknown_severity_rejected() {
        let result = ChainConfig::from_json(
            r#"{ "links": [ { "sink": { "type": "stdout" }, "threshold": "verbose" } ] }"#,
        );
        assert!(matches!(result, Err(LoggerError::Json(_))));
    }

    #[test]
    fn test_failed_sink_aborts_build() {
        let config = ChainConfig {
            links: vec![
                LinkConfig::new(SinkConfig::Buffer, Severity::Debug, true),
                LinkConfig::new(
                    SinkConfig::File {
                        path: PathBuf::from("/nonexistent-dir/sub/app.log"),
                        truncate: true,
                    },
                    Severity::Debug,
                    true,
                ),
            ],
        };

        let result = config.build();
        assert!(matches!(result, Err(LoggerError::ResourceUnavailable { .. })));
    }

    #[test]
    fn test_empty_config_builds_empty_chain() {
        let chain = ChainConfig::default().build().unwrap();
        assert!(chain.is_empty());
    }
}
