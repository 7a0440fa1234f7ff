//! Output chain: an ordered sequence of filtered sinks
//!
//! Every message is offered to the links in order. A link writes the
//! message when its severity passes the link's threshold, and the traversal
//! stops only at a link that wrote the message and does not propagate on
//! match. Messages a link filtered out always fall through to the next one.
//!
//! # Example
//!
//! ```
//! use chainlog::prelude::*;
//!
//! let audit = BufferSink::new();
//! let chain = OutputChain::new()
//!     .link(ConsoleSink::stderr(), Severity::Error, false)
//!     .link(audit.clone(), Severity::Debug, true);
//!
//! let logger = Logger::with_chain(chain);
//! logger.log(Severity::Info, "falls through to the buffer").unwrap();
//! assert_eq!(audit.len(), 1);
//! ```

use super::{error::Result, severity::Severity, sink::Sink};
use std::fmt;

/// One stage of an [`OutputChain`]: a sink with its filter and propagation policy.
pub struct Link {
    sink: Box<dyn Sink>,
    threshold: Severity,
    propagate_on_match: bool,
}

impl Link {
    pub fn new(sink: impl Sink + 'static, threshold: Severity, propagate_on_match: bool) -> Self {
        Self::boxed(Box::new(sink), threshold, propagate_on_match)
    }

    pub fn boxed(sink: Box<dyn Sink>, threshold: Severity, propagate_on_match: bool) -> Self {
        Self {
            sink,
            threshold,
            propagate_on_match,
        }
    }

    /// Replace the threshold. Already delivered messages are unaffected.
    pub fn set_threshold(&mut self, threshold: Severity) {
        self.threshold = threshold;
    }

    #[inline]
    pub fn threshold(&self) -> Severity {
        self.threshold
    }

    #[inline]
    pub fn propagate_on_match(&self) -> bool {
        self.propagate_on_match
    }

    pub fn set_propagate_on_match(&mut self, propagate: bool) {
        self.propagate_on_match = propagate;
    }

    #[inline]
    pub fn accepts(&self, severity: Severity) -> bool {
        severity.passes(self.threshold)
    }

    pub fn sink(&self) -> &dyn Sink {
        self.sink.as_ref()
    }

    pub fn sink_mut(&mut self) -> &mut dyn Sink {
        self.sink.as_mut()
    }

    /// Offer a message to this link.
    ///
    /// Returns whether the traversal should continue with the next link.
    pub fn offer(&mut self, severity: Severity, text: &str) -> Result<bool> {
        if !self.accepts(severity) {
            return Ok(true);
        }
        self.sink.write(severity, text)?;
        Ok(self.propagate_on_match)
    }
}

impl fmt::Debug for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Link")
            .field("sink", &self.sink.name())
            .field("threshold", &self.threshold)
            .field("propagate_on_match", &self.propagate_on_match)
            .finish()
    }
}

/// Ordered list of [`Link`]s owned by a [`Logger`](super::logger::Logger).
#[derive(Debug, Default)]
pub struct OutputChain {
    links: Vec<Link>,
}

impl OutputChain {
    pub fn new() -> Self {
        Self { links: Vec::new() }
    }

    /// Append a sink to the end of the chain
    #[must_use = "builder methods return a new value"]
    pub fn link(
        mut self,
        sink: impl Sink + 'static,
        threshold: Severity,
        propagate_on_match: bool,
    ) -> Self {
        self.links.push(Link::new(sink, threshold, propagate_on_match));
        self
    }

    pub fn push(&mut self, link: Link) {
        self.links.push(link);
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Link> {
        self.links.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Link> {
        self.links.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Link> {
        self.links.iter()
    }

    /// Walk the chain with one message.
    ///
    /// The first sink error stops the traversal and is returned; links
    /// after the failing one do not see the message.
    pub fn deliver(&mut self, severity: Severity, text: &str) -> Result<()> {
        for link in self.links.iter_mut() {
            if !link.offer(severity, text)? {
                break;
            }
        }
        Ok(())
    }

    /// Flush every sink, returning the first error after attempting all.
    pub fn flush(&mut self) -> Result<()> {
        let mut first_error = None;
        for link in self.links.iter_mut() {
            if let Err(e) = link.sink.flush() {
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}

impl From<Vec<Link>> for OutputChain {
    fn from(links: Vec<Link>) -> Self {
        Self { links }
    }
}
