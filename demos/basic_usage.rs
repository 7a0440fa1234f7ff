//! Basic chain logger usage example
//!
//! Demonstrates building a chain by hand, routing by severity, and logging
//! custom types.
//!
//! Run with: cargo run --example basic_usage

use chainlog::prelude::*;
use chainlog::{info, warning};

struct Disk {
    id: u32,
    label: &'static str,
}

impl Stringify for Disk {
    fn stringify(&self) -> String {
        format!("[{},{}]", self.id, self.label)
    }
}

fn main() -> Result<()> {
    println!("=== chainlog - Basic Usage Example ===\n");

    let log_path = std::env::temp_dir().join("chainlog-basic-usage.log");
    let recent = BufferSink::new();

    // Errors and worse go to stderr and stop there; everything else falls
    // through to the file, and the buffer keeps a copy of notices and up.
    let chain = OutputChain::new()
        .link(ConsoleSink::stderr(), Severity::Error, false)
        .link(FileSink::truncate(&log_path)?, Severity::Debug, true)
        .link(recent.clone(), Severity::Notice, true);

    let logger = Logger::global();
    logger.set_chain(chain);

    println!("1. Logging at different severities:");
    let disk = Disk { id: 5, label: "sda" };
    logger.message(Severity::Error).append("disk ").value(&disk).append(" failed");
    logger.message(Severity::Notice).append("raw status byte ").value(&222u8);
    info!(logger, "scrubbing {} sectors", 4096);
    warning!(logger, "spare pool at {}%", 12);

    println!("\n2. Raising the file threshold at runtime:");
    logger.update_chain(|chain| {
        if let Some(link) = chain.get_mut(1) {
            link.set_threshold(Severity::Warning);
        }
    });
    info!(logger, "this info line is filtered out of the file");

    logger.shutdown()?;

    println!("   file contents ({}):", log_path.display());
    for line in std::fs::read_to_string(&log_path)?.lines() {
        println!("     {}", line);
    }
    println!("   buffered: {:?}", recent.messages());

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
