//! Basic logger usage example
//!
//! Demonstrates named loggers, level thresholds and custom formats.
//!
//! Run with: cargo run --example basic_usage

use rust_named_logger::prelude::*;
use rust_named_logger::{concat_message, info, warning};

fn main() -> Result<()> {
    println!("=== Rust Named Logger - Basic Usage Example ===\n");

    let registry = LoggerRegistry::new();
    let logger = registry.create("app");

    println!("1. Default format, INFO threshold:");
    logger.debug("This is a debug message (hidden)");
    logger.info("This is an info message");
    logger.warning("This is a warning message");
    logger.error("This is an error message");

    println!("\n2. DEBUG threshold and a custom format:");
    logger.set_level(LogLevel::DEBUG);
    logger.set_format("[${level}] ${name} (${file}:${line}) ${message}")?;
    logger.set_time_format("%H:%M:%S");
    logger.debug("Debug messages are visible now");
    info!(logger, "Processing {} items", 100);
    logger.info(concat_message!("took ", 12, "ms"));

    println!("\n3. Rejected format keeps the previous one:");
    if let Err(e) = logger.set_format("${when} ${message}") {
        warning!(logger, "format rejected: {}", e);
    }

    println!("\n4. Looking up the logger by name:");
    if let Some(same) = registry.get("app") {
        same.info("Found through the registry");
    }

    println!("\n5. A level name that does not parse turns logging off:");
    logger.set_level(LogLevel::parse("verbose"));
    logger.error("Not shown");

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
