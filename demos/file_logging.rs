//! File logging example
//!
//! Demonstrates configuring a logger from JSON and writing to a file.
//!
//! Run with: cargo run --example file_logging

use rust_named_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== Rust Named Logger - File Logging Example ===\n");

    let config = LoggerConfig::from_json(
        r#"{
            "level": "debug",
            "format": "${time} ${level} ${name}: ${message}",
            "time_format": "%Y-%m-%dT%H:%M:%S",
            "output": { "file": "application.log" }
        }"#,
    )?;

    let logger = new_logger("worker");
    logger.apply_config(&config)?;

    logger.info("Application started");
    logger.debug("Loading configuration...");
    logger.warning("Using default settings for some options");
    logger.error("Failed to load optional plugin");

    for i in 1..=5 {
        logger.infof(format_args!("Processing item {}/5", i));
    }

    logger.info("All operations completed");
    logger.flush()?;

    let metrics = logger.metrics();
    println!("Lines written: {}", metrics.total_logged());
    println!("Lines lost: {}", metrics.dropped_count());

    println!("\n=== Example completed successfully! ===");
    println!("Check 'application.log' for the full log output");

    Ok(())
}
